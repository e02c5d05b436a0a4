//! Home page: hero, signature drinks, story, collage and testimonials.

use leptos::prelude::*;

use crate::components::button::CtaButton;
use crate::components::infinite_gallery::InfiniteGallery;
use crate::components::photo_collage::PhotoCollage;
use crate::components::testimonial_card::TestimonialCard;
use crate::content::{
    HERO_ACCENT, HERO_KICKER, HERO_SRC, HERO_TAIL, SIGNATURE_BLURB, SIGNATURE_SCROLL_SPEED, SIGNATURE_TITLE,
    STORY_PARAGRAPHS, STORY_TITLE, TESTIMONIALS, signature_drinks,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <img class="hero__image" src=HERO_SRC alt="Home Page"/>
            <div class="hero__content">
                <CtaButton
                    text="VISIT US NOW!"
                    path="/locations"
                    bg_color="FF9500"
                    color="FFFFFF"
                    bg_color_hovered="1E1E1E"
                    color_hovered="FFFFFF"
                />
                <h1 class="hero__headline">{HERO_KICKER}</h1>
                <div class="hero__line">
                    <h1 class="hero__accent">{HERO_ACCENT}</h1>
                    <h1 class="hero__headline">{HERO_TAIL}</h1>
                </div>
            </div>
        </section>

        <section class="signature">
            <div class="section-header">
                <h2 class="section-header__title">{SIGNATURE_TITLE}</h2>
                <p class="section-header__blurb">{SIGNATURE_BLURB}</p>
            </div>

            <InfiniteGallery items=signature_drinks() scroll_speed=SIGNATURE_SCROLL_SPEED/>

            <div class="signature__actions">
                <CtaButton
                    text="Order Now!"
                    path="/locations"
                    bg_color="1E1E1E"
                    color="FFFFFF"
                    bg_color_hovered="FF9500"
                    color_hovered="FFFFFF"
                />
                <CtaButton
                    text="View Full Menu"
                    path="/menu"
                    bg_color="1E1E1E"
                    color="FFFFFF"
                    bg_color_hovered="FF9500"
                    color_hovered="FFFFFF"
                />
            </div>
        </section>

        <section class="story">
            <h2 class="section-header__title">{STORY_TITLE}</h2>
            {STORY_PARAGRAPHS.iter().map(|p| view! { <p class="story__text">{*p}</p> }).collect_view()}
            <PhotoCollage/>
        </section>

        <section class="testimonials">
            {TESTIMONIALS
                .iter()
                .map(|t| {
                    view! {
                        <TestimonialCard
                            text=t.text
                            customer_image=t.customer_image
                            bg_color=t.bg_color
                            text_color=t.text_color
                        />
                    }
                })
                .collect_view()}
        </section>
    }
}
