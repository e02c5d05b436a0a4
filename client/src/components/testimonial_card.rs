//! Customer quote card with an overlapping portrait.

use leptos::prelude::*;

use crate::util::color::css_color;

/// A testimonial card. The customer image hangs off the bottom-right corner.
#[component]
pub fn TestimonialCard(
    #[prop(into)] text: String,
    #[prop(into)] customer_image: String,
    #[prop(into)] bg_color: String,
    #[prop(into)] text_color: String,
) -> impl IntoView {
    let card_style = format!("background-color: {};", css_color(&bg_color));
    let quote_style = format!("color: {};", css_color(&text_color));

    view! {
        <div class="testimonial" style=card_style>
            <div class="testimonial__body">
                <blockquote class="testimonial__quote" style=quote_style>
                    "\u{201C}"{text}"\u{201D}"
                </blockquote>
            </div>
            <div class="testimonial__portrait">
                <img src=customer_image alt="Customer testimonial" width="200" height="79"/>
            </div>
        </div>
    }
}
