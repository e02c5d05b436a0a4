//! Shop card with address, phone and a visit CTA.

use leptos::prelude::*;

use crate::components::button::CtaButton;
use crate::content::{LOCATION_ICON_SRC, Location, PHONE_ICON_SRC};
use crate::util::color::css_color;

#[component]
pub fn LocationCard(location: Location) -> impl IntoView {
    let style = format!(
        "background-color: {}; color: {};",
        css_color(location.bg_color),
        css_color(location.text_color)
    );

    view! {
        <div class="location-card">
            <div class="location-card__photo">
                <img src=location.image alt=location.name/>
            </div>
            <div class="location-card__body" style=style>
                <div class="location-card__info">
                    <h3 class="location-card__name">{location.name}</h3>
                    <div class="location-card__line">
                        <img src=LOCATION_ICON_SRC alt="" width="20" height="20"/>
                        <p>{location.address}</p>
                    </div>
                    <div class="location-card__line">
                        <img src=PHONE_ICON_SRC alt="" width="20" height="20"/>
                        <p>{location.phone}</p>
                    </div>
                </div>
                <div class="location-card__cta">
                    <CtaButton
                        text="VISIT US NOW!"
                        path="/locations"
                        bg_color="FF9500"
                        color="FFFFFF"
                        bg_color_hovered="white"
                        color_hovered="black"
                    />
                </div>
            </div>
        </div>
    }
}
