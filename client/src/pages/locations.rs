//! Locations page listing every shop.

use leptos::prelude::*;

use crate::components::location_card::LocationCard;
use crate::content::LOCATIONS;

#[component]
pub fn LocationsPage() -> impl IntoView {
    view! {
        <section class="locations">
            <div class="section-header">
                <h2 class="section-header__title">"Visit Us"</h2>
            </div>
            <div class="locations__list">
                {LOCATIONS.iter().map(|location| view! { <LocationCard location=*location/> }).collect_view()}
            </div>
        </section>
    }
}
