//! Grid of shop photos on the home page.

use leptos::prelude::*;

use crate::content::COLLAGE;

#[component]
pub fn PhotoCollage() -> impl IntoView {
    view! {
        <div class="collage">
            {COLLAGE
                .iter()
                .map(|photo| {
                    view! {
                        <figure class=format!("collage__tile {}", photo.span)>
                            <img src=photo.src alt=photo.alt loading="lazy"/>
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
