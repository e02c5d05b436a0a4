//! Call-to-action link with hover color swap.

use leptos::prelude::*;

use crate::util::color::swap_style;

/// Link styled as a button.
///
/// Colors accept hex with or without `#`, or any CSS color name.
#[component]
pub fn CtaButton(
    #[prop(into)] text: String,
    #[prop(into)] path: String,
    #[prop(into)] bg_color: String,
    #[prop(into)] color: String,
    #[prop(into)] bg_color_hovered: String,
    #[prop(into)] color_hovered: String,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let style = move || swap_style(hovered.get(), &bg_color, &color, &bg_color_hovered, &color_hovered);

    view! {
        <a
            href=path
            class="cta-button"
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {text}
        </a>
    }
}
