//! Sticky top navigation with logo and section links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::LOGO_SRC;
use crate::util::nav::{NAV_LINKS, is_active};

/// Site navigation bar. The link for the current page is highlighted.
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__home" class:navbar__link--active=move || is_active(&pathname.get(), "/")>
                <img class="navbar__logo" src=LOGO_SRC alt="Home" width="330" height="49"/>
            </a>
            <div class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        view! {
                            <a
                                href=href
                                class="navbar__link"
                                class:navbar__link--active=move || is_active(&pathname.get(), href)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
