//! # client
//!
//! Leptos + WASM frontend for the Urban Ritual marketing site.
//!
//! This crate contains the routes, pages, components and static copy of the
//! site. The signature drinks strip is rendered here and animated by the
//! `gallery` crate through the `InfiniteGallery` bridge component. The same
//! code renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
