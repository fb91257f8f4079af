//! HEATWORKS - marketing site for a one-time local SEO audit
//!
//! Server-rendered with Leptos and hydrated in the browser. The hero section
//! hosts an animated fly that hops between page elements along randomized
//! Bézier curves; see [`core::fly`] for the flight model.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
