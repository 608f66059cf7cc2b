//! Nuke Platform - entry screens
//!
//! Landing page, combined sign-in/sign-up form and password reset form for
//! the Nuke vehicle management platform, built with Leptos and WebAssembly.
//! Authentication is simulated: submitting a form waits briefly and shows
//! a toast.

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
