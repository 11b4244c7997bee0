//! # slidechat
//!
//! Leptos + WASM chat client for an assistant that sometimes answers with a
//! renderable slide artifact instead of prose.
//!
//! This crate contains pages, components, application state, and the
//! network layer. Classification, payload validity, the compile pipeline's
//! text stages, and scale/fit math live in the pure `artifact` crate; the
//! browser-only glue (sandboxed evaluation, iframe surfaces, HTTP) is gated
//! behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the application over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
