//! # client
//!
//! Leptos + WASM front-end for the parts inventory. Renders the parts,
//! vehicles and locations screens plus the part details page, and talks to
//! the REST backend through the host server's `/api/v1` proxy.
//!
//! The crate builds twice: with `ssr` for server-side rendering inside the
//! `server` binary, and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("parts-ui hydrating");
    leptos::mount::hydrate_body(app::App);
}
