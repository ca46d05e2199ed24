//! # jobboard-client
//!
//! Leptos + WASM frontend for the JobHunt job board.
//!
//! This crate contains pages, components, session and job state, the REST
//! client for the job board backend, and the route guard that keeps
//! protected pages behind a login. The host crate server-renders [`app::App`]
//! with the `ssr` feature; the browser bundle hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
