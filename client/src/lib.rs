//! Browser binding for the session coordinator.
//!
//! ARCHITECTURE
//! ============
//! `app` builds the backend and the coordinator, provides both through
//! context, and bridges coordinator updates into reactive signals.
//! `state` holds the signal payloads, `util` the redirect and storage glue,
//! `pages` and `components` the minimal screens that exercise the binding.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Library `tracing` events reach the console through the `log` bridge.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
