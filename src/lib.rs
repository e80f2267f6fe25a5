#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod cv;
#[cfg(feature = "ssr")]
pub mod relay;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // form failures are reported to the browser console
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("couldn't start console logger: {err}");
    }
    leptos::mount::hydrate_body(App);
}
