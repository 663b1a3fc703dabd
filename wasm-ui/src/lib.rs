//! Web dashboard for launchdash-rs
//!
//! A Yew-based single-page dashboard visualizing SpaceX launch
//! outcomes: a site dropdown, a payload range control, and two plotly
//! charts computed by the core library.

mod app;
mod charts;
mod components;
mod plotly_bindings;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
