//! Leptos frontend for the browser.

pub mod app;
pub mod dom;

use leptos::*;
use wasm_bindgen::prelude::*;

use app::App;

use stockroom_client::ClientConfig;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_env();
    stockroom_observability::init(&config.log_filter);
    tracing::info!(api_url = %config.api_url, "starting inventory client");

    mount_to_body(move || view! { <App config=config/> });
}
