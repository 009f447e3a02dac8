//! geodini-wasm — browser client for the Geodini geocoding API
//!
//! This crate puts `geodini-core` on a web page: a search form, a ranked
//! results table and a slide-in drawer with a Leaflet map.
//!
//! What it provides
//! ----------------
//! - Panic hook and console greeting on module load (via `#[wasm_bindgen(start)]`)
//! - `GeodiniApp.mount(config)`: binds to the page and owns all client state
//! - `rank_response(json)`: the display order for a raw API response, for
//!   pages that draw their own table
//! - `version()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { GeodiniApp } from 'geodini-wasm';
//!
//! async function main() {
//!   await init();
//!   const app = GeodiniApp.mount(JSON.stringify({
//!     base_url: 'https://api.geodini.labs.sunu.in',
//!   }));
//!   // ?q=... in the address bar is searched on load
//! }
//! main();
//! ```
//!
//! Page contract
//! -------------
//! `mount` expects Leaflet's global `L` and these element ids:
//! `search-form`, `search-query`, `loading`, `search-info`,
//! `results-container`, `result-count`, `query-time`, `results-body`,
//! `no-results`, `map-drawer`, `overlay` (the drawer backdrop), `map-title`,
//! `close-map`, `map`. `#notice` is created when missing.
//! Elements with class `clickable-example` and a `data-query` attribute run
//! that query when clicked. See `www/index.html`.
use geodini_core::{merge_response, GeodiniError, SearchResponse};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod leaflet;

#[cfg(target_arch = "wasm32")]
pub use app::GeodiniApp;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing Geodini WASM module...".into());
}

pub(crate) fn to_js_error(e: GeodiniError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parses a search response and returns its rows in display order:
/// `[{ result, original_index, badge }]`, where `badge` is
/// `{ kind: "none" | "preferred" }` or `{ kind: "next_probable", rank }`.
#[wasm_bindgen]
pub fn rank_response(json: &str) -> Result<JsValue, JsValue> {
    let response = SearchResponse::from_json(json).map_err(to_js_error)?;
    let rows = merge_response(&response);
    rows.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
