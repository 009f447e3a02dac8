//! `window.fetch` transport for the search endpoint.
use geodini_core::{GeodiniError, Result, SearchResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, UrlSearchParams};

fn network(e: JsValue) -> GeodiniError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "request failed".to_string());
    GeodiniError::Network(message)
}

/// `GET {endpoint}?query=...`, parsed into a [`SearchResponse`].
pub async fn fetch_search(endpoint: &str, query: &str) -> Result<SearchResponse> {
    let params = UrlSearchParams::new().map_err(network)?;
    params.append("query", query);
    let url = format!("{endpoint}?{}", String::from(params.to_string()));

    let window = web_sys::window().ok_or_else(|| GeodiniError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(GeodiniError::Api {
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| GeodiniError::Network("response body is not text".into()))?;
    SearchResponse::from_json(&body)
}
