//! `Transport` backed by the browser's `fetch`, via `web_sys`.

use dfp_core::{error::FetchError, fetcher::Transport};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    FetchError::Transport(format!("{}: {:?}", context, err)).into()
}

/// POSTs JSON from the page with CORS mode. Only usable on `wasm32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Transport("No window available".into()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body.to_string()));

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| js_error("Failed to build request", e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| js_error("Failed to set headers", e))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("Request failed", e))?
            .dyn_into()
            .map_err(|e| js_error("Unexpected fetch result", e))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()).into());
        }

        let text = JsFuture::from(
            response
                .text()
                .map_err(|e| js_error("Failed to read response body", e))?,
        )
        .await
        .map_err(|e| js_error("Failed to read response body", e))?
        .as_string()
        .ok_or_else(|| FetchError::Transport("Response body is not text".into()))?;

        Ok(serde_json::from_str(&text)?)
    }
}
