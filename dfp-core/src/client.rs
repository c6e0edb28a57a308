//! Native `reqwest` transport, used by the CLI.

use crate::{error::FetchError, fetcher::Transport};
use reqwest::Client;
use serde_json::Value;

/// Posts JSON with a shared `reqwest::Client`. No retries and no timeout
/// beyond the client's defaults.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()).into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))?;
        Ok(body)
    }
}
