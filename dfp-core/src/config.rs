//! Endpoint and payload constants, lifted into one swappable struct.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// GraphQL document sent verbatim with every request.
pub const DAILY_PRICES_QUERY: &str = "query appLiveDailyPrices($input: QueryLiveDailyPricesInput!) {\n  appLiveDailyPrices(input: $input) {\n    origin\n    destination\n    date\n    currency\n    amount\n    fareLabels {\n      id\n    }\n  }\n}\n";

/// Session id used when the form field is left empty.
pub const DEFAULT_SESSION_ID: &str = "651311dca8e7cf9ac60c16ee";

/// Origin airport used when the form field is left empty.
pub const DEFAULT_AIRPORT_CODE: &str = "NGO";

/// Everything about the upstream call that is not user input.
///
/// Every field has a default, so a JSON file only needs the fields it
/// overrides:
///
/// ```json
/// { "hostname": "http://localhost:8082" }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub hostname: String,
    pub path: String,
    /// Also the key the price list is read from under `data`.
    pub operation_name: String,
    pub destination: String,
    /// Sent as both `userCurrency` and `pricingCurrency`.
    pub currency: String,
    pub source: String,
    pub query_document: String,
    pub default_session_id: String,
    pub default_airport_code: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            hostname: "https://rich-kko.de.r.appspot.com".to_string(),
            path: "/api/v1/momoMock/redirect".to_string(),
            operation_name: "appLiveDailyPrices".to_string(),
            destination: "XX3".to_string(),
            currency: "TWD".to_string(),
            source: "resultPagePriceBrick".to_string(),
            query_document: DAILY_PRICES_QUERY.to_string(),
            default_session_id: DEFAULT_SESSION_ID.to_string(),
            default_airport_code: DEFAULT_AIRPORT_CODE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL the payload is posted to.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.hostname.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Parse a (possibly partial) JSON config.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a (possibly partial) JSON config from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_url() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint_url(),
            "https://rich-kko.de.r.appspot.com/api/v1/momoMock/redirect"
        );
    }

    #[test]
    fn test_endpoint_url_tolerates_slashes() {
        let config = ApiConfig {
            hostname: "http://localhost:8082/".to_string(),
            path: "api/v1/momoMock/redirect".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.endpoint_url(),
            "http://localhost:8082/api/v1/momoMock/redirect"
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            ApiConfig::from_json_str(r#"{"hostname": "http://localhost:8082", "currency": "JPY"}"#)
                .unwrap();
        assert_eq!(config.hostname, "http://localhost:8082");
        assert_eq!(config.currency, "JPY");
        assert_eq!(config.destination, "XX3");
        assert_eq!(config.default_session_id, DEFAULT_SESSION_ID);
        assert_eq!(config.query_document, DAILY_PRICES_QUERY);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ApiConfig::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ApiConfig::from_json_file("/nonexistent/dfp-config.json").is_err());
    }
}
