//! Request payload builder and response extraction.

use crate::{config::ApiConfig, error::FetchError, model::PriceRecord, model::QueryParams};
use dfp_utils::dates::format_date;
use serde_json::{json, Value};

/// Falls back to `default` when the user left the field blank.
fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Build the fixed-shape GraphQL request body for `params`.
pub fn build_payload(config: &ApiConfig, params: &QueryParams) -> Value {
    json!({
        "operationName": config.operation_name,
        "variables": {
            "input": {
                "sessionId": or_default(&params.session_id, &config.default_session_id),
                "origin": or_default(&params.airport_code, &config.default_airport_code),
                "destination": config.destination,
                "userCurrency": config.currency,
                "pricingCurrency": config.currency,
                "since": format_date(&params.since_date),
                "until": format_date(&params.until_date),
                "source": config.source,
            }
        },
        "query": config.query_document,
    })
}

/// Pull the price list out of `{ data: { <operation>: [...] } }`, saying
/// why when it cannot.
pub fn parse_prices(config: &ApiConfig, body: &Value) -> Result<Vec<PriceRecord>, FetchError> {
    let list = body
        .get("data")
        .and_then(|data| data.get(config.operation_name.as_str()))
        .filter(|list| !list.is_null())
        .ok_or(FetchError::MissingData)?;
    serde_json::from_value::<Vec<PriceRecord>>(list.clone()).map_err(|e| {
        FetchError::Malformed(format!("{} list: {}", config.operation_name, e))
    })
}

/// Like [`parse_prices`], with every failure collapsed into `None`.
///
/// A missing, null or malformed list is `None`. An empty list is `Some`.
pub fn extract_prices(config: &ApiConfig, body: &Value) -> Option<Vec<PriceRecord>> {
    parse_prices(config, body).ok()
}
