//! Sends the price query and turns the response into records.
//!
//! The HTTP stack is behind [`Transport`] so the same fetcher runs on the
//! native `reqwest` client and on the browser's `fetch`.

use crate::{
    config::ApiConfig,
    model::{PriceRecord, QueryParams},
    query::{build_payload, parse_prices},
};
use log::{error, info};
use serde_json::Value;

/// A single JSON-in, JSON-out POST.
///
/// Implementations must treat a non-2xx status as an error.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value>;
}

/// Fetch prices, reporting why it failed.
pub async fn try_fetch_prices<T: Transport>(
    transport: &T,
    config: &ApiConfig,
    params: &QueryParams,
) -> anyhow::Result<Vec<PriceRecord>> {
    let url = config.endpoint_url();
    let payload = build_payload(config, params);

    info!(
        "Querying {} prices for {} from {} to {}",
        config.operation_name,
        payload["variables"]["input"]["origin"]
            .as_str()
            .unwrap_or_default(),
        params.since_date,
        params.until_date
    );

    let body = transport.post_json(&url, &payload).await?;
    let records = parse_prices(config, &body)?;

    info!("Received {} price records", records.len());
    Ok(records)
}

/// Fetch prices, returning `None` on any failure.
///
/// Never propagates an error: the failure is logged here, as one line
/// carrying the cause, and the caller sees the "no data" sentinel.
/// Transports and the parser do not log failures themselves.
pub async fn fetch_prices<T: Transport>(
    transport: &T,
    config: &ApiConfig,
    params: &QueryParams,
) -> Option<Vec<PriceRecord>> {
    match try_fetch_prices(transport, config, params).await {
        Ok(records) => Some(records),
        Err(e) => {
            error!("Price fetch from {} failed: {}", config.endpoint_url(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::cell::RefCell;

    /// Replays a canned outcome and remembers what was posted.
    struct MockTransport {
        response: Result<Value, FetchError>,
        requests: RefCell<Vec<(String, Value)>>,
    }

    impl MockTransport {
        fn replying(response: Value) -> Self {
            Self {
                response: Ok(response),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: FetchError) -> Self {
            Self {
                response: Err(err),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for MockTransport {
        async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), body.clone()));
            match &self.response {
                Ok(v) => Ok(v.clone()),
                Err(e) => Err(e.clone().into()),
            }
        }
    }

    fn sample_params() -> QueryParams {
        QueryParams {
            session_id: "abc123".to_string(),
            airport_code: "NGO".to_string(),
            since_date: NaiveDate::from_ymd_opt(2023, 12, 19).unwrap(),
            until_date: NaiveDate::from_ymd_opt(2023, 12, 26).unwrap(),
        }
    }

    fn price_body() -> Value {
        json!({
            "data": {
                "appLiveDailyPrices": [
                    {"origin": "NGO", "destination": "XX3", "date": "2023-12-19",
                     "currency": "TWD", "amount": 12345, "fareLabels": [{"id": "cheapest"}]}
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_posts_once_to_endpoint() {
        let transport = MockTransport::replying(price_body());
        let config = ApiConfig::default();

        let records = fetch_prices(&transport, &config, &sample_params())
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 12345.0);

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, config.endpoint_url());
        assert_eq!(requests[0].1["variables"]["input"]["since"], "2023-12-19");
        assert_eq!(requests[0].1["variables"]["input"]["until"], "2023-12-26");
    }

    #[tokio::test]
    async fn test_transport_failure_is_none() {
        let transport = MockTransport::failing(FetchError::Transport("connection refused".into()));
        let result = fetch_prices(&transport, &ApiConfig::default(), &sample_params()).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_bad_status_is_none() {
        let transport = MockTransport::failing(FetchError::Status(502));
        let result = fetch_prices(&transport, &ApiConfig::default(), &sample_params()).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_missing_data_is_none() {
        let transport = MockTransport::replying(json!({"data": {"somethingElse": []}}));
        let result = fetch_prices(&transport, &ApiConfig::default(), &sample_params()).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_try_fetch_reports_missing_data() {
        let transport = MockTransport::replying(json!({}));
        let err = try_fetch_prices(&transport, &ApiConfig::default(), &sample_params())
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<FetchError>(),
            Some(&FetchError::MissingData)
        );
    }

    #[tokio::test]
    async fn test_try_fetch_reports_malformed_list_with_cause() {
        let transport = MockTransport::replying(json!({"data": {"appLiveDailyPrices": "oops"}}));
        let err = try_fetch_prices(&transport, &ApiConfig::default(), &sample_params())
            .await
            .unwrap_err();
        match err.downcast_ref::<FetchError>() {
            Some(FetchError::Malformed(msg)) => assert!(msg.contains("appLiveDailyPrices")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_try_fetch_reports_status() {
        let transport = MockTransport::failing(FetchError::Status(502));
        let err = try_fetch_prices(&transport, &ApiConfig::default(), &sample_params())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad response status: 502");
    }

    #[tokio::test]
    async fn test_empty_list_is_some() {
        let transport = MockTransport::replying(json!({"data": {"appLiveDailyPrices": []}}));
        let result = fetch_prices(&transport, &ApiConfig::default(), &sample_params()).await;
        assert_eq!(result, Some(Vec::new()));
    }
}
