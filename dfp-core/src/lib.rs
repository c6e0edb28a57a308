//! Core library for querying daily fare prices.
//!
//! Everything here compiles for both native targets and `wasm32`, so the
//! Dioxus app and the CLI share one payload builder, one fetcher and one
//! form-state reducer.
//!
//! - `model`: `QueryParams` and the `PriceRecord` wire type
//! - `config`: `ApiConfig`, the endpoint and every fixed payload constant
//! - `query`: request payload builder and response extraction
//! - `fetcher`: the `Transport` seam plus `fetch_prices`
//! - `form`: immutable form state and its reducer
//! - `card`: how a single price record is labelled on a card
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dfp_core::{config::ApiConfig, model::QueryParams, query::build_payload};
//!
//! let config = ApiConfig::default();
//! let params = QueryParams {
//!     session_id: String::new(),
//!     airport_code: "TPE".to_string(),
//!     since_date: NaiveDate::from_ymd_opt(2023, 12, 19).unwrap(),
//!     until_date: NaiveDate::from_ymd_opt(2023, 12, 26).unwrap(),
//! };
//!
//! let payload = build_payload(&config, &params);
//! assert_eq!(payload["variables"]["input"]["origin"], "TPE");
//! assert_eq!(payload["variables"]["input"]["since"], "2023-12-19");
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod form;
pub mod model;
pub mod query;

#[cfg(feature = "api")]
pub mod client;
