//! Query implementation for the daily fare price API.

use crate::{render, OutputFormat, SearchArgs};
use dfp_core::client::HttpTransport;
use dfp_core::config::ApiConfig;
use dfp_core::fetcher::try_fetch_prices;
use dfp_core::model::QueryParams;
use dfp_core::query::build_payload;
use dfp_utils::dates::{today, week_after};
use log::info;

/// Load the config file if one was given, then apply the hostname override.
pub fn resolve_config(search: &SearchArgs) -> anyhow::Result<ApiConfig> {
    let mut config = match &search.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ApiConfig::from_json_file(path)?
        }
        None => ApiConfig::default(),
    };
    if let Some(hostname) = &search.hostname {
        config.hostname = hostname.clone();
    }
    Ok(config)
}

/// Fill in the default date range. An until date before the since date is
/// passed through untouched.
pub fn resolve_params(search: &SearchArgs) -> QueryParams {
    let since_date = search.since.unwrap_or_else(today);
    let until_date = search.until.unwrap_or_else(|| week_after(&since_date));
    QueryParams {
        session_id: search.session_id.trim().to_string(),
        airport_code: search.airport.trim().to_string(),
        since_date,
        until_date,
    }
}

/// Run one price query and print the results.
pub async fn run_query(
    search: &SearchArgs,
    format: OutputFormat,
    columns: usize,
) -> anyhow::Result<()> {
    let config = resolve_config(search)?;
    let params = resolve_params(search);

    let transport = HttpTransport::new();
    let records = try_fetch_prices(&transport, &config, &params).await?;

    let output = match format {
        OutputFormat::Cards => render::render_cards(&records, columns),
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Csv => render::render_csv(&records)?,
    };
    println!("{}", output);

    info!("Query complete. {} records", records.len());
    Ok(())
}

/// Print the request body that `run_query` would send.
pub fn run_payload(search: &SearchArgs) -> anyhow::Result<()> {
    let config = resolve_config(search)?;
    let params = resolve_params(search);
    let payload = build_payload(&config, &params);

    println!("POST {}", config.endpoint_url());
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn search_args() -> SearchArgs {
        SearchArgs {
            session_id: String::new(),
            airport: String::new(),
            since: None,
            until: None,
            config: None,
            hostname: None,
        }
    }

    #[test]
    fn test_resolve_params_defaults_until_to_week_after_since() {
        let since = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
        let args = SearchArgs {
            since: Some(since),
            ..search_args()
        };
        let params = resolve_params(&args);
        assert_eq!(params.since_date, since);
        assert_eq!(params.until_date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_resolve_params_keeps_explicit_until() {
        let args = SearchArgs {
            airport: " KIX ".to_string(),
            since: NaiveDate::from_ymd_opt(2023, 12, 28),
            until: NaiveDate::from_ymd_opt(2023, 12, 1),
            ..search_args()
        };
        let params = resolve_params(&args);
        assert_eq!(params.airport_code, "KIX");
        assert_eq!(params.until_date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }

    #[test]
    fn test_resolve_config_hostname_override() {
        let args = SearchArgs {
            hostname: Some("http://localhost:8082".to_string()),
            ..search_args()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(
            config.endpoint_url(),
            "http://localhost:8082/api/v1/momoMock/redirect"
        );
    }

    #[test]
    fn test_resolve_config_missing_file_is_error() {
        let args = SearchArgs {
            config: Some("/nonexistent/dfp.json".into()),
            ..search_args()
        };
        assert!(resolve_config(&args).is_err());
    }
}
