//! Loading indicator shown while a search is outstanding.

use crate::state::AppState;
use dfp_core::{config::ApiConfig, model::QueryParams};
use dfp_utils::dates::format_date;
use dioxus::prelude::*;

/// Names the origin and range being searched. A blank airport falls back
/// to the configured default, as the request does.
pub fn searching_label(params: &QueryParams, config: &ApiConfig) -> String {
    let airport = match params.airport_code.trim() {
        "" => config.default_airport_code.as_str(),
        code => code,
    };
    format!(
        "Searching fares from {} for {} to {}...",
        airport,
        format_date(&params.since_date),
        format_date(&params.until_date)
    )
}

#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let params = state.form.read().query_params();
    let label = searching_label(&params, &state.config.read());

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 16px; color: #666;",
            "{label}"
        }
    }
}
