//! Daily Fare Price Calendar
//!
//! A single-page form that queries the upstream daily price API for an
//! origin airport and date range, then renders one card per day.
//!
//! Data flow:
//! 1. Field edits go through `AppState::dispatch` into the core reducer.
//! 2. The search button issues a numbered search and spawns the fetch.
//! 3. The fetch posts the GraphQL payload with the browser's `fetch`.
//! 4. The completion is dispatched back; only the latest search is applied,
//!    and a failed search leaves the previous cards in place.

use dfp_core::form::SearchStatus;
use dfp_ui::components::{LoadingSpinner, NoticeDisplay, PageHeader, PriceGrid, QueryForm};
use dfp_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fare-calendar-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let status = state.form.read().status;
    let description = {
        let config = state.config.read();
        format!(
            "Daily lowest fares to {} in {}",
            config.destination, config.currency
        )
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Daily Fare Prices".to_string(),
                description,
            }

            QueryForm {}

            {match status {
                SearchStatus::Searching => rsx! { LoadingSpinner {} },
                SearchStatus::Empty => rsx! {
                    NoticeDisplay {
                        message: "No price data returned. Showing the previous results.".to_string(),
                    }
                },
                SearchStatus::Loaded(0) => rsx! {
                    NoticeDisplay {
                        message: "No prices for this date range.".to_string(),
                    }
                },
                SearchStatus::Idle | SearchStatus::Loaded(_) => rsx! {},
            }}

            PriceGrid {}
        }
    }
}
