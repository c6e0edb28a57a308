//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the core `FormState` in a signal provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and mutate it only through `dispatch`, which
//! runs the core reducer.

use crate::browser::BrowserTransport;
use dfp_core::config::ApiConfig;
use dfp_core::fetcher::fetch_prices;
use dfp_core::form::{reduce, FormEvent, FormState};
use dfp_utils::dates::today;
use dioxus::prelude::*;

/// Shared application state for the fare price form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Endpoint and payload constants
    pub config: Signal<ApiConfig>,
    /// Field values, results and search status
    pub form: Signal<FormState>,
}

impl AppState {
    /// Create a new AppState with the default config and today's date.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let form = FormState::new(&config, today());
        Self {
            config: Signal::new(config),
            form: Signal::new(form),
        }
    }

    /// Run one event through the reducer.
    pub fn dispatch(&mut self, event: FormEvent) {
        let next = reduce(&self.form.peek(), event);
        self.form.set(next);
    }

    /// Issue a search with the current field values.
    ///
    /// The form stays editable while the request is outstanding. Issuing
    /// another search does not cancel this one; its result is dropped by the
    /// reducer if a newer search was issued in the meantime.
    pub fn search(&mut self) {
        self.dispatch(FormEvent::SearchIssued);
        let Some(ticket) = self.form.peek().search_ticket() else {
            return;
        };
        let config = self.config.peek().clone();
        let mut state = *self;

        spawn(async move {
            let outcome = fetch_prices(&BrowserTransport, &config, &ticket.params).await;
            if outcome.is_none() {
                log::info!("Search #{} returned no result", ticket.seq);
            }
            state.dispatch(FormEvent::SearchCompleted {
                seq: ticket.seq,
                outcome,
            });
        });
    }
}
