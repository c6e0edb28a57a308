//! Search form state and its reducer.
//!
//! `FormState` is an immutable record: every user or network event goes
//! through [`reduce`], which returns the next state. Nothing here touches
//! the DOM or the network, so the whole form can be tested natively.
//!
//! Searches carry a sequence number. Only the completion of the most
//! recently issued search is applied; an older response that arrives late
//! is dropped.

use crate::{
    config::ApiConfig,
    model::{PriceRecord, QueryParams},
};
use chrono::NaiveDate;
use dfp_utils::dates::week_after;

/// What the results area should show besides the cards.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchStatus {
    /// No search finished yet.
    Idle,
    /// The latest search is still outstanding.
    Searching,
    /// The latest search returned no data. Previous cards are kept.
    Empty,
    /// The latest search returned this many records.
    Loaded(usize),
}

/// The params a search was issued with, tagged with its sequence number.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchTicket {
    pub seq: u64,
    pub params: QueryParams,
}

#[derive(Debug, PartialEq, Clone)]
pub enum FormEvent {
    SessionIdChanged(String),
    AirportCodeChanged(String),
    /// A cleared since picker sends `None`, which is ignored.
    SinceDateChanged(Option<NaiveDate>),
    /// A cleared until picker falls back to `today`.
    UntilDateChanged {
        date: Option<NaiveDate>,
        today: NaiveDate,
    },
    SearchIssued,
    SearchCompleted {
        seq: u64,
        outcome: Option<Vec<PriceRecord>>,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub struct FormState {
    pub session_id: String,
    pub airport_code: String,
    pub since_date: NaiveDate,
    pub until_date: NaiveDate,
    /// Cards in upstream order.
    pub results: Vec<PriceRecord>,
    pub status: SearchStatus,
    /// Sequence number of the most recently issued search, 0 before any.
    issued: u64,
}

impl FormState {
    /// Initial form: placeholder session id and airport, a one-week range
    /// starting `today`, no results.
    pub fn new(config: &ApiConfig, today: NaiveDate) -> Self {
        Self {
            session_id: config.default_session_id.clone(),
            airport_code: config.default_airport_code.clone(),
            since_date: today,
            until_date: week_after(&today),
            results: Vec::new(),
            status: SearchStatus::Idle,
            issued: 0,
        }
    }

    /// Current field values as query params.
    pub fn query_params(&self) -> QueryParams {
        QueryParams {
            session_id: self.session_id.clone(),
            airport_code: self.airport_code.clone(),
            since_date: self.since_date,
            until_date: self.until_date,
        }
    }

    /// Ticket for the most recently issued search, if any.
    pub fn search_ticket(&self) -> Option<SearchTicket> {
        if self.issued == 0 {
            return None;
        }
        Some(SearchTicket {
            seq: self.issued,
            params: self.query_params(),
        })
    }

    pub fn is_searching(&self) -> bool {
        self.status == SearchStatus::Searching
    }
}

/// Apply one event, returning the next state.
pub fn reduce(state: &FormState, event: FormEvent) -> FormState {
    let mut next = state.clone();
    match event {
        FormEvent::SessionIdChanged(value) => {
            next.session_id = value.trim().to_string();
        }
        FormEvent::AirportCodeChanged(value) => {
            next.airport_code = value.trim().to_string();
        }
        FormEvent::SinceDateChanged(None) => {}
        FormEvent::SinceDateChanged(Some(date)) => {
            next.since_date = date;
            if date > state.until_date {
                next.until_date = week_after(&date);
            }
        }
        FormEvent::UntilDateChanged { date, today } => {
            next.until_date = date.unwrap_or(today);
        }
        FormEvent::SearchIssued => {
            next.issued = state.issued + 1;
            next.status = SearchStatus::Searching;
        }
        FormEvent::SearchCompleted { seq, outcome } => {
            if seq != state.issued {
                log::info!(
                    "Dropping stale search result #{} (latest is #{})",
                    seq,
                    state.issued
                );
                return next;
            }
            match outcome {
                Some(records) => {
                    next.status = SearchStatus::Loaded(records.len());
                    next.results = records;
                }
                None => {
                    next.status = SearchStatus::Empty;
                }
            }
        }
    }
    next
}
