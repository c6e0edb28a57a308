//! Dioxus components and browser transport for the daily fare price form.
//!
//! This crate provides:
//! - `browser`: a `Transport` backed by the browser's `fetch`
//! - `state`: reactive AppState with Dioxus Signals, driven by the core reducer
//! - `components`: the query form, the card grid and status components

pub mod browser;
pub mod state;
pub mod components;
