//! Responsive grid of price cards.

use crate::components::PriceCard;
use crate::state::AppState;
use dioxus::prelude::*;

/// One card per record of the latest accepted search, in upstream order.
#[component]
pub fn PriceGrid() -> Element {
    let state = use_context::<AppState>();
    let results = state.form.read().results.clone();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 16px; margin: 64px 0;",
            for (i, record) in results.iter().enumerate() {
                PriceCard {
                    key: "{i}-{record.date}",
                    record: record.clone(),
                }
            }
        }
    }
}
