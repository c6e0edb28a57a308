//! A single daily price card.

use dfp_core::card::amount_label;
use dfp_core::model::PriceRecord;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PriceCardProps {
    pub record: PriceRecord,
}

/// Card with the record's date and either its grouped amount or "-".
#[component]
pub fn PriceCard(props: PriceCardProps) -> Element {
    let label = amount_label(&props.record);

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; align-items: center;",
            div {
                style: "padding: 16px; min-width: 110px; background: #FFF; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,0.2);",
                div { "{props.record.date}" }
                div { "{label}" }
            }
        }
    }
}
