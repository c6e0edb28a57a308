//! Notice shown when the latest search produced nothing to display.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeDisplayProps {
    pub message: String,
}

/// Displays a notice in a styled box. Informational only: the search
/// form keeps working and previous cards stay on screen.
#[component]
pub fn NoticeDisplay(props: NoticeDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
            "{props.message}"
        }
    }
}
