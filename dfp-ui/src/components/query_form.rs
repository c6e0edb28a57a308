//! Search inputs: session id, airport code, since/until pickers and the
//! search button.

use crate::state::AppState;
use dfp_core::form::FormEvent;
use dfp_utils::dates::{format_date, parse_picker_value, today};
use dioxus::prelude::*;

const LABEL_STYLE: &str = "font-weight: bold; display: flex; flex-direction: column; gap: 4px;";
const INPUT_STYLE: &str = "padding: 8px 12px; border: 1px solid #BDBDBD; border-radius: 4px;";

/// The four query fields plus the search action.
#[component]
pub fn QueryForm() -> Element {
    let mut state = use_context::<AppState>();
    let form = state.form.read().clone();
    let since = format_date(&form.since_date);
    let until = format_date(&form.until_date);

    let on_session_input = move |evt: Event<FormData>| {
        state.dispatch(FormEvent::SessionIdChanged(evt.value()));
    };

    let on_code_input = move |evt: Event<FormData>| {
        state.dispatch(FormEvent::AirportCodeChanged(evt.value()));
    };

    let on_since_change = move |evt: Event<FormData>| {
        state.dispatch(FormEvent::SinceDateChanged(parse_picker_value(&evt.value())));
    };

    let on_until_change = move |evt: Event<FormData>| {
        state.dispatch(FormEvent::UntilDateChanged {
            date: parse_picker_value(&evt.value()),
            today: today(),
        });
    };

    let on_search = move |_| {
        state.search();
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;",
            label {
                style: LABEL_STYLE,
                "sessionID"
                input {
                    r#type: "text",
                    style: INPUT_STYLE,
                    value: "{form.session_id}",
                    oninput: on_session_input,
                }
            }
            label {
                style: LABEL_STYLE,
                "機場代碼"
                input {
                    r#type: "text",
                    style: INPUT_STYLE,
                    value: "{form.airport_code}",
                    oninput: on_code_input,
                }
            }
        }
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;",
            label {
                style: LABEL_STYLE,
                "Since Date"
                input {
                    r#type: "date",
                    style: INPUT_STYLE,
                    value: "{since}",
                    onchange: on_since_change,
                }
            }
            label {
                style: LABEL_STYLE,
                "Until Date"
                input {
                    r#type: "date",
                    style: INPUT_STYLE,
                    value: "{until}",
                    onchange: on_until_change,
                }
            }
            button {
                style: "padding: 4px 10px; border: 1px solid #1976D2; color: #1976D2; background: #FFF; border-radius: 4px; cursor: pointer;",
                onclick: on_search,
                "搜尋"
            }
        }
    }
}
