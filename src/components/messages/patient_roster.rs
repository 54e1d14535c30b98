//! Patient Roster Component
//!
//! Searchable patient list shown to administrators. Each row shows the
//! patient's name, how many messages their thread holds, and an unread
//! badge when something addressed to the viewer is still unread.

use carelink_core::RosterEntry;
use carelink_ui::{Button, ButtonVariant, SearchInput, UnreadBadge};
use dioxus::prelude::*;

#[component]
pub fn PatientRoster(
    /// Rows for the patients matching the search
    entries: Vec<RosterEntry>,
    /// Current search text
    search_term: String,
    on_search: EventHandler<String>,
    /// Receives the clicked patient's id
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        aside { class: "patient-roster",
            div { class: "roster-search",
                SearchInput {
                    value: search_term,
                    oninput: on_search,
                }
            }

            div { class: "roster-list",
                if entries.is_empty() {
                    p { class: "roster-empty", "No matching patients" }
                }
                for entry in entries {
                    RosterItem {
                        key: "{entry.patient_id}",
                        entry: entry.clone(),
                        on_select: on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn RosterItem(entry: RosterEntry, on_select: EventHandler<String>) -> Element {
    let patient_id = entry.patient_id.clone();
    let item_class = if entry.is_selected {
        "roster-item roster-item-selected"
    } else {
        "roster-item"
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: item_class.to_string(),
            title: entry.full_name.clone(),
            onclick: move |_| on_select.call(patient_id.clone()),
            div { class: "roster-item-body",
                p { class: "roster-item-name", "{entry.full_name}" }
                p { class: "roster-item-count", "{entry.message_count} messages" }
            }
            if entry.has_unread {
                UnreadBadge {}
            }
        }
    }
}
