//! Message Thread Component
//!
//! The thread panel body: loading state, empty state, or the message list
//! (newest first).

use carelink_core::ThreadEntry;
use dioxus::prelude::*;

use super::message_bubble::MessageBubble;

#[component]
pub fn MessageThread(
    /// Messages in display order
    entries: Vec<ThreadEntry>,
    /// Initial load still running
    #[props(default = false)]
    loading: bool,
) -> Element {
    rsx! {
        div { class: "thread-messages",
            if loading {
                div { class: "thread-loading",
                    div { class: "loading-spinner" }
                    p { "Loading messages..." }
                }
            } else if entries.is_empty() {
                div { class: "thread-empty",
                    p { class: "empty-icon", "\u{2709}" }
                    h3 { class: "empty-text", "No messages" }
                    p { class: "empty-hint", "There are no messages yet." }
                }
            } else {
                for entry in &entries {
                    MessageBubble {
                        key: "{entry.message.id}",
                        entry: entry.clone()
                    }
                }
            }
        }
    }
}
