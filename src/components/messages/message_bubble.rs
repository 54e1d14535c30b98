//! Message Bubble Component
//!
//! One message in the thread panel. Messages sent by the viewer sit on the
//! right; everything else on the left.

use carelink_core::ThreadEntry;
use carelink_ui::{BadgeTone, UnreadBadge};
use dioxus::prelude::*;

/// Individual message bubble component
#[component]
pub fn MessageBubble(entry: ThreadEntry) -> Element {
    let (row_class, bubble_class) = if entry.is_mine {
        ("message-row message-row-sent", "message-bubble message-bubble-sent")
    } else {
        ("message-row message-row-received", "message-bubble message-bubble-received")
    };

    rsx! {
        div { class: "{row_class}",
            div { class: "{bubble_class}",
                p { class: "message-bubble-content", "{entry.message.content}" }

                div { class: "message-bubble-footer",
                    span { class: "message-bubble-time", "{entry.timestamp}" }
                    if entry.show_unread {
                        UnreadBadge { tone: BadgeTone::Subtle }
                    }
                }
            }
        }
    }
}
