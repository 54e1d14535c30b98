//! Message Composer Component
//!
//! Input bar under the thread. The text is owned by the page; this
//! component only reports edits and send requests.

use carelink_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

#[component]
pub fn MessageComposer(
    /// Current composer text
    value: String,
    /// Called on every edit
    on_input: EventHandler<String>,
    /// Called when the send control is used
    on_send: EventHandler<()>,
    /// Send control enabled
    can_send: bool,
    #[props(default = "Type a message...".to_string())]
    placeholder: String,
) -> Element {
    rsx! {
        div { class: "message-composer",
            Input {
                value: value,
                oninput: on_input,
                onsubmit: move |_| {
                    if can_send {
                        on_send.call(());
                    }
                },
                placeholder: placeholder,
                class: "message-composer-input".to_string(),
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: !can_send,
                title: "Send message (Enter)".to_string(),
                onclick: move |_| on_send.call(()),
                "Send"
            }
        }
    }
}
