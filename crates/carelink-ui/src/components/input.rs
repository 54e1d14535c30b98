//! Input Field Components
//!
//! Controlled text and search inputs: the caller owns the value and
//! receives every edit through `oninput`.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when Enter is pressed
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut text = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: text(),
///         oninput: move |s| text.set(s),
///         placeholder: "Type a message...".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        input {
            class: "{input_class}",
            r#type: "text",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    if let Some(handler) = &props.onsubmit {
                        e.prevent_default();
                        handler.call(());
                    }
                }
            },
        }
    }
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search patients...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
