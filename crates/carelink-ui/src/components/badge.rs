//! Badge Components
//!
//! Pill-shaped status labels, e.g. the "Unread" marker on roster entries
//! and message bubbles.

use dioxus::prelude::*;

/// Badge tone
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeTone {
    /// Accent color; draws attention
    #[default]
    Info,
    /// Muted text only
    Subtle,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Info => "badge badge-info",
            BadgeTone::Subtle => "badge badge-subtle",
        }
    }
}

#[component]
pub fn Badge(
    /// Badge text
    label: String,
    #[props(default)]
    tone: BadgeTone,
) -> Element {
    rsx! {
        span { class: "{tone.class()}", "{label}" }
    }
}

/// The standard unread marker
#[component]
pub fn UnreadBadge(#[props(default)] tone: BadgeTone) -> Element {
    rsx! {
        Badge { label: "Unread".to_string(), tone: tone }
    }
}
