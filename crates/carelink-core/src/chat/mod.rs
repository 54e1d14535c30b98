//! Thread and roster derivation
//!
//! Pure functions over the data store's snapshots. Nothing here talks to
//! the network or mutates shared collections; the view recomputes these on
//! every render.
//!
//! ```text
//! patients ──filtered_patients(search)──▶ roster rows ◀── thread counts/unread
//! messages ──thread_for(participant)────▶ Thread (newest first)
//! ```

mod roster;
mod thread;

pub use roster::{build_roster, filtered_patients, RosterEntry};
pub use thread::{thread_for, Thread};

use crate::types::Message;

/// A message prepared for the thread panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadEntry {
    pub message: Message,
    /// Sent by the viewer (right-aligned bubble)
    pub is_mine: bool,
    /// Unread and not sent by the viewer
    pub show_unread: bool,
    /// Formatted creation time
    pub timestamp: String,
}

impl ThreadEntry {
    /// Build a display entry for `viewer_id`.
    pub fn new(message: Message, viewer_id: &str) -> Self {
        let is_mine = message.is_sent_by(viewer_id);
        let show_unread = !message.is_read && !is_mine;
        let timestamp = message.display_time();
        Self {
            message,
            is_mine,
            show_unread,
            timestamp,
        }
    }
}

/// Display entries for a whole thread, in thread order.
pub fn thread_entries(thread: &Thread, viewer_id: &str) -> Vec<ThreadEntry> {
    thread
        .messages()
        .iter()
        .cloned()
        .map(|m| ThreadEntry::new(m, viewer_id))
        .collect()
}
