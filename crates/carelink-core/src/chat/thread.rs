//! Message threads for a single participant
//!
//! A [`Thread`] is every message a participant sent or received, newest
//! first. Threads are derived copies: building one never reorders the
//! source collection.

use crate::types::Message;

/// Messages involving one participant, ordered newest first.
///
/// # Example
///
/// ```ignore
/// let thread = Thread::for_participant("P1", &store.messages());
/// for msg in thread.messages() {
///     println!("{}: {}", msg.display_time(), msg.content);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    /// Participant whose messages this thread collects
    pub participant_id: String,
    /// Messages, newest `created_at` first
    messages: Vec<Message>,
}

impl Thread {
    /// Collect the messages where `participant_id` is sender or receiver.
    ///
    /// Sorting is stable, so messages sharing a timestamp keep their
    /// source order.
    pub fn for_participant(participant_id: &str, messages: &[Message]) -> Self {
        let mut selected: Vec<Message> = messages
            .iter()
            .filter(|m| m.involves(participant_id))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            participant_id: participant_id.to_string(),
            messages: selected,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether any message is unread and addressed to `user_id`.
    pub fn has_unread_for(&self, user_id: &str) -> bool {
        self.messages.iter().any(|m| m.is_unread_for(user_id))
    }
}

/// Free-function form of [`Thread::for_participant`].
pub fn thread_for(participant_id: &str, messages: &[Message]) -> Thread {
    Thread::for_participant(participant_id, messages)
}
