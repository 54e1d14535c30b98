//! Shared data store
//!
//! In-memory copies of the patient and message lists, refreshed from a
//! [`DataApi`]. Pages read snapshots and call the fetch/add operations; the
//! store is the only writer of its collections.
//!
//! Locks are `parking_lot` and never held across an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::DataApi;
use crate::error::CareResult;
use crate::types::{Message, NewMessage, Patient, User};

/// Store handle shared across pages.
pub type SharedStore = Arc<DataStore>;

#[derive(Debug)]
pub struct DataStore {
    api: Arc<dyn DataApi>,
    patients: RwLock<Vec<Patient>>,
    messages: RwLock<Vec<Message>>,
}

impl DataStore {
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            patients: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn shared(api: Arc<dyn DataApi>) -> SharedStore {
        Arc::new(Self::new(api))
    }

    /// Snapshot of the current patient list.
    pub fn patients(&self) -> Vec<Patient> {
        self.patients.read().clone()
    }

    /// Snapshot of the current message list.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    /// Refresh `patients` from the API. On error the old list is kept.
    pub async fn fetch_patients(&self) -> CareResult<()> {
        let patients = self.api.fetch_patients().await?;
        tracing::debug!(count = patients.len(), "Patients refreshed");
        *self.patients.write() = patients;
        Ok(())
    }

    /// Refresh `messages` from the API. On error the old list is kept.
    pub async fn fetch_messages(&self) -> CareResult<()> {
        let messages = self.api.fetch_messages().await?;
        tracing::debug!(count = messages.len(), "Messages refreshed");
        *self.messages.write() = messages;
        Ok(())
    }

    /// Create a message from `sender`.
    ///
    /// The local list is not touched; callers refresh with
    /// [`fetch_messages`](Self::fetch_messages) to pick up the stored copy.
    pub async fn add_message(&self, sender: &User, input: NewMessage) -> CareResult<Message> {
        let message = self.api.add_message(&sender.id, &input).await?;
        tracing::info!(
            id = %message.id,
            sender = %message.sender_id,
            receiver = %message.receiver_id,
            "Message sent"
        );
        Ok(message)
    }
}
