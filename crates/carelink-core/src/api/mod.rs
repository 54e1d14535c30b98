//! Data API backends
//!
//! The messaging page never talks to a concrete backend directly; it goes
//! through [`DataApi`], so the host can plug in the REST service, a JSON
//! fixture file, or an in-memory store.

mod file;
mod http;
mod memory;

pub use file::{FileApi, Fixture};
pub use http::HttpApi;
pub use memory::InMemoryApi;

use async_trait::async_trait;

use crate::error::CareResult;
use crate::types::{Message, NewMessage, Patient};

/// Remote operations behind the data store.
#[async_trait]
pub trait DataApi: Send + Sync + std::fmt::Debug {
    /// Current patient list.
    async fn fetch_patients(&self) -> CareResult<Vec<Patient>>;

    /// Current message list visible to the session.
    async fn fetch_messages(&self) -> CareResult<Vec<Message>>;

    /// Create a message from `sender_id`.
    ///
    /// The backend assigns `id` and `createdAt`. Backends that authenticate
    /// by token may ignore `sender_id` and derive the sender themselves.
    async fn add_message(&self, sender_id: &str, input: &NewMessage) -> CareResult<Message>;
}
