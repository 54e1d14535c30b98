//! CareLink Core Library
//!
//! Data layer and view logic for the CareLink patient messaging page.
//!
//! ## Overview
//!
//! Administrators exchange messages with patients; patients exchange
//! messages with their care team. This crate holds everything that is not
//! rendering:
//!
//! - **Types**: [`User`], [`Patient`], [`Message`], [`NewMessage`]
//! - **Data layer**: the [`DataApi`] trait with REST, fixture-file and
//!   in-memory backends, and the [`DataStore`] holding fetched snapshots
//! - **Session**: [`AuthSession`] with the signed-in user
//! - **View**: [`MessagesView`], the page's state and actions
//!
//! Collaborators are passed in explicitly; there is no global state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use carelink_core::{AuthSession, ClientConfig, DataStore, MessagesView, User, UserRole};
//!
//! let config = ClientConfig::from_parts(Some("https://care.example/api"), None, None, None)?;
//! let store = DataStore::shared(config.build_api()?);
//! let session = Arc::new(AuthSession::signed_in(User::new("A1", UserRole::Admin)));
//!
//! let view = MessagesView::new(session, store);
//! view.load().await;
//! view.select_patient("P1");
//! view.set_composer("Your results are ready.");
//! view.handle_send_message().await;
//! ```

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

// Re-exports
pub use api::{DataApi, FileApi, Fixture, HttpApi, InMemoryApi};
pub use chat::{build_roster, filtered_patients, thread_entries, thread_for, RosterEntry, Thread, ThreadEntry};
pub use config::{Backend, ClientConfig};
pub use error::{CareError, CareResult};
pub use session::AuthSession;
pub use store::{DataStore, SharedStore};
pub use types::*;
pub use view::{MessagesView, SendOutcome};
