//! Context providers for CareLink.
//!
//! The session and data store are created in `main` and provided once by
//! the root component. Pages pull them with the hooks below and pass them
//! on explicitly; nothing below the page reaches for context.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! let store = use_store();
//! let view = MessagesView::new(session, store);
//! ```

use std::sync::Arc;

use carelink_core::{AuthSession, SharedStore};
use dioxus::prelude::*;

/// Collaborators shared by every page.
#[derive(Clone, Debug)]
pub struct AppServices {
    pub session: Arc<AuthSession>,
    pub store: SharedStore,
}

/// Hook to access the authentication session from context.
pub fn use_session() -> Arc<AuthSession> {
    use_context::<Arc<AuthSession>>()
}

/// Hook to access the shared data store from context.
pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}
