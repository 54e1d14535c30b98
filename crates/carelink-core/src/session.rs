//! Authentication session
//!
//! Holds the signed-in [`User`], if any. Built once at startup, shared
//! between pages as an `Arc<AuthSession>` and handed to views explicitly.

use crate::types::User;

#[derive(Debug, Default)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        tracing::info!(user = %user.id, role = %user.role, "Signed in");
        Self { user: Some(user) }
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
