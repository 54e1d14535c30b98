//! Messages page state
//!
//! [`MessagesView`] is the UI-independent half of the messaging page. It
//! owns the ephemeral page state (search term, selected patient, composer
//! text), derives roster and thread from the store's snapshots, and runs the
//! load and send actions. The Dioxus page and the CLI both drive it.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──load()──▶ active ──deactivate()──▶ inactive
//!                     │                         (late results are dropped)
//!                     ├─ set_search_term / select_patient / set_composer
//!                     └─ handle_send_message ─▶ add_message ─▶ clear composer ─▶ fetch_messages
//! ```
//!
//! Failures from the data layer are logged and swallowed: the page keeps
//! showing whatever it had.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::chat::{build_roster, filtered_patients, thread_entries, RosterEntry, Thread, ThreadEntry};
use crate::session::AuthSession;
use crate::store::DataStore;
use crate::types::{Message, NewMessage, Patient, User, UserRole};

/// Result of [`MessagesView::handle_send_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing sent: blank composer or nobody signed in
    Skipped,
    /// Stored by the data layer
    Sent(Message),
    /// The data layer rejected the message; composer text kept
    Failed,
}

#[derive(Debug)]
struct PageState {
    search_term: String,
    selected_patient: Option<String>,
    composer: String,
    loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_patient: None,
            composer: String::new(),
            loading: true,
        }
    }
}

/// State and actions of the messaging page.
#[derive(Debug)]
pub struct MessagesView {
    session: Arc<AuthSession>,
    store: Arc<DataStore>,
    state: Mutex<PageState>,
    active: AtomicBool,
}

impl MessagesView {
    pub fn new(session: Arc<AuthSession>, store: Arc<DataStore>) -> Self {
        Self {
            session,
            store,
            state: Mutex::new(PageState::default()),
            active: AtomicBool::new(true),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Fetch patients and messages concurrently.
    ///
    /// Both requests run to completion. A failed one is logged and leaves its
    /// half of the store unchanged; the other still lands. There is no retry.
    pub async fn load(&self) {
        if !self.is_active() {
            return;
        }

        let (patients, messages) =
            tokio::join!(self.store.fetch_patients(), self.store.fetch_messages());
        if let Err(e) = patients {
            tracing::error!(error = %e, "Failed to load patients");
        }
        if let Err(e) = messages {
            tracing::error!(error = %e, "Failed to load messages");
        }

        if self.is_active() {
            self.state.lock().loading = false;
        }
    }

    /// Mark the page as gone. Pending actions stop updating page state.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// True until the first load attempt has finished.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    // ------------------------------------------------------------------
    // Viewer
    // ------------------------------------------------------------------

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(UserRole::is_admin)
    }

    pub fn is_patient(&self) -> bool {
        self.role().is_some_and(UserRole::is_patient)
    }

    fn viewer_id(&self) -> String {
        self.current_user().map(|u| u.id).unwrap_or_default()
    }

    /// Page subtitle for the viewer's role.
    pub fn subtitle(&self) -> &'static str {
        if self.is_admin() {
            "Message history with patients"
        } else {
            "Message history with your care manager"
        }
    }

    // ------------------------------------------------------------------
    // Page state
    // ------------------------------------------------------------------

    pub fn search_term(&self) -> String {
        self.state.lock().search_term.clone()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.lock().search_term = term.into();
    }

    pub fn selected_patient(&self) -> Option<String> {
        self.state.lock().selected_patient.clone()
    }

    /// Select a roster patient. Selection is never cleared afterwards.
    pub fn select_patient(&self, patient_id: impl Into<String>) {
        let patient_id = patient_id.into();
        tracing::debug!(patient = %patient_id, "Patient selected");
        self.state.lock().selected_patient = Some(patient_id);
    }

    pub fn composer(&self) -> String {
        self.state.lock().composer.clone()
    }

    pub fn set_composer(&self, text: impl Into<String>) {
        self.state.lock().composer = text.into();
    }

    // ------------------------------------------------------------------
    // Derived data
    // ------------------------------------------------------------------

    /// Patients matching the current search term, in store order.
    pub fn filtered_patients(&self) -> Vec<Patient> {
        let patients = self.store.patients();
        let term = self.search_term();
        filtered_patients(&term, &patients)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Thread for any participant id.
    pub fn thread_for(&self, participant_id: &str) -> Thread {
        Thread::for_participant(participant_id, &self.store.messages())
    }

    /// The selected patient's thread, or the viewer's own when nothing is
    /// selected.
    pub fn active_thread(&self) -> Thread {
        match self.selected_patient() {
            Some(patient_id) => self.thread_for(&patient_id),
            None => self.thread_for(&self.viewer_id()),
        }
    }

    /// Active thread prepared for display.
    pub fn active_thread_entries(&self) -> Vec<ThreadEntry> {
        thread_entries(&self.active_thread(), &self.viewer_id())
    }

    /// Roster rows; empty unless the viewer is an administrator.
    pub fn roster(&self) -> Vec<RosterEntry> {
        if !self.is_admin() {
            return Vec::new();
        }
        let selected = self.selected_patient();
        build_roster(
            &self.store.patients(),
            &self.store.messages(),
            &self.search_term(),
            &self.viewer_id(),
            selected.as_deref(),
        )
    }

    pub fn roster_visible(&self) -> bool {
        self.is_admin()
    }

    /// Composer shows for patients, and for admins once a patient is picked.
    pub fn composer_visible(&self) -> bool {
        match self.role() {
            Some(UserRole::Admin) => self.selected_patient().is_some(),
            Some(UserRole::Patient) => true,
            _ => false,
        }
    }

    /// Send control is enabled only for non-blank text.
    pub fn can_send(&self) -> bool {
        !self.state.lock().composer.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Send the composer text to the selected patient.
    ///
    /// Blank text or a missing user is a no-op. Otherwise the message goes to
    /// the data layer once; on success the composer is cleared and the
    /// message list re-fetched once. On failure the composer keeps its text.
    /// Without a selection (patient viewers) the receiver is empty and the
    /// data layer routes the message to the care team.
    pub async fn handle_send_message(&self) -> SendOutcome {
        let content = self.composer();
        if content.trim().is_empty() {
            return SendOutcome::Skipped;
        }
        let Some(user) = self.current_user() else {
            return SendOutcome::Skipped;
        };

        let receiver_id = self.selected_patient().unwrap_or_default();
        let input = NewMessage::unread(receiver_id, content.clone());

        let message = match self.store.add_message(&user, input).await {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "Error sending message");
                return SendOutcome::Failed;
            }
        };

        if self.is_active() {
            let mut state = self.state.lock();
            // Keep anything typed while the send was in flight
            if state.composer == content {
                state.composer.clear();
            }
        }

        if let Err(e) = self.store.fetch_messages().await {
            tracing::warn!(error = %e, "Failed to refresh messages after send");
        }

        SendOutcome::Sent(message)
    }
}
