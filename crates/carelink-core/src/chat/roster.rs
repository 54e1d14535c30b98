//! Patient roster for administrators
//!
//! Search filtering plus the per-patient summary (message count, unread
//! badge) shown in each roster entry.

use super::thread::Thread;
use crate::types::{Message, Patient};

/// Patients whose full name contains `search_term`, case-insensitively.
///
/// Source order is preserved. An empty term returns every patient.
pub fn filtered_patients<'a>(search_term: &str, patients: &'a [Patient]) -> Vec<&'a Patient> {
    patients
        .iter()
        .filter(|p| p.name_matches(search_term))
        .collect()
}

/// One row of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub patient_id: String,
    pub full_name: String,
    /// Messages in this patient's thread
    pub message_count: usize,
    /// Thread holds an unread message addressed to the viewer
    pub has_unread: bool,
    /// Patient is the current selection
    pub is_selected: bool,
}

impl RosterEntry {
    /// Summarize `patient` as seen by `viewer_id`.
    pub fn build(
        patient: &Patient,
        messages: &[Message],
        viewer_id: &str,
        selected: Option<&str>,
    ) -> Self {
        let thread = Thread::for_participant(&patient.id, messages);
        Self {
            patient_id: patient.id.clone(),
            full_name: patient.full_name.clone(),
            message_count: thread.len(),
            has_unread: thread.has_unread_for(viewer_id),
            is_selected: selected == Some(patient.id.as_str()),
        }
    }
}

/// Roster rows for the patients matching `search_term`.
pub fn build_roster(
    patients: &[Patient],
    messages: &[Message],
    search_term: &str,
    viewer_id: &str,
    selected: Option<&str>,
) -> Vec<RosterEntry> {
    filtered_patients(search_term, patients)
        .into_iter()
        .map(|p| RosterEntry::build(p, messages, viewer_id, selected))
        .collect()
}
