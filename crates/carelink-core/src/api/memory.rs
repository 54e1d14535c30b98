//! In-memory backend
//!
//! Holds patients and messages in process. Used for tests and for running
//! the page without a server. Call counters and failure switches let tests
//! observe exactly what the view asked for.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use ulid::Ulid;

use super::DataApi;
use crate::error::{CareError, CareResult};
use crate::types::{Message, NewMessage, Patient};

#[derive(Debug, Default)]
pub struct InMemoryApi {
    patients: Mutex<Vec<Patient>>,
    messages: Mutex<Vec<Message>>,
    /// Inputs received by `add_message`, in call order
    sent: Mutex<Vec<NewMessage>>,
    patient_fetches: AtomicUsize,
    message_fetches: AtomicUsize,
    fail_fetch_patients: AtomicBool,
    fail_fetch_messages: AtomicBool,
    fail_add_message: AtomicBool,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(patients: Vec<Patient>, messages: Vec<Message>) -> Self {
        Self {
            patients: Mutex::new(patients),
            messages: Mutex::new(messages),
            ..Self::default()
        }
    }

    pub fn set_patients(&self, patients: Vec<Patient>) {
        *self.patients.lock() = patients;
    }

    pub fn fail_fetch_patients(&self, fail: bool) {
        self.fail_fetch_patients.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetch_messages(&self, fail: bool) {
        self.fail_fetch_messages.store(fail, Ordering::SeqCst);
    }

    pub fn fail_add_message(&self, fail: bool) {
        self.fail_add_message.store(fail, Ordering::SeqCst);
    }

    /// Every `add_message` input seen so far, including failed calls.
    pub fn sent(&self) -> Vec<NewMessage> {
        self.sent.lock().clone()
    }

    pub fn patient_fetch_count(&self) -> usize {
        self.patient_fetches.load(Ordering::SeqCst)
    }

    pub fn message_fetch_count(&self) -> usize {
        self.message_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataApi for InMemoryApi {
    async fn fetch_patients(&self) -> CareResult<Vec<Patient>> {
        self.patient_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch_patients.load(Ordering::SeqCst) {
            return Err(CareError::Unavailable("patients".to_string()));
        }
        Ok(self.patients.lock().clone())
    }

    async fn fetch_messages(&self) -> CareResult<Vec<Message>> {
        self.message_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch_messages.load(Ordering::SeqCst) {
            return Err(CareError::Unavailable("messages".to_string()));
        }
        Ok(self.messages.lock().clone())
    }

    async fn add_message(&self, sender_id: &str, input: &NewMessage) -> CareResult<Message> {
        self.sent.lock().push(input.clone());
        if self.fail_add_message.load(Ordering::SeqCst) {
            return Err(CareError::Unavailable("add message".to_string()));
        }

        let message = input
            .clone()
            .into_message(Ulid::new().to_string(), sender_id, Utc::now());
        self.messages.lock().push(message.clone());
        Ok(message)
    }
}
