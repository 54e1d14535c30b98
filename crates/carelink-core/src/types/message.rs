//! Message records and timestamp display
//!
//! [`Message`] is what the data layer returns; [`NewMessage`] is the input
//! for creating one. Ids, sender and creation time are assigned by the data
//! layer, never by the page.

use chrono::{DateTime, Local, NaiveDateTime, ParseError, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Display format for message timestamps (`2024/03/05 14:07`).
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Accepted `createdAt` layouts that carry no offset; read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A message between a patient and the care team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub is_read: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Whether `participant_id` is the sender or the receiver.
    pub fn involves(&self, participant_id: &str) -> bool {
        self.sender_id == participant_id || self.receiver_id == participant_id
    }

    pub fn is_sent_by(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }

    /// Unread and addressed to `user_id`.
    pub fn is_unread_for(&self, user_id: &str) -> bool {
        !self.is_read && self.receiver_id == user_id
    }

    /// Creation time in the viewer's local timezone.
    pub fn display_time(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Input for the data layer's add-message operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub receiver_id: String,
    pub content: String,
    pub is_read: bool,
}

impl NewMessage {
    /// A fresh, unread message for `receiver_id`.
    pub fn unread(receiver_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            content: content.into(),
            is_read: false,
        }
    }

    /// Materialize the stored record once the data layer has assigned
    /// id, sender and timestamp.
    pub fn into_message(
        self,
        id: impl Into<String>,
        sender_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Message {
        Message {
            id: id.into(),
            sender_id: sender_id.into(),
            receiver_id: self.receiver_id,
            content: self.content,
            is_read: self.is_read,
            created_at,
        }
    }
}

/// Parse a wire timestamp: RFC 3339, or a bare date-time taken as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    let rfc3339 = match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => return Ok(ts.with_timezone(&Utc)),
        Err(e) => e,
    };
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or(rfc3339)
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid createdAt {:?}: {}", raw, e))
    })
}

/// Format a timestamp for display in local time.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

/// Format a timestamp for display in an explicit timezone.
pub fn format_timestamp_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}
