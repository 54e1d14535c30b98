//! Core types for CareLink
//!
//! Records exchanged with the data layer. Wire names follow the API's
//! camelCase JSON (`fullName`, `senderId`, `createdAt`, ...).

pub mod message;
pub mod patient;
pub mod user;

pub use message::{format_timestamp, format_timestamp_in, Message, NewMessage};
pub use patient::Patient;
pub use user::{User, UserRole};
