//! UI Components for CareLink.

pub mod messages;
