//! Page components for CareLink.

mod messages;

pub use messages::Messages;
