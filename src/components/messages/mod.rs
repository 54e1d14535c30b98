//! Messaging page components

mod message_bubble;
mod message_composer;
mod message_thread;
mod patient_roster;

pub use message_bubble::MessageBubble;
pub use message_composer::MessageComposer;
pub use message_thread::MessageThread;
pub use patient_roster::PatientRoster;
