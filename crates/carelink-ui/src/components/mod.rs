//! Reusable UI components

mod badge;
mod button;
mod input;

pub use badge::*;
pub use button::*;
pub use input::*;
