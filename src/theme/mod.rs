//! Global styling for CareLink.

mod styles;

pub use styles::GLOBAL_STYLES;
