//! CareLink UI Components
//!
//! Small Dioxus building blocks shared by CareLink pages: buttons, text and
//! search inputs, and status badges. Styling lives in the app's global
//! stylesheet; components only attach class names.

pub mod components;

pub use components::*;
