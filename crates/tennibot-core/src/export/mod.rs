//! Views of a scoring session: colored console screen and JSON summary.

pub mod console;
mod json;

pub use console::format_session_console;
pub use json::{SessionSummary, ShotSummary};
