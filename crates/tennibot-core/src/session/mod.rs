//! Scoring session: state machine, shot count and its text input
//!
//! # Components
//! - `state.rs`: ScoringSession and its Collecting/Complete phases
//! - `shot_count.rs`: ShotCount bounds and lenient text parsing

pub mod shot_count;
pub mod state;

pub use shot_count::{ShotCount, ShotCountChange, parse_leading_int};
pub use state::{ScoringSession, SessionPhase};
