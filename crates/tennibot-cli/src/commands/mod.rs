//! CLI command implementations.

pub mod criteria;
pub mod score;
