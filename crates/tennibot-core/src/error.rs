use thiserror::Error;

use crate::criteria::Criterion;
use crate::session::ShotCount;

/// Rejections raised by [`ScoringSession`](crate::ScoringSession) operations.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Please enter a player name before submitting shots")]
    NameRequired,

    #[error("Maximum {shot_count} shots allowed!")]
    QuotaReached { shot_count: ShotCount },

    #[error("Please score all categories before submitting")]
    IncompleteRating { missing: Vec<Criterion> },

    #[error("Player name cannot be changed after {recorded} shot(s) are recorded")]
    NameLocked { recorded: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error for a rating value outside `0..=2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid rating value: {0} (expected 0, 1 or 2)")]
pub struct InvalidRating(pub u8);

/// Error for shot-count input that is not an integer in the accepted range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidShotCount {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Shot count {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}
