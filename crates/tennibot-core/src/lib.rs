pub mod config;
pub mod criteria;
pub mod error;
pub mod export;
pub mod session;
pub mod shot;

pub use criteria::{Criterion, CriterionOption, Rating};
pub use error::{Error, InvalidRating, InvalidShotCount, Result};
pub use export::{SessionSummary, format_session_console};
pub use session::{ScoringSession, SessionPhase, ShotCount, ShotCountChange};
pub use shot::{Shot, compute_average, compute_shot_score, format_score};
