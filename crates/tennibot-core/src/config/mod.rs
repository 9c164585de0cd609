//! Scoring configuration.
//!
//! Fixed values shared by the session state machine and its views:
//! - Shot-count bounds and default
//! - Score scaling and display thresholds

/// Target shot-count bounds.
pub mod shot_count {
    /// Smallest accepted number of shots per player.
    pub const MIN: u32 = 1;

    /// Largest accepted number of shots per player.
    pub const MAX: u32 = 50;

    /// Shot count of a fresh session.
    pub const DEFAULT: u32 = 5;
}

/// Shot score scaling.
///
/// A perfect shot rates 2 on each criterion (raw total 6). Each raw point is
/// worth 16.67, so a perfect shot scores 100.02 rather than exactly 100.
pub mod scoring {
    /// Score contributed by each raw rating point.
    pub const POINTS_PER_RATING: f64 = 16.67;

    /// Highest possible raw total (three criteria rated 2).
    pub const MAX_RAW_TOTAL: u8 = 6;

    /// Scores at or above this value are displayed as whole numbers.
    pub const ROUND_THRESHOLD: f64 = 100.0;

    /// Decimal places for scores below [`ROUND_THRESHOLD`] and for averages.
    pub const DECIMALS: usize = 2;
}
