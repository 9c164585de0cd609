//! Scoring session state machine
//!
//! Holds the player name, the target shot count, the recorded shots and the
//! shot currently being rated. Every operation validates before it mutates,
//! so a rejected operation leaves the session untouched.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use tracing::{debug, info};

use crate::criteria::{Criterion, Rating};
use crate::error::{Error, Result};
use crate::shot::{Shot, average_score, compute_average, format_score};

use super::{ShotCount, ShotCountChange};

/// Session phase derived from recorded shots versus the shot count
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionPhase {
    /// More shots may be submitted
    Collecting,
    /// Quota reached; only a reset starts a new pass
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSession {
    player_name: String,
    shot_count: ShotCount,
    /// Raw text of the shot-count field, applied only on confirm
    shot_count_input: String,
    shots: Vec<Shot>,
    current_shot: Shot,
}

impl ScoringSession {
    pub fn new() -> Self {
        Self::with_shot_count(ShotCount::default())
    }

    pub fn with_shot_count(shot_count: ShotCount) -> Self {
        Self {
            player_name: String::new(),
            shot_count,
            shot_count_input: shot_count.to_string(),
            shots: Vec::new(),
            current_shot: Shot::default(),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The name can only be edited before the first shot is recorded
    pub fn is_name_locked(&self) -> bool {
        !self.shots.is_empty()
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) -> Result<()> {
        if self.is_name_locked() {
            return Err(Error::NameLocked {
                recorded: self.shots.len(),
            });
        }
        self.player_name = name.into();
        debug!("Player name set to {:?}", self.player_name);
        Ok(())
    }

    pub fn shot_count(&self) -> ShotCount {
        self.shot_count
    }

    pub fn shot_count_input(&self) -> &str {
        &self.shot_count_input
    }

    /// Field text that has not been applied as the shot count yet
    pub fn has_pending_shot_count(&self) -> bool {
        self.shot_count_input.parse::<ShotCount>().ok() != Some(self.shot_count)
    }

    /// Replace the shot-count field text without applying it
    pub fn edit_shot_count_input(&mut self, text: impl Into<String>) {
        self.shot_count_input = text.into();
    }

    /// Apply the shot-count field text (see [`Self::request_shot_count_change`])
    pub fn confirm_shot_count(&mut self) -> ShotCountChange {
        let raw = self.shot_count_input.clone();
        self.request_shot_count_change(&raw)
    }

    /// Change the shot count from raw text.
    ///
    /// Accepted input leaves the field text as typed. Rejected input resets
    /// the field text to the current count. Recorded shots are never touched,
    /// so shrinking below them completes the session at once.
    pub fn request_shot_count_change(&mut self, raw: &str) -> ShotCountChange {
        self.shot_count_input = raw.to_string();
        match raw.parse::<ShotCount>() {
            Ok(count) => {
                self.shot_count = count;
                info!("Shot count set to {}", count);
                if self.is_complete() {
                    info!(
                        "Shot count {} already reached with {} shots",
                        count,
                        self.shots.len()
                    );
                }
                ShotCountChange::Applied(count)
            }
            Err(e) => {
                debug!("Shot count change rejected: {}", e);
                self.shot_count_input = self.shot_count.to_string();
                ShotCountChange::Reverted(self.shot_count)
            }
        }
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn current_shot(&self) -> &Shot {
        &self.current_shot
    }

    /// Select a rating for one criterion of the shot being rated
    pub fn set_criterion_score(&mut self, criterion: Criterion, rating: Rating) {
        self.current_shot.set(criterion, rating);
        debug!("{} rated {}", criterion, rating);
    }

    /// Check whether [`Self::submit_shot`] would succeed, without mutating
    pub fn check_submit(&self) -> Result<Shot> {
        if self.player_name.trim().is_empty() {
            return Err(Error::NameRequired);
        }
        if self.is_complete() {
            return Err(Error::QuotaReached {
                shot_count: self.shot_count,
            });
        }
        if !self.current_shot.is_complete() {
            return Err(Error::IncompleteRating {
                missing: self.current_shot.missing(),
            });
        }
        Ok(self.current_shot)
    }

    /// Record the current shot and start rating the next one
    pub fn submit_shot(&mut self) -> Result<Shot> {
        let shot = match self.check_submit() {
            Ok(shot) => shot,
            Err(e) => {
                debug!("Submit rejected: {}", e);
                return Err(e);
            }
        };

        self.shots.push(shot);
        self.current_shot = Shot::default();
        info!(
            "Recorded shot {}/{} for {}: {}",
            self.shots.len(),
            self.shot_count,
            self.player_name,
            format_score(shot.score())
        );
        if self.is_complete() {
            info!(
                "Session complete for {}: average {}",
                self.player_name,
                self.average()
            );
        }
        Ok(shot)
    }

    pub fn is_complete(&self) -> bool {
        self.shots.len() >= self.shot_count.as_len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Complete
        } else {
            SessionPhase::Collecting
        }
    }

    /// Shots still to be submitted before the quota is reached
    pub fn remaining(&self) -> usize {
        self.shot_count.as_len().saturating_sub(self.shots.len())
    }

    /// Scores of recorded shots, in submission order
    pub fn shot_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.shots.iter().map(Shot::score)
    }

    /// Average of recorded shots with two decimals (`"0"` when empty)
    pub fn average(&self) -> String {
        compute_average(&self.shots)
    }

    /// Display form of the average, once at least one shot is recorded
    pub fn formatted_average(&self) -> Option<String> {
        if self.shots.is_empty() {
            None
        } else {
            Some(format_score(average_score(&self.shots)))
        }
    }

    /// Clear shots, name and current rating for the next player.
    ///
    /// The shot count (and its field text) carries over.
    pub fn reset(&mut self) {
        info!(
            "Resetting session for next player ({} shots recorded)",
            self.shots.len()
        );
        self.shots.clear();
        self.player_name.clear();
        self.current_shot = Shot::default();
    }
}

impl Default for ScoringSession {
    fn default() -> Self {
        Self::new()
    }
}
