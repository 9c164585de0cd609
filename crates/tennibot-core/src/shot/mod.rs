//! Shots and shot scoring.

mod score;

pub use score::{average_score, compute_average, compute_shot_score, format_score};

use serde::{Deserialize, Serialize};

use crate::criteria::{Criterion, Rating};

/// Ratings of one shot, one per criterion
///
/// A field is `None` until the criterion has been rated. Only complete shots
/// are ever recorded in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shot {
    pub placement: Option<Rating>,
    pub speed: Option<Rating>,
    pub pretty: Option<Rating>,
}

impl Shot {
    /// Fully rated shot
    pub fn new(placement: Rating, speed: Rating, pretty: Rating) -> Self {
        Self {
            placement: Some(placement),
            speed: Some(speed),
            pretty: Some(pretty),
        }
    }

    pub fn get(&self, criterion: Criterion) -> Option<Rating> {
        match criterion {
            Criterion::Placement => self.placement,
            Criterion::Speed => self.speed,
            Criterion::Pretty => self.pretty,
        }
    }

    /// Set one criterion, replacing any earlier selection
    pub fn set(&mut self, criterion: Criterion, rating: Rating) {
        let slot = match criterion {
            Criterion::Placement => &mut self.placement,
            Criterion::Speed => &mut self.speed,
            Criterion::Pretty => &mut self.pretty,
        };
        *slot = Some(rating);
    }

    /// Criteria that have not been rated yet
    pub fn missing(&self) -> Vec<Criterion> {
        Criterion::all().filter(|c| self.get(*c).is_none()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.placement.is_some() && self.speed.is_some() && self.pretty.is_some()
    }

    /// Sum of the three ratings, or `None` while any is unset
    pub fn raw_total(&self) -> Option<u8> {
        Some(self.placement?.value() + self.speed?.value() + self.pretty?.value())
    }

    pub fn score(&self) -> f64 {
        compute_shot_score(self)
    }
}
