//! JSON summary of a scoring session

use serde::Serialize;

use crate::criteria::Rating;
use crate::session::{ScoringSession, SessionPhase};
use crate::shot::format_score;

/// Snapshot of a session for machine-readable output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub player_name: String,
    pub shot_count: u32,
    pub recorded: usize,
    pub phase: SessionPhase,
    pub complete: bool,
    pub shots: Vec<ShotSummary>,
    /// Formatted average, absent until a shot is recorded
    pub average: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotSummary {
    pub index: usize,
    pub placement: Option<Rating>,
    pub speed: Option<Rating>,
    pub pretty: Option<Rating>,
    pub score: f64,
    pub formatted: String,
}

impl SessionSummary {
    pub fn from_session(session: &ScoringSession) -> Self {
        let shots = session
            .shots()
            .iter()
            .enumerate()
            .map(|(i, shot)| {
                let score = shot.score();
                ShotSummary {
                    index: i + 1,
                    placement: shot.placement,
                    speed: shot.speed,
                    pretty: shot.pretty,
                    score,
                    formatted: format_score(score),
                }
            })
            .collect();

        Self {
            player_name: session.player_name().to_string(),
            shot_count: session.shot_count().get(),
            recorded: session.shots().len(),
            phase: session.phase(),
            complete: session.is_complete(),
            shots,
            average: session.formatted_average(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;
    use crate::session::ShotCount;

    #[test]
    fn test_empty_summary() {
        let summary = SessionSummary::from_session(&ScoringSession::new());
        assert_eq!(summary.recorded, 0);
        assert_eq!(summary.shot_count, 5);
        assert_eq!(summary.phase, SessionPhase::Collecting);
        assert!(summary.average.is_none());
    }

    #[test]
    fn test_summary_json_fields() {
        let mut session = ScoringSession::with_shot_count(ShotCount::MIN);
        session.set_player_name("Alice").unwrap();
        for criterion in Criterion::all() {
            session.set_criterion_score(criterion, Rating::Two);
        }
        session.submit_shot().unwrap();

        let json = SessionSummary::from_session(&session).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["player_name"], "Alice");
        assert_eq!(value["phase"], "complete");
        assert_eq!(value["complete"], true);
        assert_eq!(value["average"], "100");
        assert_eq!(value["shots"][0]["index"], 1);
        assert_eq!(value["shots"][0]["placement"], 2);
        assert_eq!(value["shots"][0]["formatted"], "100");
    }
}
