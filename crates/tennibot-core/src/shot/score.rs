use crate::config::scoring::{DECIMALS, POINTS_PER_RATING, ROUND_THRESHOLD};

use super::Shot;

/// Score a shot: raw total × 16.67, or 0 for an incompletely rated shot
pub fn compute_shot_score(shot: &Shot) -> f64 {
    match shot.raw_total() {
        Some(total) => f64::from(total) * POINTS_PER_RATING,
        None => 0.0,
    }
}

/// Mean shot score with two decimals, `"0"` when no shots are recorded
pub fn compute_average(shots: &[Shot]) -> String {
    if shots.is_empty() {
        return "0".to_string();
    }
    let total = shots
        .iter()
        .fold(0.0, |sum, shot| sum + compute_shot_score(shot));
    to_fixed(total / shots.len() as f64, DECIMALS)
}

/// [`compute_average`] as a number
pub fn average_score(shots: &[Shot]) -> f64 {
    compute_average(shots).parse().unwrap_or(0.0)
}

/// Display a score: whole number from 100 upward, two decimals below
pub fn format_score(score: f64) -> String {
    if score >= ROUND_THRESHOLD {
        format!("{}", score.round() as i64)
    } else {
        to_fixed(score, DECIMALS)
    }
}

/// Fixed-point rendering with exactly `digits` decimals
fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Rating;

    fn shot(p: u8, s: u8, y: u8) -> Shot {
        let rating = |v| Rating::from_u8(v).unwrap();
        Shot::new(rating(p), rating(s), rating(y))
    }

    #[test]
    fn test_score_scales_raw_total() {
        assert!((compute_shot_score(&shot(2, 2, 2)) - 100.02).abs() < 1e-9);
        assert!((compute_shot_score(&shot(1, 1, 1)) - 50.01).abs() < 1e-9);
        assert_eq!(compute_shot_score(&shot(0, 0, 0)), 0.0);
    }

    #[test]
    fn test_score_matches_factor_exactly() {
        for (p, s, y) in [(2, 1, 0), (1, 2, 2), (0, 0, 1)] {
            let expected = f64::from(p + s + y) * 16.67;
            assert_eq!(compute_shot_score(&shot(p, s, y)), expected);
        }
    }

    #[test]
    fn test_incomplete_shot_scores_zero() {
        let mut partial = Shot::default();
        partial.placement = Some(Rating::Two);
        partial.speed = Some(Rating::Two);
        assert_eq!(compute_shot_score(&partial), 0.0);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(compute_average(&[]), "0");
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_average_two_decimals() {
        assert_eq!(compute_average(&[shot(2, 2, 2), shot(0, 0, 0)]), "50.01");
        assert_eq!(compute_average(&[shot(1, 0, 0)]), "16.67");
        assert_eq!(compute_average(&[shot(2, 2, 2)]), "100.02");
    }

    #[test]
    fn test_average_rounds() {
        // (100.02 + 16.67 + 16.67) / 3 = 44.4533...
        let shots = [shot(2, 2, 2), shot(1, 0, 0), shot(0, 1, 0)];
        assert_eq!(compute_average(&shots), "44.45");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(100.02), "100");
        assert_eq!(format_score(50.01), "50.01");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(83.35), "83.35");
    }

    #[test]
    fn test_format_score_threshold() {
        assert_eq!(format_score(100.0), "100");
        assert_eq!(format_score(100.6), "101");
        assert_eq!(format_score(99.999), "100.00");
    }
}
