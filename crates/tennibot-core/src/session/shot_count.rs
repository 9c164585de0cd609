use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::shot_count::{DEFAULT, MAX, MIN};
use crate::error::InvalidShotCount;

/// Target number of shots for one player, always within `1..=50`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u32", try_from = "i64")]
pub struct ShotCount(u32);

impl ShotCount {
    pub const MIN: Self = Self(MIN);
    pub const MAX: Self = Self(MAX);

    pub fn new(value: u32) -> Result<Self, InvalidShotCount> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of shots as a length, for comparing against recorded shots
    pub fn as_len(self) -> usize {
        self.0 as usize
    }
}

impl Default for ShotCount {
    fn default() -> Self {
        Self(DEFAULT)
    }
}

impl TryFrom<i64> for ShotCount {
    type Error = InvalidShotCount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN)..=i64::from(MAX)).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(InvalidShotCount::OutOfRange {
                value,
                min: MIN,
                max: MAX,
            })
        }
    }
}

impl From<ShotCount> for u32 {
    fn from(count: ShotCount) -> Self {
        count.0
    }
}

/// Lenient parse: leading integer of the input, then range check
///
/// `"7"`, `" 7"`, `"7 shots"` and `"7.9"` all read as 7.
impl FromStr for ShotCount {
    type Err = InvalidShotCount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            parse_leading_int(s).ok_or_else(|| InvalidShotCount::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for ShotCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a confirmed shot-count edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotCountChange {
    /// The new count was accepted
    Applied(ShotCount),
    /// Input was rejected; the field shows the unchanged count again
    Reverted(ShotCount),
}

impl ShotCountChange {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Shot count in effect after the edit
    pub fn shot_count(&self) -> ShotCount {
        match self {
            Self::Applied(count) | Self::Reverted(count) => *count,
        }
    }
}

/// Read the integer at the start of `input`.
///
/// Skips leading whitespace, accepts one `+`/`-` sign and a `0x`/`0X` prefix
/// for hexadecimal, then consumes digits until the first non-digit. Returns
/// `None` when no digit follows. Values beyond `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_leading_int("7"), Some(7));
        assert_eq!(parse_leading_int("50"), Some(50));
        assert_eq!(parse_leading_int("0"), Some(0));
    }

    #[test]
    fn test_parse_prefix_and_sign() {
        assert_eq!(parse_leading_int("  12"), Some(12));
        assert_eq!(parse_leading_int("\t+3"), Some(3));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("0x1A"), Some(26));
        assert_eq!(parse_leading_int("0X10"), Some(16));
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("7abc"), Some(7));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("12 shots"), Some(12));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int(".5"), None);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_shot_count_from_str() {
        assert_eq!("7".parse::<ShotCount>().unwrap().get(), 7);
        assert_eq!(" 1".parse::<ShotCount>().unwrap(), ShotCount::MIN);
        assert_eq!("50".parse::<ShotCount>().unwrap(), ShotCount::MAX);
    }

    #[test]
    fn test_shot_count_rejects_out_of_range() {
        assert!(matches!(
            "51".parse::<ShotCount>(),
            Err(InvalidShotCount::OutOfRange { value: 51, .. })
        ));
        assert!(matches!(
            "0".parse::<ShotCount>(),
            Err(InvalidShotCount::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            "abc".parse::<ShotCount>(),
            Err(InvalidShotCount::NotANumber(_))
        ));
    }

    #[test]
    fn test_default_shot_count() {
        assert_eq!(ShotCount::default().get(), 5);
        assert_eq!(ShotCount::default().to_string(), "5");
    }

    #[test]
    fn test_shot_count_serde() {
        let count = ShotCount::new(12).unwrap();
        assert_eq!(serde_json::to_string(&count).unwrap(), "12");
        assert!(serde_json::from_str::<ShotCount>("80").is_err());
    }
}
