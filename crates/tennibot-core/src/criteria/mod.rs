//! Rating criteria and their options.
//!
//! Every shot is rated on three fixed criteria, each offering three options
//! valued 0, 1 or 2.

mod options;

pub use options::CriterionOption;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::InvalidRating;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Criterion {
    Placement,
    Speed,
    Pretty,
}

impl Criterion {
    /// All criteria in display order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Display title ("Placement", "Speed", "Pretty")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Placement => "Placement",
            Self::Speed => "Speed",
            Self::Pretty => "Pretty",
        }
    }

    /// Options offered for this criterion, highest value first
    pub fn options(&self) -> &'static [CriterionOption; 3] {
        options::options_for(*self)
    }
}

/// One option value on a criterion
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Rating {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Rating {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(InvalidRating(value))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
