use serde::Serialize;

use super::{Criterion, Rating};

/// A selectable option: rating value plus the description shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionOption {
    pub value: Rating,
    pub label: &'static str,
}

impl CriterionOption {
    const fn new(value: Rating, label: &'static str) -> Self {
        Self { value, label }
    }
}

static PLACEMENT: [CriterionOption; 3] = [
    CriterionOption::new(
        Rating::Two,
        "Smart placement – deep, sideline, kitchen edge, or out of reach",
    ),
    CriterionOption::new(
        Rating::One,
        "In-bounds but neutral – mid-court or easily returnable",
    ),
    CriterionOption::new(Rating::Zero, "Out or badly misplaced"),
];

static SPEED: [CriterionOption; 3] = [
    CriterionOption::new(
        Rating::Two,
        "Ideal pace – matched the moment with good speed or softness",
    ),
    CriterionOption::new(
        Rating::One,
        "Slightly over/underhit – didn't match tactical need",
    ),
    CriterionOption::new(
        Rating::Zero,
        "Wrong power – too hard/soft, unforced error, or mishit",
    ),
];

static PRETTY: [CriterionOption; 3] = [
    CriterionOption::new(
        Rating::Two,
        "Clean and intentional – good form, controlled shot type",
    ),
    CriterionOption::new(
        Rating::One,
        "Functional but flawed – minor mishit or lack of control",
    ),
    CriterionOption::new(
        Rating::Zero,
        "Mishit or failed attempt – not what was intended",
    ),
];

pub(super) fn options_for(criterion: Criterion) -> &'static [CriterionOption; 3] {
    match criterion {
        Criterion::Placement => &PLACEMENT,
        Criterion::Speed => &SPEED,
        Criterion::Pretty => &PRETTY,
    }
}
