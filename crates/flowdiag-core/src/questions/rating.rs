use serde::{Deserialize, Serialize};

use crate::error::DiagnosticError;

/// A single Likert-scale answer in `[1, 5]`.
///
/// The only way to build one is through [`Rating::new`] (or serde, which
/// goes through the same check), so an answer set never holds an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every rating, lowest first.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: i64) -> Result<Self, DiagnosticError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(DiagnosticError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Strongly Disagree",
            2 => "Disagree",
            3 => "Neutral",
            4 => "Agree",
            _ => "Strongly Agree",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = DiagnosticError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl From<Rating> for u32 {
    fn from(rating: Rating) -> Self {
        rating.0 as u32
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
