//! # Groups and Criteria
//!
//! The two fixed axes of an assessment session. A [`Group`] selects which
//! roster is loaded; a [`Criterion`] selects which skill a grade applies to.
//! Both sets are closed, so both are enums with exhaustive `match`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the four fixed student cohorts.
///
/// A group is purely a routing key for roster lookup. It has no lifecycle
/// of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    /// Group A.
    #[serde(alias = "a")]
    A,
    /// Group B.
    #[serde(alias = "b")]
    B,
    /// Group C.
    #[serde(alias = "c")]
    C,
    /// Group D.
    #[serde(alias = "d")]
    D,
}

impl Group {
    /// Nominal group size shown on the group picker.
    pub const NOMINAL_SIZE: usize = 7;

    /// All groups in picker order.
    pub fn all() -> &'static [Group] {
        &[Self::A, Self::B, Self::C, Self::D]
    }

    /// The single-letter identifier used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = ValidationError;

    /// Parse a group letter. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ValidationError::UnknownGroup(s.to_string())),
        }
    }
}

/// One of the four basketball skills assessed independently per student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Ball handling while moving.
    Dribbling,
    /// Moving the ball to a teammate.
    Passing,
    /// Scoring attempts.
    Shooting,
    /// Guarding an opponent.
    Defense,
}

impl Criterion {
    /// All criteria in the order they are shown under each student.
    pub fn all() -> &'static [Criterion] {
        &[Self::Dribbling, Self::Passing, Self::Shooting, Self::Defense]
    }

    /// Wire name, lower-case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dribbling => "dribbling",
            Self::Passing => "passing",
            Self::Shooting => "shooting",
            Self::Defense => "defense",
        }
    }

    /// Capitalised heading shown above the grade buttons.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dribbling => "Dribbling",
            Self::Passing => "Passing",
            Self::Shooting => "Shooting",
            Self::Defense => "Defense",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dribbling" => Ok(Self::Dribbling),
            "passing" => Ok(Self::Passing),
            "shooting" => Ok(Self::Shooting),
            "defense" => Ok(Self::Defense),
            _ => Err(ValidationError::UnknownCriterion(s.to_string())),
        }
    }
}
