//! # Grades and Their Presentation
//!
//! A grade is an ordinal rating from 1 (best) to 5 (worst). The rating is
//! shown to teachers with a shifted label (`1+`, `1`, `2`, `3`, `4`), a
//! qualitative tag and a colour:
//!
//! | grade | label | tag   | colour |
//! |-------|-------|-------|--------|
//! | 1     | 1+    | Exc+  | teal   |
//! | 2     | 1     | Exc   | blue   |
//! | 3     | 2     | Met   | yellow |
//! | 4     | 3     | Below | orange |
//! | 5     | 4     | Low   | red    |
//!
//! Unselected buttons are always neutral, whatever their grade.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An assessment grade. Serialized as the bare integer 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Grade {
    /// 1: excellent plus.
    ExcellentPlus,
    /// 2: excellent.
    Excellent,
    /// 3: expectations met.
    Met,
    /// 4: below expectations.
    Below,
    /// 5: low.
    Low,
}

impl Grade {
    /// All grades in button order.
    pub fn all() -> &'static [Grade] {
        &[
            Self::ExcellentPlus,
            Self::Excellent,
            Self::Met,
            Self::Below,
            Self::Low,
        ]
    }

    /// Build a grade from its numeric value.
    pub fn from_value(value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Self::ExcellentPlus),
            2 => Ok(Self::Excellent),
            3 => Ok(Self::Met),
            4 => Ok(Self::Below),
            5 => Ok(Self::Low),
            other => Err(ValidationError::GradeOutOfRange(other)),
        }
    }

    /// Numeric value sent to the API.
    pub fn value(&self) -> u8 {
        match self {
            Self::ExcellentPlus => 1,
            Self::Excellent => 2,
            Self::Met => 3,
            Self::Below => 4,
            Self::Low => 5,
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExcellentPlus => "1+",
            Self::Excellent => "1",
            Self::Met => "2",
            Self::Below => "3",
            Self::Low => "4",
        }
    }

    /// Qualitative tag shown under the label.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ExcellentPlus => "Exc+",
            Self::Excellent => "Exc",
            Self::Met => "Met",
            Self::Below => "Below",
            Self::Low => "Low",
        }
    }

    /// Colour of a selected button.
    pub fn color(&self) -> GradeColor {
        match self {
            Self::ExcellentPlus => GradeColor::Teal,
            Self::Excellent => GradeColor::Blue,
            Self::Met => GradeColor::Yellow,
            Self::Below => GradeColor::Orange,
            Self::Low => GradeColor::Red,
        }
    }

    /// Full presentation for this grade.
    pub fn style(&self) -> GradeStyle {
        GradeStyle {
            label: Some(self.label()),
            tag: Some(self.tag()),
            color: self.color(),
        }
    }
}

impl TryFrom<i64> for Grade {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    /// Parse the numeric grade (`"3"`), not the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidGrade(s.to_string()))?;
        Self::from_value(value)
    }
}

/// Palette used by the grade buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeColor {
    /// `#0ea5e9`
    Teal,
    /// `#3b82f6`
    Blue,
    /// `#eab308`
    Yellow,
    /// `#f97316`
    Orange,
    /// `#ef4444`
    Red,
    /// `#e5e7eb`, used for values outside the table.
    Neutral,
}

impl GradeColor {
    /// CSS hex value.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Teal => "#0ea5e9",
            Self::Blue => "#3b82f6",
            Self::Yellow => "#eab308",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
            Self::Neutral => "#e5e7eb",
        }
    }

    /// Lower-case colour name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for GradeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Label, tag and colour for a grade value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStyle {
    /// Button label, `None` for unknown values.
    pub label: Option<&'static str>,
    /// Qualitative tag, `None` for unknown values.
    pub tag: Option<&'static str>,
    /// Button colour when selected.
    pub color: GradeColor,
}

/// Presentation for an arbitrary integer.
///
/// Total over `i64`: values 1-5 map through the grade table, anything else
/// yields no label, no tag and [`GradeColor::Neutral`].
pub fn grade_style(value: i64) -> GradeStyle {
    match Grade::from_value(value) {
        Ok(grade) => grade.style(),
        Err(_) => GradeStyle {
            label: None,
            tag: None,
            color: GradeColor::Neutral,
        },
    }
}

/// Background and foreground colours of one grade button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// CSS hex background.
    pub background: &'static str,
    /// CSS hex text colour.
    pub foreground: &'static str,
}

impl ButtonStyle {
    /// Background of an unselected button.
    pub const UNSELECTED_BACKGROUND: &'static str = "#ffffff";
    /// Text colour of an unselected button.
    pub const UNSELECTED_FOREGROUND: &'static str = "#374151";
    /// Text colour of a selected button.
    pub const SELECTED_FOREGROUND: &'static str = "#ffffff";

    /// Style of the button for `grade`.
    pub fn for_grade(grade: Grade, selected: bool) -> Self {
        if selected {
            Self {
                background: grade.color().hex(),
                foreground: Self::SELECTED_FOREGROUND,
            }
        } else {
            Self {
                background: Self::UNSELECTED_BACKGROUND,
                foreground: Self::UNSELECTED_FOREGROUND,
            }
        }
    }
}
