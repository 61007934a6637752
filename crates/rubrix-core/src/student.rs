//! # Students
//!
//! Students are owned by the external API and sourced per group. The client
//! never creates or edits them.
//!
//! [`StudentId`] keeps the JSON shape the API used (number or string) so an
//! assessment can echo `student_id` back byte-for-byte. Rosters served with
//! zero-padded string identifiers (`"012"`) and rosters served with numeric
//! identifiers (`12`) both work without a lossy conversion.

use serde::{Deserialize, Serialize};

use crate::domain::Group;
use crate::error::ValidationError;

/// Student identifier as issued by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    /// Numeric identifier.
    Number(u64),
    /// String identifier.
    Text(String),
}

impl StudentId {
    /// Build a string identifier, rejecting empty input.
    pub fn text(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyStudentId);
        }
        Ok(Self::Text(id))
    }

    /// Whether this identifier renders as `raw`.
    ///
    /// Used to resolve identifiers typed by a user against a loaded roster.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Number(n) => raw.trim().parse::<u64>().map(|r| r == *n).unwrap_or(false),
            Self::Text(s) => s == raw.trim(),
        }
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A student on a group roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// API identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Group membership, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

impl Student {
    /// Build a student without group membership.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
        }
    }
}
