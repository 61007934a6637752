//! # Assessments
//!
//! An assessment is one grade for one criterion for one student. The client
//! builds [`NewAssessment`] request bodies and remembers the last confirmed
//! grade per [`AssessmentKey`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Criterion, Group};
use crate::grade::Grade;
use crate::student::StudentId;

/// Identity of a remembered grade: one student, one criterion.
///
/// Displays as `"{student_id}-{criterion}"`, e.g. `12-shooting`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssessmentKey {
    /// Student the grade belongs to.
    pub student_id: StudentId,
    /// Criterion the grade applies to.
    pub criterion: Criterion,
}

impl AssessmentKey {
    /// Build a key.
    pub fn new(student_id: StudentId, criterion: Criterion) -> Self {
        Self {
            student_id,
            criterion,
        }
    }
}

impl std::fmt::Display for AssessmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.student_id, self.criterion)
    }
}

/// Body of `POST /api/assessments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssessment {
    /// Student being assessed.
    pub student_id: StudentId,
    /// Skill being assessed.
    pub criterion: Criterion,
    /// Grade awarded.
    pub grade: Grade,
    /// Free-text note.
    #[serde(default)]
    pub notes: Option<String>,
    /// Client-side timestamp. Omitted from the body when absent so the
    /// server stamps the record itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

impl NewAssessment {
    /// Assessment annotated with the standard note for `group`.
    pub fn for_group(
        student_id: StudentId,
        criterion: Criterion,
        grade: Grade,
        group: Group,
    ) -> Self {
        Self {
            student_id,
            criterion,
            grade,
            notes: Some(group_note(group)),
            timestamp: None,
        }
    }

    /// Key under which a confirmed submission is remembered.
    pub fn key(&self) -> AssessmentKey {
        AssessmentKey::new(self.student_id.clone(), self.criterion)
    }
}

/// Note attached to every assessment made while `group` is selected.
pub fn group_note(group: Group) -> String {
    format!("Group {group} assessment")
}
