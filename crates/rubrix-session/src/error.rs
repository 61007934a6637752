//! Session error types.

use rubrix_client::ApiError;
use rubrix_core::{Group, ValidationError};
use thiserror::Error;

/// Errors from session operations.
///
/// Everything except [`SessionError::Api`] is raised before any request is
/// sent.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Raw input did not name a known group, criterion or grade.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An assessment was attempted with no group selected.
    #[error("no group selected")]
    NoGroupSelected,

    /// The student is not on the loaded roster.
    #[error("student {student_id} is not on the Group {group} roster")]
    NotInRoster { student_id: String, group: Group },

    /// The remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionError {
    /// Whether the error was raised before any request was sent.
    pub fn is_rejected_locally(&self) -> bool {
        !matches!(self, Self::Api(_))
    }
}
