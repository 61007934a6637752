//! The seam between the session and the remote API.

use std::future::Future;
use std::sync::Arc;

use rubrix_client::{ApiError, RubrixClient};
use rubrix_core::{Group, NewAssessment, Student};

/// Remote operations the session depends on.
pub trait AssessmentApi: Send + Sync {
    /// Roster for `group`.
    fn fetch_roster(
        &self,
        group: Group,
    ) -> impl Future<Output = Result<Vec<Student>, ApiError>> + Send;

    /// Record `assessment`. `Ok` means the API acknowledged it.
    fn create_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl AssessmentApi for RubrixClient {
    fn fetch_roster(
        &self,
        group: Group,
    ) -> impl Future<Output = Result<Vec<Student>, ApiError>> + Send {
        self.students().by_group(group)
    }

    fn create_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move { self.assessments().create(assessment).await.map(|_| ()) }
    }
}

impl<A: AssessmentApi> AssessmentApi for Arc<A> {
    fn fetch_roster(
        &self,
        group: Group,
    ) -> impl Future<Output = Result<Vec<Student>, ApiError>> + Send {
        (**self).fetch_roster(group)
    }

    fn create_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).create_assessment(assessment)
    }
}
