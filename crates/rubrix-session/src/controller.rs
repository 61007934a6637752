//! # Session Controller
//!
//! Drives a [`Session`] against an [`AssessmentApi`] and reports to a
//! [`Notifier`]. Each operation runs as transition, remote call,
//! transition; the session lock is released before every `.await`, so a
//! new group may be selected while an earlier load is still in flight.
//!
//! Failures are logged and surfaced as a [`Notice`]. Nothing is retried:
//! the user repeats the action.

use parking_lot::Mutex;
use rubrix_core::{AssessmentKey, Criterion, Grade, Group, StudentId};

use crate::api::AssessmentApi;
use crate::error::SessionError;
use crate::notify::{Notice, Notifier};
use crate::state::{LoadOutcome, Session};

/// Async front door to an assessment session.
pub struct SessionController<A, N> {
    api: A,
    notifier: N,
    session: Mutex<Session>,
}

impl<A: AssessmentApi, N: Notifier> SessionController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            session: Mutex::new(Session::new()),
        }
    }

    /// Copy of the current session state, for rendering.
    pub fn snapshot(&self) -> Session {
        self.session.lock().clone()
    }

    /// Run `f` against the session without copying it.
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.lock())
    }

    /// Select a group given as raw text. Unknown groups are rejected before
    /// any request is sent.
    pub async fn select_group_str(&self, raw: &str) -> Result<LoadOutcome, SessionError> {
        let group: Group = raw.parse()?;
        self.select_group(group).await
    }

    /// Load `group`'s roster and make it current.
    ///
    /// On failure the user is notified and the error returned; the prior
    /// group and roster stay. A response superseded by a later selection
    /// yields [`LoadOutcome::Stale`] and changes nothing.
    pub async fn select_group(&self, group: Group) -> Result<LoadOutcome, SessionError> {
        let ticket = self.session.lock().begin_load(group);
        tracing::debug!(%group, seq = ticket.seq(), "loading roster");

        match self.api.fetch_roster(group).await {
            Ok(students) => {
                let outcome = self.session.lock().finish_load(ticket, Some(students));
                if let LoadOutcome::Stale { .. } = outcome {
                    tracing::debug!(%group, seq = ticket.seq(), "discarding stale roster");
                }
                Ok(outcome)
            }
            Err(e) => {
                let outcome = self.session.lock().finish_load(ticket, None);
                match outcome {
                    LoadOutcome::Stale { .. } => {
                        tracing::debug!(%group, seq = ticket.seq(), "discarding stale roster failure: {e}");
                        Ok(outcome)
                    }
                    _ => {
                        tracing::error!(%group, "error loading students: {e}");
                        self.notifier.notify(Notice::RosterLoadFailed);
                        Err(SessionError::Api(e))
                    }
                }
            }
        }
    }

    /// Return to the group picker. Grade memory is kept.
    pub fn clear_group(&self) {
        self.session.lock().clear_group();
    }

    /// Submit an assessment given as raw text, as typed at a prompt.
    ///
    /// `student` is matched against the loaded roster by its displayed
    /// identifier; `grade` is the numeric value 1-5.
    pub async fn submit_str(
        &self,
        student: &str,
        criterion: &str,
        grade: &str,
    ) -> Result<AssessmentKey, SessionError> {
        let criterion: Criterion = criterion.parse()?;
        let grade: Grade = grade.parse()?;
        let student_id = {
            let session = self.session.lock();
            match session.find_student(student) {
                Some(s) => s.id.clone(),
                None => {
                    let group = session.current_group().ok_or(SessionError::NoGroupSelected)?;
                    return Err(SessionError::NotInRoster {
                        student_id: student.trim().to_string(),
                        group,
                    });
                }
            }
        };
        self.submit_assessment(&student_id, criterion, grade).await
    }

    /// Send an assessment and remember the grade once acknowledged.
    ///
    /// Validation failures return before any request. A failed request
    /// notifies the user and leaves grade memory unchanged.
    pub async fn submit_assessment(
        &self,
        student_id: &StudentId,
        criterion: Criterion,
        grade: Grade,
    ) -> Result<AssessmentKey, SessionError> {
        let assessment = self
            .session
            .lock()
            .prepare_assessment(student_id, criterion, grade)?;
        let key = assessment.key();

        match self.api.create_assessment(&assessment).await {
            Ok(()) => {
                self.session.lock().record_grade(key.clone(), grade);
                self.notifier.notify(Notice::AssessmentSaved);
                Ok(key)
            }
            Err(e) => {
                tracing::error!(%key, "error saving assessment: {e}");
                self.notifier.notify(Notice::AssessmentFailed);
                Err(SessionError::Api(e))
            }
        }
    }
}
