//! # Session State
//!
//! The owned view state of one assessment session and its synchronous
//! transitions. Network calls happen between transitions, outside this
//! module:
//!
//! ```text
//! begin_load(g) ──► fetch roster ──► finish_load(ticket, roster)
//! prepare_assessment(..) ──► POST ──► record_grade(key, grade)
//! ```
//!
//! Grade memory is session-global: switching or clearing the group keeps
//! it.

use std::collections::BTreeMap;

use rubrix_core::{
    AssessmentKey, ButtonStyle, Criterion, Grade, Group, NewAssessment, Student, StudentId,
};

use crate::error::SessionError;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// No group selected; the picker is shown.
    GroupSelection,
    /// A group's roster is shown.
    Roster { group: Group },
}

/// Token for one in-flight roster load.
///
/// Only the ticket with the latest sequence number can change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    group: Group,
}

impl LoadTicket {
    /// Sequence number issued by [`Session::begin_load`].
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Group this load was started for.
    pub fn group(&self) -> Group {
        self.group
    }
}

/// Result of applying a roster response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The roster replaced the current one and `group` became current.
    Loaded { group: Group, count: usize },
    /// The load failed; prior group and roster are untouched.
    Failed { group: Group },
    /// A newer load or a clear superseded this one; nothing changed.
    Stale { group: Group },
}

/// View state for one assessment session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_group: Option<Group>,
    students: Vec<Student>,
    loading: bool,
    grades: BTreeMap<AssessmentKey, Grade>,
    latest_load: u64,
}

impl Session {
    /// Empty session on the group picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen implied by the current group.
    pub fn view(&self) -> View {
        match self.current_group {
            Some(group) => View::Roster { group },
            None => View::GroupSelection,
        }
    }

    /// Group whose roster is loaded, if any.
    pub fn current_group(&self) -> Option<Group> {
        self.current_group
    }

    /// Roster of the current group, in API order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Whether the latest roster load is still in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Start loading `group`.
    ///
    /// Sets the loading flag and invalidates every earlier ticket.
    pub fn begin_load(&mut self, group: Group) -> LoadTicket {
        self.latest_load += 1;
        self.loading = true;
        LoadTicket {
            seq: self.latest_load,
            group,
        }
    }

    /// Apply the response for `ticket`. `None` means the load failed.
    ///
    /// A stale ticket leaves the session untouched, loading flag included:
    /// the flag belongs to the latest load.
    pub fn finish_load(&mut self, ticket: LoadTicket, roster: Option<Vec<Student>>) -> LoadOutcome {
        let group = ticket.group;
        if ticket.seq != self.latest_load {
            return LoadOutcome::Stale { group };
        }

        self.loading = false;
        match roster {
            Some(students) => {
                let count = students.len();
                self.students = students;
                self.current_group = Some(group);
                LoadOutcome::Loaded { group, count }
            }
            None => LoadOutcome::Failed { group },
        }
    }

    /// Return to the group picker.
    ///
    /// Empties the roster and clears the loading flag. In-flight loads are
    /// invalidated so a late response cannot reopen a group. Grade memory
    /// is kept.
    pub fn clear_group(&mut self) {
        self.latest_load += 1;
        self.current_group = None;
        self.students.clear();
        self.loading = false;
    }

    /// Find a roster entry by the identifier as a user would type it.
    pub fn find_student(&self, raw: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id.matches(raw))
    }

    /// Validate an assessment and build its request body.
    ///
    /// Requires a selected group and a student on its roster. The body is
    /// annotated with the current group's note.
    pub fn prepare_assessment(
        &self,
        student_id: &StudentId,
        criterion: Criterion,
        grade: Grade,
    ) -> Result<NewAssessment, SessionError> {
        let group = self.current_group.ok_or(SessionError::NoGroupSelected)?;
        if !self.students.iter().any(|s| &s.id == student_id) {
            return Err(SessionError::NotInRoster {
                student_id: student_id.to_string(),
                group,
            });
        }
        Ok(NewAssessment::for_group(
            student_id.clone(),
            criterion,
            grade,
            group,
        ))
    }

    /// Remember a confirmed grade. Last write wins; returns the replaced
    /// grade, if any.
    pub fn record_grade(&mut self, key: AssessmentKey, grade: Grade) -> Option<Grade> {
        self.grades.insert(key, grade)
    }

    /// Last confirmed grade for a student and criterion.
    pub fn grade_for(&self, student_id: &StudentId, criterion: Criterion) -> Option<Grade> {
        self.grades
            .get(&AssessmentKey::new(student_id.clone(), criterion))
            .copied()
    }

    /// Whether `grade` is the remembered grade for this student and criterion.
    pub fn is_selected(&self, student_id: &StudentId, criterion: Criterion, grade: Grade) -> bool {
        self.grade_for(student_id, criterion) == Some(grade)
    }

    /// Style of one grade button.
    pub fn button_style(
        &self,
        student_id: &StudentId,
        criterion: Criterion,
        grade: Grade,
    ) -> ButtonStyle {
        ButtonStyle::for_grade(grade, self.is_selected(student_id, criterion, grade))
    }

    /// All remembered grades, ordered by key.
    pub fn grades(&self) -> &BTreeMap<AssessmentKey, Grade> {
        &self.grades
    }
}
