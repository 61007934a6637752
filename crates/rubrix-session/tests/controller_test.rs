//! SessionController behaviour against an in-process API.
//!
//! The fake records every call so tests can assert that rejected input
//! never reaches the network, and can delay rosters per group to replay
//! out-of-order responses.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rubrix_client::ApiError;
use rubrix_core::{Criterion, Grade, Group, NewAssessment, Student, StudentId, ValidationError};
use rubrix_session::{
    AssessmentApi, LoadOutcome, Notice, Notifier, SessionController, SessionError, View,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Roster(Group),
    Create(serde_json::Value),
}

#[derive(Default)]
struct FakeApi {
    rosters: HashMap<Group, Vec<Student>>,
    delays: HashMap<Group, Duration>,
    failing_groups: HashSet<Group>,
    fail_rosters: AtomicBool,
    fail_creates: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    fn with_roster(mut self, group: Group, students: Vec<Student>) -> Self {
        self.rosters.insert(group, students);
        self
    }

    fn with_delay(mut self, group: Group, delay: Duration) -> Self {
        self.delays.insert(group, delay);
        self
    }

    fn with_failing_roster(mut self, group: Group) -> Self {
        self.failing_groups.insert(group);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

fn server_error(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.into(),
        status: 500,
        body: "Internal Server Error".into(),
    }
}

impl AssessmentApi for FakeApi {
    async fn fetch_roster(&self, group: Group) -> Result<Vec<Student>, ApiError> {
        self.calls.lock().push(Call::Roster(group));
        if let Some(delay) = self.delays.get(&group) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_rosters.load(Ordering::SeqCst) || self.failing_groups.contains(&group) {
            return Err(server_error("GET /students/group"));
        }
        Ok(self.rosters.get(&group).cloned().unwrap_or_default())
    }

    async fn create_assessment(&self, assessment: &NewAssessment) -> Result<(), ApiError> {
        self.calls
            .lock()
            .push(Call::Create(serde_json::to_value(assessment).unwrap()));
        if self.fail_creates {
            return Err(server_error("POST /assessments"));
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

fn group_b() -> Vec<Student> {
    vec![
        Student::new(12u64, "David Miller"),
        Student::new(13u64, "Layla Abdul"),
    ]
}

fn group_a() -> Vec<Student> {
    vec![Student::new(1u64, "Ahmed Al-Rashid")]
}

type Controller = SessionController<Arc<FakeApi>, Arc<RecordingNotifier>>;

fn controller(api: FakeApi) -> (Controller, Arc<FakeApi>, Arc<RecordingNotifier>) {
    let api = Arc::new(api);
    let notifier = Arc::new(RecordingNotifier::default());
    (
        SessionController::new(api.clone(), notifier.clone()),
        api,
        notifier,
    )
}

#[tokio::test]
async fn select_group_loads_exact_roster() {
    let (ctl, api, notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));

    let outcome = ctl.select_group(Group::B).await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded { group: Group::B, count: 2 });

    let session = ctl.snapshot();
    assert_eq!(session.view(), View::Roster { group: Group::B });
    assert_eq!(session.students(), group_b().as_slice());
    assert!(!session.loading());
    assert_eq!(api.calls(), vec![Call::Roster(Group::B)]);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn invalid_group_is_rejected_before_network() {
    let (ctl, api, notifier) = controller(FakeApi::default());

    let err = ctl.select_group_str("E").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::UnknownGroup(_))
    ));
    assert!(api.calls().is_empty());
    assert!(notifier.notices().is_empty());
    assert!(!ctl.snapshot().loading());
}

#[tokio::test]
async fn failed_first_load_notifies_and_stays_on_picker() {
    let api = FakeApi::default();
    api.fail_rosters.store(true, Ordering::SeqCst);
    let (ctl, _api, notifier) = controller(api);

    let err = ctl.select_group(Group::C).await.unwrap_err();
    assert!(matches!(err, SessionError::Api(_)));
    assert_eq!(notifier.notices(), vec![Notice::RosterLoadFailed]);
    let session = ctl.snapshot();
    assert_eq!(session.view(), View::GroupSelection);
    assert!(!session.loading());
}

#[tokio::test]
async fn failed_load_keeps_prior_group_and_roster() {
    let (ctl, api, notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));
    ctl.select_group(Group::B).await.unwrap();

    api.fail_rosters.store(true, Ordering::SeqCst);
    let err = ctl.select_group(Group::C).await.unwrap_err();
    assert!(!err.is_rejected_locally());
    assert_eq!(notifier.notices(), vec![Notice::RosterLoadFailed]);

    let session = ctl.snapshot();
    assert_eq!(session.view(), View::Roster { group: Group::B });
    assert_eq!(session.students(), group_b().as_slice());
    assert!(!session.loading());
}

#[tokio::test]
async fn submit_posts_annotated_body_and_records_grade() {
    let (ctl, api, notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));
    ctl.select_group(Group::B).await.unwrap();

    let key = ctl
        .submit_assessment(&StudentId::Number(12), Criterion::Shooting, Grade::Met)
        .await
        .unwrap();
    assert_eq!(key.to_string(), "12-shooting");

    assert_eq!(
        api.calls()[1],
        Call::Create(serde_json::json!({
            "student_id": 12,
            "criterion": "shooting",
            "grade": 3,
            "notes": "Group B assessment"
        }))
    );
    assert_eq!(notifier.notices(), vec![Notice::AssessmentSaved]);
    assert_eq!(
        ctl.snapshot().grade_for(&StudentId::Number(12), Criterion::Shooting),
        Some(Grade::Met)
    );
}

#[tokio::test]
async fn failed_submit_leaves_grade_memory_unchanged() {
    let api = FakeApi {
        fail_creates: true,
        ..FakeApi::default().with_roster(Group::B, group_b())
    };
    let (ctl, _api, notifier) = controller(api);
    ctl.select_group(Group::B).await.unwrap();

    let err = ctl
        .submit_assessment(&StudentId::Number(12), Criterion::Shooting, Grade::Met)
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Api(_)));
    assert_eq!(notifier.notices(), vec![Notice::AssessmentFailed]);
    assert!(ctl.snapshot().grades().is_empty());
}

#[tokio::test]
async fn submit_for_student_not_on_roster_is_rejected_locally() {
    let (ctl, api, notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));
    ctl.select_group(Group::B).await.unwrap();

    let err = ctl
        .submit_assessment(&StudentId::Number(1), Criterion::Passing, Grade::Low)
        .await
        .unwrap_err();
    assert!(err.is_rejected_locally());
    assert_eq!(api.calls(), vec![Call::Roster(Group::B)]);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn submit_without_group_is_rejected_locally() {
    let (ctl, api, _notifier) = controller(FakeApi::default());

    let err = ctl
        .submit_assessment(&StudentId::Number(12), Criterion::Passing, Grade::Low)
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::NoGroupSelected));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn same_grade_twice_leaves_one_entry() {
    let (ctl, api, _notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));
    ctl.select_group(Group::B).await.unwrap();

    for _ in 0..2 {
        ctl.submit_assessment(&StudentId::Number(13), Criterion::Defense, Grade::Below)
            .await
            .unwrap();
    }

    let session = ctl.snapshot();
    assert_eq!(session.grades().len(), 1);
    assert_eq!(
        session.grade_for(&StudentId::Number(13), Criterion::Defense),
        Some(Grade::Below)
    );
    // Both submissions reach the API; nothing is deduplicated.
    assert_eq!(api.calls().len(), 3);
}

#[tokio::test]
async fn submit_str_resolves_typed_values() {
    let (ctl, api, _notifier) = controller(FakeApi::default().with_roster(Group::B, group_b()));
    ctl.select_group_str("b").await.unwrap();

    let key = ctl.submit_str("13", "Passing", "1").await.unwrap();
    assert_eq!(key.to_string(), "13-passing");
    assert_eq!(
        api.calls()[1],
        Call::Create(serde_json::json!({
            "student_id": 13,
            "criterion": "passing",
            "grade": 1,
            "notes": "Group B assessment"
        }))
    );

    let err = ctl.submit_str("13", "rebounding", "1").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::UnknownCriterion(_))
    ));
    let err = ctl.submit_str("13", "passing", "6").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::GradeOutOfRange(6))
    ));
    let err = ctl.submit_str("77", "passing", "2").await.unwrap_err();
    assert!(matches!(err, SessionError::NotInRoster { .. }));
    assert_eq!(api.calls().len(), 2);
}

#[tokio::test]
async fn grades_survive_group_switch_and_clear() {
    let (ctl, _api, _notifier) = controller(
        FakeApi::default()
            .with_roster(Group::A, group_a())
            .with_roster(Group::B, group_b()),
    );
    ctl.select_group(Group::B).await.unwrap();
    ctl.submit_assessment(&StudentId::Number(12), Criterion::Dribbling, Grade::Excellent)
        .await
        .unwrap();

    ctl.select_group(Group::A).await.unwrap();
    ctl.clear_group();

    let session = ctl.snapshot();
    assert_eq!(session.view(), View::GroupSelection);
    assert!(session.students().is_empty());
    assert_eq!(
        session.grade_for(&StudentId::Number(12), Criterion::Dribbling),
        Some(Grade::Excellent)
    );
}

#[tokio::test(start_paused = true)]
async fn slower_earlier_load_does_not_overwrite_newer_one() {
    let api = FakeApi::default()
        .with_roster(Group::A, group_a())
        .with_roster(Group::B, group_b())
        .with_delay(Group::A, Duration::from_millis(500))
        .with_delay(Group::B, Duration::from_millis(10));
    let (ctl, _api, notifier) = controller(api);

    let (first, second) = tokio::join!(ctl.select_group(Group::A), async {
        // Let the first load get its ticket before the second starts.
        tokio::time::sleep(Duration::from_millis(1)).await;
        ctl.select_group(Group::B).await
    });

    assert_eq!(first.unwrap(), LoadOutcome::Stale { group: Group::A });
    assert_eq!(
        second.unwrap(),
        LoadOutcome::Loaded { group: Group::B, count: 2 }
    );
    let session = ctl.snapshot();
    assert_eq!(session.current_group(), Some(Group::B));
    assert_eq!(session.students(), group_b().as_slice());
    assert!(!session.loading());
    assert!(notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn superseded_failure_is_discarded_without_notice() {
    let api = FakeApi::default()
        .with_roster(Group::B, group_b())
        .with_failing_roster(Group::A)
        .with_delay(Group::A, Duration::from_millis(500))
        .with_delay(Group::B, Duration::from_millis(10));
    let (ctl, api, notifier) = controller(api);

    let (first, second) = tokio::join!(ctl.select_group(Group::A), async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        ctl.select_group(Group::B).await
    });

    assert_eq!(first.unwrap(), LoadOutcome::Stale { group: Group::A });
    assert_eq!(
        second.unwrap(),
        LoadOutcome::Loaded { group: Group::B, count: 2 }
    );
    assert!(notifier.notices().is_empty());
    assert_eq!(api.calls(), vec![Call::Roster(Group::A), Call::Roster(Group::B)]);

    let session = ctl.snapshot();
    assert_eq!(session.current_group(), Some(Group::B));
    assert_eq!(session.students(), group_b().as_slice());
    assert!(!session.loading());
}

#[tokio::test(start_paused = true)]
async fn clear_during_load_discards_late_roster() {
    let api = FakeApi::default()
        .with_roster(Group::C, group_a())
        .with_delay(Group::C, Duration::from_millis(100));
    let (ctl, _api, _notifier) = controller(api);

    let (outcome, ()) = tokio::join!(ctl.select_group(Group::C), async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(ctl.snapshot().loading());
        ctl.clear_group();
    });

    assert_eq!(outcome.unwrap(), LoadOutcome::Stale { group: Group::C });
    assert_eq!(ctl.snapshot().view(), View::GroupSelection);
}
