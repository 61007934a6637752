//! Typed client for the class overview endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/class/summary` | Totals and per-group averages |
//! | GET    | `/api/basketball/rubric` | Rubric header |
//! | GET    | `/api/mobile/lesson/active` | Lesson view with rosters and rotation timer |

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use rubrix_core::{Criterion, Group, Student};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Per-group statistics inside [`ClassSummary::group_breakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub total_assessments: usize,
    pub avg_grade: f64,
}

/// Response of `GET /api/class/summary`.
///
/// The API answers with one of two shapes: before any assessment exists it
/// sends `message` plus nominal `groups` sizes; afterwards it sends the
/// average, breakdown and assessed criteria. Both decode into this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub total_students: usize,
    pub total_assessments: usize,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub class_average: Option<f64>,
    /// Keyed `group_A` .. `group_D`.
    #[serde(default)]
    pub group_breakdown: BTreeMap<String, GroupStats>,
    #[serde(default)]
    pub criteria_assessed: Vec<String>,
    /// Nominal group sizes, present only in the empty shape.
    #[serde(default)]
    pub groups: BTreeMap<String, usize>,
}

impl ClassSummary {
    /// Whether the API has recorded no assessments yet.
    pub fn is_empty(&self) -> bool {
        self.total_assessments == 0
    }

    /// Statistics for `group`, if the breakdown carries them.
    pub fn group(&self, group: Group) -> Option<&GroupStats> {
        self.group_breakdown.get(&format!("group_{group}"))
    }
}

/// Response of `GET /api/basketball/rubric`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rubric {
    pub title: String,
    pub criteria: Vec<String>,
    pub students: usize,
    pub groups: usize,
}

/// One group inside [`ActiveLesson`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonGroup {
    pub id: Group,
    pub name: String,
    pub students: Vec<Student>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Station rotation timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationTimer {
    /// Seconds per rotation.
    pub rotation_time: u64,
    pub current_rotation: u32,
}

impl RotationTimer {
    pub fn rotation_duration(&self) -> Duration {
        Duration::from_secs(self.rotation_time)
    }
}

/// Response of `GET /api/mobile/lesson/active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveLesson {
    pub lesson_title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub groups: Vec<LessonGroup>,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub timer: Option<RotationTimer>,
}

/// Client for the class overview endpoints.
#[derive(Debug, Clone)]
pub struct ClassClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ClassClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Calls `GET {base_url}/api/class/summary`.
    pub async fn summary(&self) -> Result<ClassSummary, ApiError> {
        let endpoint = "GET /class/summary";
        let url = crate::api_url(&self.base_url, &["class", "summary"]);

        let resp = crate::send(endpoint, self.http.get(url)).await?;
        crate::decode(endpoint, resp).await
    }

    /// Calls `GET {base_url}/api/basketball/rubric`.
    pub async fn rubric(&self) -> Result<Rubric, ApiError> {
        let endpoint = "GET /basketball/rubric";
        let url = crate::api_url(&self.base_url, &["basketball", "rubric"]);

        let resp = crate::send(endpoint, self.http.get(url)).await?;
        crate::decode(endpoint, resp).await
    }

    /// Calls `GET {base_url}/api/mobile/lesson/active`.
    pub async fn active_lesson(&self) -> Result<ActiveLesson, ApiError> {
        let endpoint = "GET /mobile/lesson/active";
        let url = crate::api_url(&self.base_url, &["mobile", "lesson", "active"]);

        let resp = crate::send(endpoint, self.http.get(url)).await?;
        crate::decode(endpoint, resp).await
    }
}
