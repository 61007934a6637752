//! Typed client for the assessment endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/assessments` | Record one assessment |
//! | GET    | `/api/assessments` | Every recorded assessment |
//! | GET    | `/api/assessments/student/{id}` | Assessments for one student |

use chrono::{DateTime, NaiveDateTime};
use rubrix_core::{grade_style, Criterion, GradeStyle, Group, NewAssessment, Student, StudentId};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Assessment as stored by the API.
///
/// `criterion` and `grade` are kept raw: the server accepts values outside
/// the client's closed sets, and one such record must not make a whole
/// listing undecodable. Use [`AssessmentRecord::criterion`] and
/// [`AssessmentRecord::style`] to interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub student_id: StudentId,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_group: Option<Group>,
    pub criterion: String,
    pub grade: i64,
    #[serde(default)]
    pub notes: Option<String>,
    /// Wall-clock time of the assessment. An offset sent by the API is
    /// dropped; an unreadable value decodes as `None`.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

/// Accept naive ISO-8601, RFC 3339 with an offset, or anything else as `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => parse_timestamp(&s),
        Some(Raw::Other(_)) | None => None,
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

impl AssessmentRecord {
    /// The criterion, if it is one of the four known skills.
    pub fn criterion(&self) -> Option<Criterion> {
        self.criterion.parse().ok()
    }

    /// Presentation of the stored grade; neutral for unknown values.
    pub fn style(&self) -> GradeStyle {
        grade_style(self.grade)
    }
}

/// Response of `GET /api/assessments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentList {
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub total: Option<usize>,
}

/// Response of `GET /api/assessments/student/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAssessments {
    pub student: Student,
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Client for the assessment endpoints.
#[derive(Debug, Clone)]
pub struct AssessmentClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl AssessmentClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Record an assessment.
    ///
    /// Calls `POST {base_url}/api/assessments`. Any 2xx status is an
    /// acknowledgement. The stored record is returned when the body parses
    /// as one; an empty or unfamiliar body still counts as success.
    pub async fn create(
        &self,
        assessment: &NewAssessment,
    ) -> Result<Option<AssessmentRecord>, ApiError> {
        let endpoint = "POST /assessments";
        let url = crate::api_url(&self.base_url, &["assessments"]);

        let resp = crate::send(endpoint, self.http.post(url).json(assessment)).await?;
        let record = resp.json::<AssessmentRecord>().await.ok();

        tracing::info!(
            key = %assessment.key(),
            grade = assessment.grade.value(),
            "assessment acknowledged"
        );
        Ok(record)
    }

    /// List every assessment the API holds.
    ///
    /// Calls `GET {base_url}/api/assessments`.
    pub async fn list(&self) -> Result<AssessmentList, ApiError> {
        let endpoint = "GET /assessments";
        let url = crate::api_url(&self.base_url, &["assessments"]);

        let resp = crate::send(endpoint, self.http.get(url)).await?;
        crate::decode(endpoint, resp).await
    }

    /// Assessments for one student.
    ///
    /// Calls `GET {base_url}/api/assessments/student/{id}`. Returns `None`
    /// when the API does not know the student.
    pub async fn for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<StudentAssessments>, ApiError> {
        let endpoint = format!("GET /assessments/student/{student_id}");
        let id = student_id.to_string();
        let url = crate::api_url(&self.base_url, &["assessments", "student", &id]);

        match crate::send(&endpoint, self.http.get(url)).await {
            Ok(resp) => crate::decode(&endpoint, resp).await.map(Some),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
