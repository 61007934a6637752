//! Typed client for the student roster endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/students/group/{group}` | Roster for one group |
//! | GET    | `/api/students` | Every student |

use rubrix_core::{Group, Student};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response of `GET /api/students/group/{group}`.
///
/// Only `students` is required; the API also echoes the group and a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRoster {
    pub students: Vec<Student>,
    #[serde(default)]
    pub group: Option<Group>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Response of `GET /api/students`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDirectory {
    pub students: Vec<Student>,
    #[serde(default)]
    pub total: Option<usize>,
}

/// Client for the student roster endpoints.
#[derive(Debug, Clone)]
pub struct StudentClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl StudentClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the roster for `group`.
    ///
    /// Calls `GET {base_url}/api/students/group/{group}`. An empty or
    /// unknown group is reported by the API as 404, which surfaces as
    /// [`ApiError::Status`].
    pub async fn by_group(&self, group: Group) -> Result<Vec<Student>, ApiError> {
        let endpoint = format!("GET /students/group/{group}");
        let url = crate::api_url(&self.base_url, &["students", "group", group.as_str()]);

        let resp = crate::send(&endpoint, self.http.get(url)).await?;
        let roster: GroupRoster = crate::decode(&endpoint, resp).await?;

        tracing::debug!(%group, count = roster.students.len(), "roster loaded");
        Ok(roster.students)
    }

    /// Fetch every student across all groups.
    ///
    /// Calls `GET {base_url}/api/students`.
    pub async fn all(&self) -> Result<StudentDirectory, ApiError> {
        let endpoint = "GET /students";
        let url = crate::api_url(&self.base_url, &["students"]);

        let resp = crate::send(endpoint, self.http.get(url)).await?;
        crate::decode(endpoint, resp).await
    }
}
