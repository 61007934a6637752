//! # rubrix-client -- Typed Rust client for the assessment API
//!
//! Provides typed access to the REST API that owns rosters and assessment
//! records:
//! - **Students** via `/api/students` and `/api/students/group/{group}`
//! - **Assessments** via `/api/assessments` and `/api/assessments/student/{id}`
//! - **Class** overview via `/api/class/summary`, `/api/basketball/rubric`
//!   and `/api/mobile/lesson/active`
//!
//! ## Error Semantics
//!
//! Transport failures, non-2xx statuses and undecodable bodies each map to
//! one [`ApiError`] variant. Nothing is retried: the caller decides whether
//! to repeat a request.
//!
//! ## API Path Convention
//!
//! The full URL pattern is `{base_url}/api/{resource}`, for example
//! `http://127.0.0.1:8000/api/students/group/B`. A base URL with a path
//! prefix (a reverse proxy mount) keeps its prefix.

pub mod assessments;
pub mod class;
pub mod config;
pub mod error;
pub mod students;

pub use config::ApiConfig;
pub use error::ApiError;

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

/// Path segment every endpoint lives under.
const API_PREFIX: &str = "api";

/// Top-level assessment API client. Holds sub-clients per resource.
#[derive(Debug, Clone)]
pub struct RubrixClient {
    students: students::StudentClient,
    assessments: assessments::AssessmentClient,
    class: class::ClassClient,
}

impl RubrixClient {
    /// Create a new client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            students: students::StudentClient::new(http.clone(), config.base_url.clone()),
            assessments: assessments::AssessmentClient::new(http.clone(), config.base_url.clone()),
            class: class::ClassClient::new(http, config.base_url),
        })
    }

    /// Access the students client.
    pub fn students(&self) -> &students::StudentClient {
        &self.students
    }

    /// Access the assessments client.
    pub fn assessments(&self) -> &assessments::AssessmentClient {
        &self.assessments
    }

    /// Access the class overview client.
    pub fn class(&self) -> &class::ClassClient {
        &self.class
    }
}

/// Build `{base}/api/{segments...}`, percent-encoding each segment.
pub(crate) fn api_url(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Config rejects cannot-be-a-base URLs, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().push(API_PREFIX).extend(segments);
    }
    url
}

/// Send a request, mapping transport failures and non-2xx statuses.
pub(crate) async fn send(
    endpoint: &str,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, ApiError> {
    tracing::debug!(endpoint, "sending API request");

    let resp = request.send().await.map_err(|e| ApiError::Http {
        endpoint: endpoint.to_string(),
        source: e,
    })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
            body,
        });
    }

    Ok(resp)
}

/// Decode a successful response body.
pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    resp.json().await.map_err(|e| ApiError::Deserialization {
        endpoint: endpoint.to_string(),
        source: e,
    })
}
