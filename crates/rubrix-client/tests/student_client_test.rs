//! Contract tests for StudentClient.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/api/students/group/{group}` | `by_group_*` |
//! | GET    | `/api/students` | `all_*` |

use rubrix_client::{ApiConfig, ApiError, RubrixClient};
use rubrix_core::{Group, StudentId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> RubrixClient {
    let config = ApiConfig {
        base_url: mock_server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    RubrixClient::new(config).unwrap()
}

// ── GET /api/students/group/{group} ──────────────────────────────────

#[tokio::test]
async fn by_group_sends_correct_path_and_returns_roster() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/group/B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "group": "B",
            "students": [
                {"id": "008", "name": "Emma Thompson", "group": "B"},
                {"id": "009", "name": "Hassan Ali", "group": "B"}
            ],
            "count": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let students = client.students().by_group(Group::B).await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, StudentId::Text("008".into()));
    assert_eq!(students[1].name, "Hassan Ali");
}

#[tokio::test]
async fn by_group_accepts_minimal_body_with_numeric_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/group/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "students": [{"id": 12, "name": "David Miller"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let students = client.students().by_group(Group::A).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, StudentId::Number(12));
    assert_eq!(students[0].group, None);
}

#[tokio::test]
async fn by_group_maps_not_found_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/group/D"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"detail":"No students found in group D"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.students().by_group(Group::D).await.unwrap_err();
    match err {
        ApiError::Status {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "GET /students/group/D");
            assert_eq!(status, 404);
            assert!(body.contains("No students found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn by_group_maps_bad_body_to_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/group/C"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.students().by_group(Group::C).await.unwrap_err();
    assert!(matches!(err, ApiError::Deserialization { .. }));
}

#[tokio::test]
async fn by_group_maps_refused_connection_to_http_error() {
    let client = RubrixClient::new(ApiConfig {
        base_url: "http://127.0.0.1:1".parse().unwrap(),
        timeout_secs: 1,
    })
    .unwrap();

    let err = client.students().by_group(Group::A).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { .. }), "got {err:?}");
}

#[tokio::test]
async fn by_group_is_not_retried_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/group/A"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.students().by_group(Group::A).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn by_group_respects_base_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rubrix/api/students/group/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "students": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RubrixClient::new(ApiConfig {
        base_url: format!("{}/rubrix", mock_server.uri()).parse().unwrap(),
        timeout_secs: 5,
    })
    .unwrap();
    let students = client.students().by_group(Group::A).await.unwrap();
    assert!(students.is_empty());
}

// ── GET /api/students ────────────────────────────────────────────────

#[tokio::test]
async fn all_returns_directory_with_total() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "students": [
                {"id": "001", "name": "Ahmed Al-Rashid", "group": "A"},
                {"id": "015", "name": "Zara Khan", "group": "C"}
            ],
            "total": 2
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let directory = client.students().all().await.unwrap();
    assert_eq!(directory.total, Some(2));
    assert_eq!(directory.students[1].group, Some(Group::C));
}
