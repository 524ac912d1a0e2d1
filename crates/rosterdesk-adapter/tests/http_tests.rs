/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, sample_accounts_json, setup_mock_server, test_session};
use rosterdesk_adapter::{ClientConfig, ConsoleClient, ConsoleError, Role};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(ConsoleClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(ConsoleClient::with_config(config));
}

#[test]
fn test_client_session_roundtrip() {
    let mut client = assert_ok!(ConsoleClient::new());
    client.set_session(test_session());

    let stored = client.session().expect("session should be set");
    assert_eq!(stored.user_id, 9);
    assert_eq!(stored.token, "test-session-token");
}

#[tokio::test]
async fn test_list_accounts_builds_role_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/accounts"))
        .and(query_param("roles", "0,2"))
        .and(header("authorization", "Bearer test-session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_accounts_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let accounts = assert_ok!(client.list_accounts(&[Role::Admin, Role::Student]).await);

    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[2].user_id, 9);
    assert_eq!(accounts[2].sid.as_deref(), Some("old"));
}

#[tokio::test]
async fn test_list_accounts_error_carries_status() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/accounts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .list_accounts(&[])
        .await
        .expect_err("should surface the backend status");

    match err {
        ConsoleError::Api {
            status,
            status_text,
        } => {
            assert_eq!(status, 503);
            assert_eq!(status_text, "Service Unavailable");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_accounts_rejects_unknown_role_code() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "accountID": 1,
                "userID": 2,
                "role": 7,
                "name": "Ghost",
                "email": "ghost@example.edu",
                "createdAt": "2023-01-01T00:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .list_accounts(&[])
        .await
        .expect_err("unknown role code must not deserialize");

    assert!(matches!(err, ConsoleError::Http(_) | ConsoleError::Serialization(_)));
}

#[tokio::test]
async fn test_map_sid_success_ack() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/sids"))
        .and(body_json(serde_json::json!({
            "sid": "new123",
            "userID": 9,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ack = assert_ok!(client.map_sid("new123", 9).await);

    assert_eq!(ack.status, 200);
    assert_eq!(ack.status_text, "OK");
}

#[tokio::test]
async fn test_map_sid_conflict_is_error() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/sids"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.map_sid("dup", 9).await.expect_err("409 is an error");

    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_unmap_sid_is_keyed_by_value() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/sids/S2023-0042"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ack = assert_ok!(client.unmap_sid("S2023-0042").await);

    assert_eq!(ack.status, 204);
    assert_eq!(ack.status_text, "No Content");
}

#[tokio::test]
async fn test_classrooms_teaching_filters_by_user() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/classrooms"))
        .and(query_param("teacher", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 11, "name": "Programming 101" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let classrooms = assert_ok!(client.classrooms_teaching(9).await);

    assert_eq!(classrooms.len(), 1);
    assert_eq!(classrooms[0].id, 11);
}

#[tokio::test]
async fn test_assignments_for_classroom() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/classrooms/11/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 101, "name": "Lab 1" },
            { "id": 102, "name": "Midterm" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let assignments = assert_ok!(client.assignments(11).await);

    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[1].name, "Midterm");
}

#[tokio::test]
async fn test_assignments_empty_classroom() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/classrooms/12/assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let assignments = assert_ok!(client.assignments(12).await);

    assert!(assignments.is_empty());
}
