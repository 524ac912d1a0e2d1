/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for rosterdesk-adapter tests

use rosterdesk_adapter::{ClientConfig, ConsoleClient, Session};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at a mock server, with a test session attached
pub fn client_for(server: &MockServer) -> ConsoleClient {
    let mut client = ConsoleClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    client.set_session(test_session());
    client
}

/// Session used across tests
pub fn test_session() -> Session {
    Session {
        user_id: 9,
        token: "test-session-token".to_string(),
    }
}

/// Accounts payload with one of each role
pub fn sample_accounts_json() -> serde_json::Value {
    serde_json::json!([
        {
            "accountID": 1,
            "userID": 2,
            "role": 0,
            "name": "Site Admin",
            "email": "admin@example.edu",
            "createdAt": "2022-09-01T08:00:00Z"
        },
        {
            "accountID": 3,
            "userID": 4,
            "role": 1,
            "name": "Dr. Binh Tran",
            "email": "binh.tran@example.edu",
            "createdAt": "2022-10-12T09:30:00Z"
        },
        {
            "accountID": 5,
            "userID": 9,
            "role": 2,
            "SID": "old",
            "name": "An Nguyen",
            "email": "an.nguyen@example.edu",
            "createdAt": "2023-04-01T10:15:30Z"
        }
    ])
}
