/*
[INPUT]:  Backend JSON payloads and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the backend schema changes or new types are added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Role;

/// One row of the role-filtered accounts listing.
///
/// `sid` is present only for student accounts that have an external
/// identifier mapped; other roles never carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "accountID")]
    pub account_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub role: Role,
    #[serde(rename = "SID", default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
}

/// Confirmation of a successful mutation, surfaced verbatim in the UI
/// ("Success 200: OK" style notifications).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
    pub status_text: String,
}
