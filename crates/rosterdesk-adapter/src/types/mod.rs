/*
[INPUT]:  Backend payload schemas
[OUTPUT]: Typed models and enums for API communication
[POS]:    Data layer - type definitions
[UPDATE]: When the backend schema changes
*/

pub mod enums;
pub mod models;

pub use enums::{Role, UnknownRoleCode};
pub use models::{AccountRecord, Ack, Assignment, Classroom};
