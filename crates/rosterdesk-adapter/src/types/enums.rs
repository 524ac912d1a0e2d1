/*
[INPUT]:  Numeric role codes from the accounts payload
[OUTPUT]: Typed Role enum with total code mapping
[POS]:    Data layer - role code translation
[UPDATE]: When the backend introduces new role codes
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, wire-encoded as a numeric code.
///
/// The mapping is total: codes outside the known set are rejected at
/// deserialization instead of producing an unlabeled row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Admin,
    Lecturer,
    Student,
}

/// Role code outside the known {0, 1, 2} set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRoleCode(pub u8);

impl fmt::Display for UnknownRoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role code {}", self.0)
    }
}

impl std::error::Error for UnknownRoleCode {}

impl Role {
    /// Wire code used in payloads and query strings.
    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Lecturer => 1,
            Role::Student => 2,
        }
    }

    /// Human-readable label shown in the accounts table.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Lecturer => "Lecturer",
            Role::Student => "Student",
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = UnknownRoleCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Role::Admin),
            1 => Ok(Role::Lecturer),
            2 => Ok(Role::Student),
            other => Err(UnknownRoleCode(other)),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> u8 {
        role.code()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Role::Admin, "Admin")]
    #[case(1, Role::Lecturer, "Lecturer")]
    #[case(2, Role::Student, "Student")]
    fn role_code_and_label(#[case] code: u8, #[case] role: Role, #[case] label: &str) {
        assert_eq!(Role::try_from(code), Ok(role));
        assert_eq!(role.code(), code);
        assert_eq!(role.label(), label);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Role::try_from(3), Err(UnknownRoleCode(3)));
        assert_eq!(Role::try_from(255), Err(UnknownRoleCode(255)));
    }

    #[test]
    fn unknown_code_fails_deserialization() {
        let result: Result<Role, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn role_round_trips_through_json() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "2");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Student);
    }
}
