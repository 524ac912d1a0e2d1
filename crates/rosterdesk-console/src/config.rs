/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed console configuration
[POS]:    Configuration layer - backend endpoint and session setup
[UPDATE]: When adding new configuration options
*/

use rosterdesk_adapter::Role;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the admin console
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Backend endpoint settings
    pub api: ApiConfig,
    /// Session of the signed-in operator
    pub session: SessionConfig,
    /// Role codes shown in the accounts table
    #[serde(default = "default_account_roles")]
    pub account_roles: Vec<Role>,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the platform backend
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Explicit session object; the console never reads ambient storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Internal user id of the operator
    pub user_id: i64,
    /// Bearer token for backend requests
    pub token: String,
}

fn default_account_roles() -> Vec<Role> {
    vec![Role::Admin, Role::Lecturer, Role::Student]
}

fn default_timeout_secs() -> u64 {
    30
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
api:
  base_url: https://console.example.edu
  timeout_secs: 10
session:
  user_id: 9
  token: secret
account_roles: [2]
"#;
        let config: ConsoleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://console.example.edu");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.session.user_id, 9);
        assert_eq!(config.account_roles, vec![Role::Student]);
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let yaml = r#"
api:
  base_url: https://console.example.edu
session:
  user_id: 1
  token: secret
"#;
        let config: ConsoleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.account_roles,
            vec![Role::Admin, Role::Lecturer, Role::Student]
        );
    }

    #[test]
    fn unknown_role_code_fails_parsing() {
        let yaml = r#"
api:
  base_url: https://console.example.edu
session:
  user_id: 1
  token: secret
account_roles: [5]
"#;
        let result: Result<ConsoleConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
