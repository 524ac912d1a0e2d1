/*
[INPUT]:  Role filters and session authentication
[OUTPUT]: Account listings for the admin console
[POS]:    HTTP layer - account endpoints (require session)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

// ### Account Endpoints

use reqwest::Method;

use crate::http::{ConsoleClient, Result};
use crate::types::{AccountRecord, Role};

impl ConsoleClient {
    /// List accounts filtered by role set
    ///
    /// GET /api/accounts?roles={codes}
    pub async fn list_accounts(&self, roles: &[Role]) -> Result<Vec<AccountRecord>> {
        let endpoint = if roles.is_empty() {
            "/api/accounts".to_string()
        } else {
            let codes = roles
                .iter()
                .map(|role| role.code().to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("/api/accounts?roles={}", codes)
        };

        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
