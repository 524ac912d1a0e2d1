/*
[INPUT]:  SID values and owning user ids
[OUTPUT]: Mutation acknowledgements for the SID mapping table
[POS]:    HTTP layer - student identifier mapping endpoints
[UPDATE]: When the mapping contract changes
*/

// ### SID Mapping Endpoints

use reqwest::Method;

use crate::http::{ConsoleClient, Result};
use crate::types::Ack;

impl ConsoleClient {
    /// Map a SID to a user, creating the mapping if it does not exist yet
    ///
    /// PUT /api/sids  body: { "sid": ..., "userID": ... }
    pub async fn map_sid(&self, sid: &str, user_id: i64) -> Result<Ack> {
        let body = serde_json::json!({
            "sid": sid,
            "userID": user_id,
        });

        let builder = self.api_request(Method::PUT, "/api/sids")?;
        self.send_ack(builder.json(&body)).await
    }

    /// Clear the mapping for a SID.
    ///
    /// DELETE /api/sids/{sid}
    ///
    /// Keyed by the SID value itself; the backend enforces SID uniqueness,
    /// so the value identifies exactly one mapping.
    pub async fn unmap_sid(&self, sid: &str) -> Result<Ack> {
        let endpoint = format!("/api/sids/{}", sid);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_ack(builder).await
    }
}
