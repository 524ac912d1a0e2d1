/*
[INPUT]:  Classroom/assignment ids and roster files
[OUTPUT]: Classroom and assignment listings, import acknowledgements
[POS]:    HTTP layer - import wizard endpoints
[UPDATE]: When adding new wizard endpoints or wiring the upload flow
*/

// ### Classroom / Assignment Endpoints

use reqwest::Method;

use crate::http::{ConsoleClient, Result};
use crate::types::{Ack, Assignment, Classroom};

impl ConsoleClient {
    /// List classrooms where the user has the teacher role
    ///
    /// GET /api/classrooms?teacher={userId}
    pub async fn classrooms_teaching(&self, user_id: i64) -> Result<Vec<Classroom>> {
        let endpoint = format!("/api/classrooms?teacher={}", user_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// List assignments of a classroom
    ///
    /// GET /api/classrooms/{id}/assignments
    pub async fn assignments(&self, classroom_id: i64) -> Result<Vec<Assignment>> {
        let endpoint = format!("/api/classrooms/{}/assignments", classroom_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Bulk-load a student roster into a classroom
    ///
    /// POST /api/classrooms/{id}/students/import
    /// Upload wiring is not implemented; the console only validates the
    /// selection before reaching this point.
    pub async fn import_student_roster(&self, classroom_id: i64, file: &[u8]) -> Result<Ack> {
        let _ = (classroom_id, file);
        todo!("Implement multipart POST for the student roster upload")
    }

    /// Bulk-load a score sheet for an assignment
    ///
    /// POST /api/classrooms/{id}/assignments/{assignmentId}/scores/import
    pub async fn import_score_sheet(
        &self,
        classroom_id: i64,
        assignment_id: i64,
        file: &[u8],
    ) -> Result<Ack> {
        let _ = (classroom_id, assignment_id, file);
        todo!("Implement multipart POST for the score sheet upload")
    }
}
