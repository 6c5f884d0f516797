//! Job comment repository.

use console_core::{JobCommentsPayload, RecordId};

use crate::{BackendError, get_client};

/// Repository for job comment endpoints.
pub struct JobCommentRepository;

impl JobCommentRepository {
    /// List every job comment with related users and events (`GET /job-comments`).
    pub async fn list() -> Result<JobCommentsPayload, BackendError> {
        get_client()?.get_json(&["job-comments"]).await
    }

    /// List the job comments left by one user (`GET /job-comments/{email}`).
    pub async fn list_for_user(email: &str) -> Result<JobCommentsPayload, BackendError> {
        get_client()?.get_json(&["job-comments", email]).await
    }

    /// Delete a job comment (`DELETE /job-comments/{id}`).
    pub async fn delete(id: &RecordId) -> Result<(), BackendError> {
        get_client()?.delete(&["job-comments", id.as_str()]).await
    }
}
