//! Correction report repository.

use console_core::{CorrectionsPayload, RecordId};

use crate::{BackendError, get_client};

/// Repository for correction endpoints.
pub struct CorrectionRepository;

impl CorrectionRepository {
    /// List every correction with related users and events (`GET /corrections`).
    pub async fn list() -> Result<CorrectionsPayload, BackendError> {
        get_client()?.get_json(&["corrections"]).await
    }

    /// List the corrections filed by one user (`GET /corrections/{email}`).
    pub async fn list_for_user(email: &str) -> Result<CorrectionsPayload, BackendError> {
        get_client()?.get_json(&["corrections", email]).await
    }

    /// Delete a correction (`DELETE /corrections/{id}`).
    pub async fn delete(id: &RecordId) -> Result<(), BackendError> {
        get_client()?.delete(&["corrections", id.as_str()]).await
    }
}
