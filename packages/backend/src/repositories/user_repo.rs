//! User repository.

use console_core::{NewUser, RecordId, User, UserUpdate};

use crate::{BackendError, get_client};

/// Repository for user endpoints.
pub struct UserRepository;

impl UserRepository {
    /// List all users (`GET /users`).
    pub async fn list() -> Result<Vec<User>, BackendError> {
        get_client()?.get_json(&["users"]).await
    }

    /// Update a user (`PUT /update-user/{id}`).
    ///
    /// Only the acknowledgement matters; callers merge the update locally.
    pub async fn update(id: &RecordId, update: &UserUpdate) -> Result<(), BackendError> {
        get_client()?
            .put_json(&["update-user", id.as_str()], update)
            .await
    }

    /// Create a user; the backend emails them a temporary password
    /// (`POST /create-user`).
    pub async fn create(user: &NewUser) -> Result<User, BackendError> {
        get_client()?.post_json(&["create-user"], user).await
    }

    /// Delete a user (`DELETE /delete-user/{id}`).
    pub async fn delete(id: &RecordId) -> Result<(), BackendError> {
        get_client()?.delete(&["delete-user", id.as_str()]).await
    }

    /// Resend the activation email to a pending user (`POST /resend-email/{id}`).
    pub async fn resend_email(id: &RecordId) -> Result<(), BackendError> {
        get_client()?.post_empty(&["resend-email", id.as_str()]).await
    }
}
