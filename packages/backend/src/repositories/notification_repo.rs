//! Notification repository.

use console_core::Notification;

use crate::{BackendError, get_client};

/// Repository for notification endpoints.
pub struct NotificationRepository;

impl NotificationRepository {
    /// Notifications visible to administrators (`GET /notifications/admin`).
    pub async fn list_admin() -> Result<Vec<Notification>, BackendError> {
        get_client()?.get_json(&["notifications", "admin"]).await
    }

    /// Notifications addressed to one user (`GET /notifications/{email}`).
    pub async fn list_for_user(email: &str) -> Result<Vec<Notification>, BackendError> {
        get_client()?.get_json(&["notifications", email]).await
    }
}
