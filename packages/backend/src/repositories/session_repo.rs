//! Session repository.

use crate::{BackendError, get_client};

/// Repository for the session endpoint.
pub struct SessionRepository;

impl SessionRepository {
    /// End the session (`POST /logout`).
    ///
    /// The backend acknowledges without invalidating anything server side;
    /// whatever credentials the client holds are its own to discard.
    pub async fn logout() -> Result<(), BackendError> {
        get_client()?.post_empty(&["logout"]).await
    }
}
