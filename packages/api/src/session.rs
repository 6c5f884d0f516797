//! Session server functions.

use dioxus::prelude::*;

/// End the current session.
///
/// The backend only acknowledges the call; it keeps no session to invalidate.
#[post("/api/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::SessionRepository;

        crate::init::ready().await?;

        SessionRepository::logout()
            .await
            .map_err(crate::init::backend_failure("log out"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
