//! Notification server functions.

use console_core::Notification;
use dioxus::prelude::*;

/// List the notifications visible to administrators.
#[get("/api/notifications/admin")]
pub async fn list_admin_notifications() -> Result<Vec<Notification>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::NotificationRepository;

        crate::init::ready().await?;

        NotificationRepository::list_admin()
            .await
            .map_err(crate::init::backend_failure("load notifications"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List the notifications addressed to the user with `email`.
#[get("/api/notifications/by-user/:email")]
pub async fn list_user_notifications(email: String) -> Result<Vec<Notification>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::NotificationRepository;

        crate::init::ready().await?;

        NotificationRepository::list_for_user(&email)
            .await
            .map_err(crate::init::backend_failure("load user notifications"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
