//! Correction report server functions.

use console_core::CorrectionsPayload;
use dioxus::prelude::*;

/// List all corrections with related users and events.
#[get("/api/corrections")]
pub async fn list_corrections() -> Result<CorrectionsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::CorrectionRepository;

        crate::init::ready().await?;

        CorrectionRepository::list()
            .await
            .map_err(crate::init::backend_failure("load corrections"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List the corrections filed by the user with `email`.
#[get("/api/corrections/by-user/:email")]
pub async fn list_user_corrections(email: String) -> Result<CorrectionsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::CorrectionRepository;

        crate::init::ready().await?;

        CorrectionRepository::list_for_user(&email)
            .await
            .map_err(crate::init::backend_failure("load user corrections"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Delete a correction.
#[post("/api/corrections/:id/delete")]
pub async fn delete_correction(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::CorrectionRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        CorrectionRepository::delete(&RecordId::from(id))
            .await
            .map_err(crate::init::backend_failure("delete correction"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
