//! Event server functions.

use console_core::EventsPayload;
use dioxus::prelude::*;

/// List all events with the users they reference.
#[get("/api/events")]
pub async fn list_events() -> Result<EventsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::EventRepository;

        crate::init::ready().await?;

        EventRepository::list()
            .await
            .map_err(crate::init::backend_failure("load events"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Delete an event.
#[post("/api/events/:id/delete")]
pub async fn delete_event(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::EventRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        EventRepository::delete(&RecordId::from(id))
            .await
            .map_err(crate::init::backend_failure("delete event"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
