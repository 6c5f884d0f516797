//! Event repository.

use console_core::{EventsPayload, RecordId};

use crate::{BackendError, get_client};

/// Repository for event endpoints.
pub struct EventRepository;

impl EventRepository {
    /// List all events with the users they reference (`GET /events`).
    pub async fn list() -> Result<EventsPayload, BackendError> {
        get_client()?.get_json(&["events"]).await
    }

    /// Delete an event (`DELETE /events/{id}`).
    pub async fn delete(id: &RecordId) -> Result<(), BackendError> {
        get_client()?.delete(&["events", id.as_str()]).await
    }
}
