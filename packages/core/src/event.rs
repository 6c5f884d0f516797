//! Event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Identified, Listable, RecordId, SortField, SortValue, User};

/// A staffed event with its load-in/load-out schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default, rename = "eventName")]
    pub name: Option<String>,
    #[serde(default, rename = "eventLoadIn")]
    pub load_in: Option<DateTime<Utc>>,
    #[serde(default, rename = "eventLoadOut")]
    pub load_out: Option<DateTime<Utc>>,
    #[serde(default, rename = "eventLoadInHours", alias = "eventHours")]
    pub load_in_hours: Option<f64>,
    #[serde(default, rename = "eventLoadOutHours")]
    pub load_out_hours: Option<f64>,
    /// Users assigned to work the event.
    #[serde(default, rename = "assignedContractors")]
    pub contractors: Vec<RecordId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled event")
    }

    /// Load-in plus load-out hours, when either is known.
    pub fn total_hours(&self) -> Option<f64> {
        match (self.load_in_hours, self.load_out_hours) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or_default() + b.unwrap_or_default()),
        }
    }
}

impl Identified for Event {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSortKey {
    Name,
    LoadIn,
    LoadOut,
    Hours,
    Contractors,
    CreatedAt,
}

impl SortField for EventSortKey {
    const ALL: &'static [Self] = &[
        EventSortKey::Name,
        EventSortKey::LoadIn,
        EventSortKey::LoadOut,
        EventSortKey::Hours,
        EventSortKey::Contractors,
        EventSortKey::CreatedAt,
    ];

    fn label(self) -> &'static str {
        match self {
            EventSortKey::Name => "Name",
            EventSortKey::LoadIn => "Load in",
            EventSortKey::LoadOut => "Load out",
            EventSortKey::Hours => "Hours",
            EventSortKey::Contractors => "Contractors",
            EventSortKey::CreatedAt => "Created",
        }
    }
}

impl Listable for Event {
    type SortKey = EventSortKey;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        self.name.as_deref().into_iter().collect()
    }

    fn sort_value(&self, key: EventSortKey) -> SortValue<'_> {
        match key {
            EventSortKey::Name => self.name.as_deref().into(),
            EventSortKey::LoadIn => self.load_in.into(),
            EventSortKey::LoadOut => self.load_out.into(),
            EventSortKey::Hours => self.total_hours().into(),
            EventSortKey::Contractors => SortValue::Number(self.contractors.len() as f64),
            EventSortKey::CreatedAt => self.created_at.into(),
        }
    }
}

/// Response of `GET /events`: the events plus the users they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsPayload {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_event() -> Result<(), serde_json::Error> {
        let event: Event = serde_json::from_value(serde_json::json!({
            "_id": "65f0c2",
            "eventName": "Spring Gala",
            "eventLoadIn": "2024-04-01T08:00:00.000Z",
            "eventLoadOut": "2024-04-01T23:00:00.000Z",
            "eventLoadInHours": 4,
            "eventLoadOutHours": 3.5,
            "assignedContractors": ["u1", "u2"],
            "createdAt": "2024-03-01T10:00:00.000Z",
            "__v": 0
        }))?;

        assert_eq!(event.id.as_str(), "65f0c2");
        assert_eq!(event.display_name(), "Spring Gala");
        assert_eq!(event.total_hours(), Some(7.5));
        assert_eq!(event.contractors.len(), 2);
        assert!(event.updated_at.is_none());
        Ok(())
    }

    #[test]
    fn payload_tolerates_missing_users() -> Result<(), serde_json::Error> {
        let payload: EventsPayload =
            serde_json::from_str(r#"{"events":[{"_id":"e1"}]}"#)?;
        assert_eq!(payload.events.len(), 1);
        assert!(payload.users.is_empty());
        assert_eq!(payload.events[0].display_name(), "Untitled event");
        Ok(())
    }
}
