//! Correction reports filed against events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Event, Identified, Listable, RecordId, SortField, SortValue, User};

/// A request from a user to correct hours or details of an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default, rename = "correctionName")]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default, rename = "userID")]
    pub user_id: Option<RecordId>,
    #[serde(default, rename = "eventID")]
    pub event_id: Option<RecordId>,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Correction {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled correction")
    }
}

impl Identified for Correction {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionSortKey {
    Name,
    Status,
    RequestType,
    Submitted,
    Updated,
}

impl SortField for CorrectionSortKey {
    const ALL: &'static [Self] = &[
        CorrectionSortKey::Name,
        CorrectionSortKey::Status,
        CorrectionSortKey::RequestType,
        CorrectionSortKey::Submitted,
        CorrectionSortKey::Updated,
    ];

    fn label(self) -> &'static str {
        match self {
            CorrectionSortKey::Name => "Name",
            CorrectionSortKey::Status => "Status",
            CorrectionSortKey::RequestType => "Request type",
            CorrectionSortKey::Submitted => "Submitted",
            CorrectionSortKey::Updated => "Updated",
        }
    }
}

impl Listable for Correction {
    type SortKey = CorrectionSortKey;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            self.name.as_deref(),
            self.status.as_deref(),
            self.request_type.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn sort_value(&self, key: CorrectionSortKey) -> SortValue<'_> {
        match key {
            CorrectionSortKey::Name => self.name.as_deref().into(),
            CorrectionSortKey::Status => self.status.as_deref().into(),
            CorrectionSortKey::RequestType => self.request_type.as_deref().into(),
            CorrectionSortKey::Submitted => self.created_at.into(),
            CorrectionSortKey::Updated => self.updated_at.into(),
        }
    }
}

/// Response of `GET /corrections` and `GET /corrections/{email}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionsPayload {
    #[serde(default)]
    pub corrections: Vec<Correction>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdIndex, ListController};

    #[test]
    fn decodes_payload_with_joins() -> Result<(), serde_json::Error> {
        let payload: CorrectionsPayload = serde_json::from_value(serde_json::json!({
            "corrections": [{
                "_id": "c1",
                "correctionName": "Missed break",
                "status": "Pending",
                "requestType": "Hours",
                "userID": "u1",
                "eventID": "e1",
                "createdAt": "2024-06-01T12:00:00Z"
            }],
            "users": [{ "_id": "u1", "name": "Ada" }],
            "events": [{ "_id": "e1", "eventName": "Expo" }]
        }))?;

        let users = IdIndex::new(&payload.users);
        let events = IdIndex::new(&payload.events);
        let correction = &payload.corrections[0];

        let user = correction.user_id.as_ref().and_then(|id| users.get(id));
        let event = correction.event_id.as_ref().and_then(|id| events.get(id));
        assert_eq!(user.map(User::display_name), Some("Ada"));
        assert_eq!(event.map(Event::display_name), Some("Expo"));
        Ok(())
    }

    #[test]
    fn filter_matches_joined_user_name() {
        let users = vec![User {
            id: RecordId::from("u1"),
            name: Some("Grace Hopper".to_string()),
            ..Default::default()
        }];
        let mut list = ListController::new();
        list.load(vec![
            Correction {
                id: RecordId::from("c1"),
                name: Some("Late clock-in".to_string()),
                user_id: Some(RecordId::from("u1")),
                ..Default::default()
            },
            Correction {
                id: RecordId::from("c2"),
                name: Some("Wrong rate".to_string()),
                ..Default::default()
            },
        ]);
        list.set_query("hopper");

        let index = IdIndex::new(&users);
        let projection = list.projection_with(|c: &Correction| {
            c.user_id
                .as_ref()
                .and_then(|id| index.get(id))
                .map(|u| vec![u.display_name().to_string()])
                .unwrap_or_default()
        });
        assert_eq!(projection.len(), 1);
        assert_eq!(projection[0].id.as_str(), "c1");
    }
}
