//! Comments left by users about a job (event).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Event, Identified, Listable, RecordId, SortField, SortValue, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobComment {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default, rename = "jobComment")]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, rename = "userID")]
    pub user_id: Option<RecordId>,
    #[serde(default, rename = "eventID")]
    pub event_id: Option<RecordId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobComment {
    pub fn text(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }
}

impl Identified for JobComment {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCommentSortKey {
    Comment,
    Status,
    Type,
    CreatedAt,
}

impl SortField for JobCommentSortKey {
    const ALL: &'static [Self] = &[
        JobCommentSortKey::Comment,
        JobCommentSortKey::Status,
        JobCommentSortKey::Type,
        JobCommentSortKey::CreatedAt,
    ];

    fn label(self) -> &'static str {
        match self {
            JobCommentSortKey::Comment => "Comment",
            JobCommentSortKey::Status => "Status",
            JobCommentSortKey::Type => "Type",
            JobCommentSortKey::CreatedAt => "Submitted",
        }
    }
}

impl Listable for JobComment {
    type SortKey = JobCommentSortKey;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            self.comment.as_deref(),
            self.status.as_deref(),
            self.kind.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn sort_value(&self, key: JobCommentSortKey) -> SortValue<'_> {
        match key {
            JobCommentSortKey::Comment => self.comment.as_deref().into(),
            JobCommentSortKey::Status => self.status.as_deref().into(),
            JobCommentSortKey::Type => self.kind.as_deref().into(),
            JobCommentSortKey::CreatedAt => self.created_at.into(),
        }
    }
}

/// Response of `GET /job-comments` and `GET /job-comments/{email}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCommentsPayload {
    #[serde(default)]
    pub job_comments: Vec<JobComment>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_maps_to_kind() -> Result<(), serde_json::Error> {
        let payload: JobCommentsPayload = serde_json::from_value(serde_json::json!({
            "jobComments": [{
                "_id": "j1",
                "jobComment": "Parking was full",
                "status": "Open",
                "type": "Venue",
                "userID": "u1"
            }]
        }))?;
        let comment = &payload.job_comments[0];
        assert_eq!(comment.kind.as_deref(), Some("Venue"));
        assert_eq!(comment.text(), "Parking was full");
        assert!(payload.events.is_empty());
        Ok(())
    }
}
