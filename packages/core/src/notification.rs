//! Notifications broadcast to users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Identified, Listable, RecordId, SortField, SortValue};

/// A notification body is up to three text fragments with two inline links
/// between them: `text1 [link1] text2 [link2] text3`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
    #[serde(default)]
    pub text3: Option<String>,
    #[serde(default)]
    pub link1: Option<String>,
    #[serde(default)]
    pub link_text1: Option<String>,
    #[serde(default)]
    pub link2: Option<String>,
    #[serde(default)]
    pub link_text2: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One piece of an inline-rendered notification body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSegment<'a> {
    Text(&'a str),
    Link { href: &'a str, label: &'a str },
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn link_segment<'a>(
    href: &'a Option<String>,
    label: &'a Option<String>,
) -> Option<NotificationSegment<'a>> {
    non_empty(href).map(|href| NotificationSegment::Link {
        href,
        label: non_empty(label).unwrap_or(href),
    })
}

impl Notification {
    pub fn display_subject(&self) -> &str {
        non_empty(&self.subject).unwrap_or("(no subject)")
    }

    /// Body segments in reading order, skipping empty fragments and links
    /// without a target. A link without a label shows its target.
    pub fn segments(&self) -> Vec<NotificationSegment<'_>> {
        [
            non_empty(&self.text1).map(NotificationSegment::Text),
            link_segment(&self.link1, &self.link_text1),
            non_empty(&self.text2).map(NotificationSegment::Text),
            link_segment(&self.link2, &self.link_text2),
            non_empty(&self.text3).map(NotificationSegment::Text),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Identified for Notification {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationSortKey {
    Subject,
    CreatedAt,
}

impl SortField for NotificationSortKey {
    const ALL: &'static [Self] = &[NotificationSortKey::Subject, NotificationSortKey::CreatedAt];

    fn label(self) -> &'static str {
        match self {
            NotificationSortKey::Subject => "Subject",
            NotificationSortKey::CreatedAt => "Date",
        }
    }
}

impl Listable for Notification {
    type SortKey = NotificationSortKey;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            self.subject.as_deref(),
            self.text1.as_deref(),
            self.text2.as_deref(),
            self.text3.as_deref(),
            self.link_text1.as_deref(),
            self.link_text2.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn sort_value(&self, key: NotificationSortKey) -> SortValue<'_> {
        match key {
            NotificationSortKey::Subject => self.subject.as_deref().into(),
            NotificationSortKey::CreatedAt => self.created_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_interleave_text_and_links() {
        let notification = Notification {
            text1: Some("Please review".to_string()),
            link1: Some("https://example.com/policy".to_string()),
            link_text1: Some("the policy".to_string()),
            text2: Some("before Friday.".to_string()),
            link2: Some("https://example.com/faq".to_string()),
            text3: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            notification.segments(),
            vec![
                NotificationSegment::Text("Please review"),
                NotificationSegment::Link {
                    href: "https://example.com/policy",
                    label: "the policy"
                },
                NotificationSegment::Text("before Friday."),
                NotificationSegment::Link {
                    href: "https://example.com/faq",
                    label: "https://example.com/faq"
                },
            ]
        );
    }

    #[test]
    fn link_text_without_target_is_dropped() {
        let notification = Notification {
            link_text1: Some("dangling".to_string()),
            ..Default::default()
        };
        assert!(notification.segments().is_empty());
        assert_eq!(notification.display_subject(), "(no subject)");
    }
}
