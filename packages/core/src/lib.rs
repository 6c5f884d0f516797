//! Core domain types for the staffing admin console.
//!
//! This crate contains shared types used across all packages:
//! - Records returned by the backend (events, users, corrections, job comments, notifications)
//! - The generic list controller behind every list screen
//! - Identifier lookups, the delete flow and view toggles

mod correction;
mod delete;
mod event;
mod job_comment;
mod listing;
mod lookup;
mod notification;
mod record;
mod user;
mod view;

pub use correction::{Correction, CorrectionSortKey, CorrectionsPayload};
pub use delete::DeleteFlow;
pub use event::{Event, EventSortKey, EventsPayload};
pub use job_comment::{JobComment, JobCommentSortKey, JobCommentsPayload};
pub use listing::{
    ListController, Listable, SortDirection, SortDirective, SortField, SortValue, distinct_values,
    locale_compare, matches_query, project,
};
pub use lookup::{IdIndex, Identified, resolve_names};
pub use notification::{Notification, NotificationSegment, NotificationSortKey};
pub use record::RecordId;
pub use user::{NewUser, User, UserSortKey, UserStatus, UserUpdate};
pub use view::{GENERIC_FAILURE, Panel, PanelToggle, Toast, ToastKind, ViewMode};
