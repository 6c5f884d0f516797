//! Server API functions for the staffing admin console.
//!
//! This crate contains all shared fullstack server functions for:
//! - Events (list, delete)
//! - Users (list, create, update, delete, resend activation email)
//! - Corrections and job comments (list, list per user, delete)
//! - Notifications (admin and per-user lists)
//! - Session (logout)
//!
//! On the server each function forwards to the REST backend through the
//! `backend` repositories.

mod corrections;
mod events;
mod job_comments;
mod notifications;
mod session;
mod users;

#[cfg(feature = "server")]
mod init;

// Re-export all server functions
pub use corrections::*;
pub use events::*;
pub use job_comments::*;
pub use notifications::*;
pub use session::*;
pub use users::*;

#[cfg(feature = "server")]
pub use init::ensure_initialized;

// Re-export core types for convenience
pub use console_core::{
    Correction, CorrectionsPayload, Event, EventsPayload, JobComment, JobCommentsPayload, NewUser,
    Notification, RecordId, User, UserUpdate,
};
