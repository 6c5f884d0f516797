//! Admin page components for route-based navigation.

mod corrections_page;
mod events_page;
mod job_comments_page;
mod notifications_page;
mod users_page;

pub use corrections_page::CorrectionsPage;
pub use events_page::EventsPage;
pub use job_comments_page::JobCommentsPage;
pub use notifications_page::NotificationsPage;
pub use users_page::UsersPage;
