//! Repositories over the backend's REST endpoints.

mod correction_repo;
mod event_repo;
mod job_comment_repo;
mod notification_repo;
mod session_repo;
mod user_repo;

pub use correction_repo::CorrectionRepository;
pub use event_repo::EventRepository;
pub use job_comment_repo::JobCommentRepository;
pub use notification_repo::NotificationRepository;
pub use session_repo::SessionRepository;
pub use user_repo::UserRepository;
