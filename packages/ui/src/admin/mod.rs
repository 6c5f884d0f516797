//! Admin console components.

mod confirm_modal;
mod format;
mod list_toolbar;
mod notification_body;
mod status_badge;
mod toast;
mod user_forms;

pub mod pages;

pub use confirm_modal::ConfirmModal;
pub use format::{format_hours, format_rate, format_time, or_empty};
pub use list_toolbar::ListToolbar;
pub use notification_body::NotificationBody;
pub use status_badge::{StatusBadge, UserStatusBadge};
pub use toast::{ToastEntry, ToastStack, Toasts, use_toasts};
pub use user_forms::{CreateUserForm, UserEditForm};
