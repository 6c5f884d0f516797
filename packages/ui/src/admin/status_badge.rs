//! Status badge components.

use console_core::UserStatus;
use dioxus::prelude::*;

/// Badge for a correction or job comment status as sent by the backend.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let text = status;
    let bg_class = match text.trim().to_lowercase().as_str() {
        "pending" | "submitted" | "open" | "new" => "badge-pending",
        "approved" | "accepted" | "resolved" | "completed" | "read" => "badge-completed",
        "denied" | "rejected" | "declined" => "badge-failed",
        "in progress" | "in review" | "reviewing" => "badge-running",
        _ => "badge-default",
    };
    let label = if text.trim().is_empty() { "Unknown" } else { text.trim() };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {label}
        }
    }
}

/// Badge for a user's activation status.
#[component]
pub fn UserStatusBadge(status: UserStatus) -> Element {
    let bg_class = match status {
        UserStatus::Pending => "badge-pending",
        UserStatus::Active => "badge-running",
    };

    rsx! {
        span {
            class: "state-badge {bg_class}",
            {status.label()}
        }
    }
}
