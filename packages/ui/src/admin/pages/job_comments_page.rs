//! Job comments page - feedback left on events, for everyone or one user.

use console_core::{
    DeleteFlow, Event, IdIndex, JobComment, ListController, Panel, User, ViewMode, distinct_values,
};
use dioxus::prelude::*;

use crate::admin::{
    ConfirmModal, ListToolbar, StatusBadge, ToastStack, format_time, or_empty, use_toasts,
};

/// Characters of a comment shown in the delete confirmation.
const PREVIEW_CHARS: usize = 40;

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else if head.is_empty() {
        "this comment".to_string()
    } else {
        head
    }
}

#[derive(Clone, PartialEq)]
struct CommentRow {
    comment: JobComment,
    user: Option<String>,
    event: Option<String>,
}

/// Job comments page component.
#[component]
pub fn JobCommentsPage(#[props(!optional)] email: Option<String>) -> Element {
    let mut list = use_signal(ListController::<JobComment>::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut events = use_signal(Vec::<Event>::new);
    let mut deletion = use_signal(DeleteFlow::default);
    let toasts = use_toasts();

    let scope = email.clone();
    let _loader = use_resource(move || {
        let scope = scope.clone();
        async move {
            let result = match scope {
                Some(email) => api::list_user_job_comments(email).await,
                None => api::list_job_comments().await,
            };
            match result {
                Ok(payload) => {
                    users.set(payload.users);
                    events.set(payload.events);
                    list.write().load(payload.job_comments);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load job comments");
                    list.write().fail_load();
                }
            }
        }
    });

    let on_confirm_delete = move |_: ()| {
        let Some(id) = deletion.write().confirm() else {
            return;
        };
        spawn(async move {
            let outcome = api::delete_job_comment(id.to_string()).await;
            if let Err(e) = &outcome {
                tracing::warn!(comment = %id, error = %e, "job comment delete failed");
            }
            let toast = list.write().apply_delete(&id, outcome);
            deletion.write().finish(&id);
            toasts.push(toast);
        });
    };

    let (rows, statuses, query, sort_options, view, panel, loading) = {
        let controller = list.read();
        let users = users.read();
        let events = events.read();
        let user_index = IdIndex::new(&users);
        let event_index = IdIndex::new(&events);

        let joined = |c: &JobComment| {
            let user = c
                .user_id
                .as_ref()
                .and_then(|id| user_index.get(id))
                .map(|u| u.display_name().to_string());
            let event = c
                .event_id
                .as_ref()
                .and_then(|id| event_index.get(id))
                .map(|e| e.display_name().to_string());
            (user, event)
        };

        let rows: Vec<CommentRow> = controller
            .projection_with(|c: &JobComment| {
                let (user, event) = joined(c);
                user.into_iter().chain(event).collect::<Vec<_>>()
            })
            .into_iter()
            .map(|comment| {
                let (user, event) = joined(&comment);
                CommentRow { comment, user, event }
            })
            .collect();

        (
            rows,
            distinct_values(controller.records().iter().map(|c| c.status.as_deref())),
            controller.query().to_string(),
            controller.sort_options(),
            controller.view(),
            controller.panel(),
            controller.is_loading(),
        )
    };

    let scoped = email.is_some();
    let title = match &email {
        Some(email) => format!("Job comments from {email}"),
        None => "Job Comments".to_string(),
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{title}" }
                    p { class: "page-description", "Comments left by contractors about their jobs" }
                }
            }

            ListToolbar {
                query: query.clone(),
                on_query: move |q: String| list.write().set_query(q),
                sort_options,
                on_sort: move |index: usize| list.write().toggle_sort_at(index),
                view,
                on_toggle_view: move |_: ()| list.write().toggle_view(),
                filter_options: statuses,
                collapsible: scoped,
                on_panel: move |p: Panel| list.write().toggle_panel(p),
                open_panel: panel,
            }

            if loading {
                div { class: "loading-state", "Loading job comments..." }
            } else if rows.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "✉" }
                    p { "No job comments found" }
                }
            } else if view == ViewMode::Grid {
                div { class: "card-grid",
                    for row in rows.iter().cloned() {
                        {
                            let id = row.comment.id.clone();
                            let label = preview(row.comment.text());
                            rsx! {
                                div { key: "{id}", class: "card record-card",
                                    div { class: "card-header",
                                        span { class: "card-kicker", {or_empty(row.comment.kind.as_deref())} }
                                        StatusBadge { status: row.comment.status.clone().unwrap_or_default() }
                                    }
                                    p { class: "comment-text", {row.comment.text()} }
                                    dl { class: "detail-list",
                                        if !scoped {
                                            dt { "From" }
                                            dd { {or_empty(row.user.as_deref())} }
                                        }
                                        dt { "Event" }
                                        dd { {or_empty(row.event.as_deref())} }
                                        dt { "Posted" }
                                        dd { {format_time(row.comment.created_at)} }
                                    }
                                    div { class: "card-actions",
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: move |_| deletion.write().request(id.clone(), label.clone()),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Comment" }
                                    th { "Type" }
                                    if !scoped {
                                        th { "From" }
                                    }
                                    th { "Event" }
                                    th { "Status" }
                                    th { "Posted" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for row in rows.iter().cloned() {
                                    {
                                        let id = row.comment.id.clone();
                                        let label = preview(row.comment.text());
                                        rsx! {
                                            tr { key: "{id}", class: "data-row",
                                                td { class: "comment-cell", {row.comment.text()} }
                                                td { {or_empty(row.comment.kind.as_deref())} }
                                                if !scoped {
                                                    td { {or_empty(row.user.as_deref())} }
                                                }
                                                td { {or_empty(row.event.as_deref())} }
                                                td { StatusBadge { status: row.comment.status.clone().unwrap_or_default() } }
                                                td { {format_time(row.comment.created_at)} }
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small btn-danger",
                                                        onclick: move |_| deletion.write().request(id.clone(), label.clone()),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(label) = deletion.read().pending_label().map(str::to_string) {
                ConfirmModal {
                    title: "Delete job comment".to_string(),
                    message: format!("Delete \"{label}\"? This cannot be undone."),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_: ()| deletion.write().cancel(),
                }
            }

            ToastStack { toasts }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_long_comments() {
        let long = "x".repeat(60);
        let shown = preview(&long);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), 41);
    }

    #[test]
    fn preview_keeps_short_and_names_empty() {
        assert_eq!(preview("Great crew"), "Great crew");
        assert_eq!(preview(""), "this comment");
    }
}
