//! Corrections page - timesheet correction requests, for everyone or one user.

use console_core::{
    Correction, DeleteFlow, Event, IdIndex, ListController, Panel, User, ViewMode, distinct_values,
};
use dioxus::prelude::*;

use crate::admin::{
    ConfirmModal, ListToolbar, StatusBadge, ToastStack, format_time, or_empty, use_toasts,
};

/// A correction with its joined user and event names.
#[derive(Clone, PartialEq)]
struct CorrectionRow {
    correction: Correction,
    user: Option<String>,
    event: Option<String>,
}

/// Corrections page component. With `email` set, only that user's
/// corrections are shown and the toolbar folds into panels.
#[component]
pub fn CorrectionsPage(#[props(!optional)] email: Option<String>) -> Element {
    let mut list = use_signal(ListController::<Correction>::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut events = use_signal(Vec::<Event>::new);
    let mut deletion = use_signal(DeleteFlow::default);
    let toasts = use_toasts();

    let scope = email.clone();
    let _loader = use_resource(move || {
        let scope = scope.clone();
        async move {
            let result = match scope {
                Some(email) => api::list_user_corrections(email).await,
                None => api::list_corrections().await,
            };
            match result {
                Ok(payload) => {
                    users.set(payload.users);
                    events.set(payload.events);
                    list.write().load(payload.corrections);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load corrections");
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
            let outcome = api::delete_correction(id.to_string()).await;
            if let Err(e) = &outcome {
                tracing::warn!(correction = %id, error = %e, "correction delete failed");
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

        let joined = |c: &Correction| {
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

        let rows: Vec<CorrectionRow> = controller
            .projection_with(|c: &Correction| {
                let (user, event) = joined(c);
                user.into_iter().chain(event).collect::<Vec<_>>()
            })
            .into_iter()
            .map(|correction| {
                let (user, event) = joined(&correction);
                CorrectionRow {
                    correction,
                    user,
                    event,
                }
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
        Some(email) => format!("Corrections for {email}"),
        None => "Corrections".to_string(),
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{title}" }
                    p { class: "page-description", "Requests to correct recorded hours or details" }
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
                div { class: "loading-state", "Loading corrections..." }
            } else if rows.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "✎" }
                    p { "No corrections found" }
                }
            } else if view == ViewMode::Grid {
                div { class: "card-grid",
                    for row in rows.iter().cloned() {
                        {
                            let id = row.correction.id.clone();
                            let label = row.correction.display_name().to_string();
                            rsx! {
                                div { key: "{id}", class: "card record-card",
                                    div { class: "card-header",
                                        h2 { class: "card-title", "{label}" }
                                        StatusBadge { status: row.correction.status.clone().unwrap_or_default() }
                                    }
                                    dl { class: "detail-list",
                                        if !scoped {
                                            dt { "User" }
                                            dd { {or_empty(row.user.as_deref())} }
                                        }
                                        dt { "Event" }
                                        dd { {or_empty(row.event.as_deref())} }
                                        dt { "Type" }
                                        dd { {or_empty(row.correction.request_type.as_deref())} }
                                        dt { "Submitted" }
                                        dd { {format_time(row.correction.created_at)} }
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
                                    th { "Correction" }
                                    if !scoped {
                                        th { "User" }
                                    }
                                    th { "Event" }
                                    th { "Type" }
                                    th { "Status" }
                                    th { "Submitted" }
                                    th { "Updated" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for row in rows.iter().cloned() {
                                    {
                                        let id = row.correction.id.clone();
                                        let label = row.correction.display_name().to_string();
                                        rsx! {
                                            tr { key: "{id}", class: "data-row",
                                                td { "{label}" }
                                                if !scoped {
                                                    td { {or_empty(row.user.as_deref())} }
                                                }
                                                td { {or_empty(row.event.as_deref())} }
                                                td { {or_empty(row.correction.request_type.as_deref())} }
                                                td { StatusBadge { status: row.correction.status.clone().unwrap_or_default() } }
                                                td { {format_time(row.correction.created_at)} }
                                                td { {format_time(row.correction.updated_at)} }
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
                    title: "Delete correction".to_string(),
                    message: format!("Delete \"{label}\"? This cannot be undone."),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_: ()| deletion.write().cancel(),
                }
            }

            ToastStack { toasts }
        }
    }
}
