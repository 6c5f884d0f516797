//! Events list page - every event with its assigned contractors.

use console_core::{DeleteFlow, Event, IdIndex, ListController, User, ViewMode, resolve_names};
use dioxus::prelude::*;

use crate::admin::{ConfirmModal, ListToolbar, ToastStack, format_hours, format_time, use_toasts};

/// Events list page component.
#[component]
pub fn EventsPage() -> Element {
    let mut list = use_signal(ListController::<Event>::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut deletion = use_signal(DeleteFlow::default);
    let toasts = use_toasts();

    // Load events once on mount
    let _loader = use_resource(move || async move {
        match api::list_events().await {
            Ok(payload) => {
                users.set(payload.users);
                list.write().load(payload.events);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load events");
                list.write().fail_load();
            }
        }
    });

    let on_confirm_delete = move |_: ()| {
        let Some(id) = deletion.write().confirm() else {
            return;
        };
        spawn(async move {
            let outcome = api::delete_event(id.to_string()).await;
            if let Err(e) = &outcome {
                tracing::warn!(event = %id, error = %e, "event delete failed");
            }
            let toast = list.write().apply_delete(&id, outcome);
            deletion.write().finish(&id);
            toasts.push(toast);
        });
    };

    // Each row carries its contractor names, resolved through the user index
    let (rows, query, sort_options, view, loading, total) = {
        let controller = list.read();
        let users = users.read();
        let index = IdIndex::new(&users);
        let contractor_names =
            |event: &Event| resolve_names(&event.contractors, &index, |u: &User| u.display_name().to_string());

        let rows: Vec<(Event, Vec<String>)> = controller
            .projection_with(contractor_names)
            .into_iter()
            .map(|event| {
                let names = contractor_names(&event);
                (event, names)
            })
            .collect();

        (
            rows,
            controller.query().to_string(),
            controller.sort_options(),
            controller.view(),
            controller.is_loading(),
            controller.len(),
        )
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Events" }
                    p { class: "page-description", "{total} events scheduled" }
                }
            }

            ListToolbar {
                query: query.clone(),
                on_query: move |q: String| list.write().set_query(q),
                sort_options,
                on_sort: move |index: usize| list.write().toggle_sort_at(index),
                view,
                on_toggle_view: move |_: ()| list.write().toggle_view(),
            }

            if loading {
                div { class: "loading-state", "Loading events..." }
            } else if rows.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "▦" }
                    p { "No events found" }
                    if !query.is_empty() {
                        p { class: "hint", "Try a different search" }
                    }
                }
            } else if view == ViewMode::Grid {
                div { class: "card-grid",
                    for (event, names) in rows.iter().cloned() {
                        {
                            let id = event.id.clone();
                            let label = event.display_name().to_string();
                            rsx! {
                                div { key: "{id}", class: "card record-card",
                                    div { class: "card-header",
                                        h2 { class: "card-title", "{label}" }
                                    }
                                    dl { class: "detail-list",
                                        dt { "Load in" }
                                        dd { {format_time(event.load_in)} }
                                        dt { "Load out" }
                                        dd { {format_time(event.load_out)} }
                                        dt { "Hours" }
                                        dd { {format_hours(event.total_hours())} }
                                        dt { "Contractors" }
                                        dd {
                                            if names.is_empty() { "None assigned" } else { {names.join(", ")} }
                                        }
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
                                    th { "Name" }
                                    th { "Load in" }
                                    th { "Load out" }
                                    th { class: "text-right", "Hours" }
                                    th { "Contractors" }
                                    th { "Created" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for (event, names) in rows.iter().cloned() {
                                    {
                                        let id = event.id.clone();
                                        let label = event.display_name().to_string();
                                        rsx! {
                                            tr { key: "{id}", class: "data-row",
                                                td { "{label}" }
                                                td { {format_time(event.load_in)} }
                                                td { {format_time(event.load_out)} }
                                                td { class: "text-right tabular-nums", {format_hours(event.total_hours())} }
                                                td { {names.join(", ")} }
                                                td { {format_time(event.created_at)} }
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
                    title: "Delete event".to_string(),
                    message: format!("Delete \"{label}\"? This cannot be undone."),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_: ()| deletion.write().cancel(),
                }
            }

            if deletion.read().is_in_flight() {
                div { class: "busy-indicator", "Deleting..." }
            }

            ToastStack { toasts }
        }
    }
}
