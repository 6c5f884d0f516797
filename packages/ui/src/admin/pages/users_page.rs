//! Users page - staff directory with edit, invite and delete actions.

use console_core::{DeleteFlow, ListController, RecordId, Toast, User, UserStatus, ViewMode};
use dioxus::prelude::*;

use crate::admin::{
    ConfirmModal, CreateUserForm, ListToolbar, ToastStack, UserEditForm, UserStatusBadge,
    format_rate, format_time, or_empty, use_toasts,
};

/// Users page component.
#[component]
pub fn UsersPage() -> Element {
    let mut list = use_signal(ListController::<User>::new);
    let mut deletion = use_signal(DeleteFlow::default);
    let mut editing = use_signal(|| None::<User>);
    let mut show_create = use_signal(|| false);
    let toasts = use_toasts();

    let _loader = use_resource(move || async move {
        match api::list_users().await {
            Ok(users) => list.write().load(users),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load users");
                list.write().fail_load();
            }
        }
    });

    let on_confirm_delete = move |_: ()| {
        let Some(id) = deletion.write().confirm() else {
            return;
        };
        spawn(async move {
            let outcome = api::delete_user(id.to_string()).await;
            if let Err(e) = &outcome {
                tracing::warn!(user = %id, error = %e, "user delete failed");
            }
            let toast = list.write().apply_delete(&id, outcome);
            deletion.write().finish(&id);
            toasts.push(toast);
        });
    };

    let on_resend = move |id: RecordId| {
        spawn(async move {
            match api::resend_email(id.to_string()).await {
                Ok(()) => toasts.push(Toast::success("Activation email sent")),
                Err(e) => {
                    tracing::warn!(user = %id, error = %e, "resend email failed");
                    toasts.push(Toast::failure());
                }
            }
        });
    };

    let (users, query, sort_options, view, loading, total, pending) = {
        let controller = list.read();
        (
            controller.projection(),
            controller.query().to_string(),
            controller.sort_options(),
            controller.view(),
            controller.is_loading(),
            controller.len(),
            controller
                .records()
                .iter()
                .filter(|u| u.status() == UserStatus::Pending)
                .count(),
        )
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-description", "Manage contractors and their details" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create.toggle(),
                    if show_create() { "Close" } else { "Add User" }
                }
            }

            div { class: "stats-grid",
                div { class: "stat-card",
                    div { class: "stat-card-value", "{total}" }
                    div { class: "stat-card-label", "Total Users" }
                }
                div { class: "stat-card stat-card-accent",
                    div { class: "stat-card-value", "{pending}" }
                    div { class: "stat-card-label", "Pending Activation" }
                }
            }

            if show_create() {
                CreateUserForm {
                    on_created: move |user: User| {
                        list.write().upsert(user);
                        show_create.set(false);
                        toasts.push(Toast::success("User created"));
                    },
                    on_cancel: move |_: ()| show_create.set(false),
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
                div { class: "loading-state", "Loading users..." }
            } else if users.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "◎" }
                    p { "No users found" }
                    if !query.is_empty() {
                        p { class: "hint", "Try a different search" }
                    }
                }
            } else if view == ViewMode::Grid {
                div { class: "card-grid",
                    for user in users.iter().cloned() {
                        {
                            let id = user.id.clone();
                            let label = user.display_name().to_string();
                            let status = user.status();
                            let user_for_edit = user.clone();
                            let id_for_resend = id.clone();
                            rsx! {
                                div { key: "{id}", class: "card record-card",
                                    div { class: "card-header",
                                        h2 { class: "card-title", "{label}" }
                                        UserStatusBadge { status }
                                    }
                                    dl { class: "detail-list",
                                        dt { "Email" }
                                        dd { {or_empty(user.email.as_deref())} }
                                        dt { "Phone" }
                                        dd { {or_empty(user.phone.as_deref())} }
                                        dt { "Rate" }
                                        dd { {format_rate(user.rate)} }
                                        dt { "Shirt size" }
                                        dd { {or_empty(user.shirt_size.as_deref())} }
                                        dt { "First aid" }
                                        dd { {or_empty(user.first_aid_cert.as_deref())} }
                                        if !user.allergies.is_empty() {
                                            dt { "Allergies" }
                                            dd { {user.allergies.join(", ")} }
                                        }
                                    }
                                    div { class: "card-actions",
                                        button {
                                            class: "btn btn-small",
                                            onclick: move |_| editing.set(Some(user_for_edit.clone())),
                                            "Edit"
                                        }
                                        if status == UserStatus::Pending {
                                            button {
                                                class: "btn btn-small btn-secondary",
                                                onclick: move |_| on_resend(id_for_resend.clone()),
                                                "Resend email"
                                            }
                                        }
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
                                    th { "Email" }
                                    th { class: "text-right", "Rate" }
                                    th { "Status" }
                                    th { "Created" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for user in users.iter().cloned() {
                                    {
                                        let id = user.id.clone();
                                        let label = user.display_name().to_string();
                                        let status = user.status();
                                        let user_for_edit = user.clone();
                                        let id_for_resend = id.clone();
                                        rsx! {
                                            tr { key: "{id}", class: "data-row",
                                                td { "{label}" }
                                                td { {or_empty(user.email.as_deref())} }
                                                td { class: "text-right tabular-nums", {format_rate(user.rate)} }
                                                td { UserStatusBadge { status } }
                                                td { {format_time(user.created_at)} }
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| editing.set(Some(user_for_edit.clone())),
                                                        "Edit"
                                                    }
                                                    if status == UserStatus::Pending {
                                                        button {
                                                            class: "btn btn-small btn-secondary",
                                                            onclick: move |_| on_resend(id_for_resend.clone()),
                                                            "Resend"
                                                        }
                                                    }
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

            if let Some(user) = editing() {
                UserEditForm {
                    user,
                    on_saved: move |saved: User| {
                        list.write().upsert(saved);
                        editing.set(None);
                        toasts.push(Toast::success("User updated"));
                    },
                    on_failed: move |toast: Toast| toasts.push(toast),
                    on_cancel: move |_: ()| editing.set(None),
                }
            }

            if let Some(label) = deletion.read().pending_label().map(str::to_string) {
                ConfirmModal {
                    title: "Delete user".to_string(),
                    message: format!("Delete \"{label}\"? Their login will stop working."),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_: ()| deletion.write().cancel(),
                }
            }

            ToastStack { toasts }
        }
    }
}
