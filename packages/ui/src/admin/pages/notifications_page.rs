//! Notifications page - messages sent to admins or to one user.

use console_core::{ListController, Notification, Panel, ViewMode};
use dioxus::prelude::*;

use crate::admin::{ListToolbar, NotificationBody, format_time};

/// Notifications page component.
#[component]
pub fn NotificationsPage(#[props(!optional)] email: Option<String>) -> Element {
    let mut list = use_signal(ListController::<Notification>::new);

    let scope = email.clone();
    let _loader = use_resource(move || {
        let scope = scope.clone();
        async move {
            let result = match scope {
                Some(email) => api::list_user_notifications(email).await,
                None => api::list_admin_notifications().await,
            };
            match result {
                Ok(notifications) => list.write().load(notifications),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load notifications");
                    list.write().fail_load();
                }
            }
        }
    });

    let (notifications, query, sort_options, view, panel, loading) = {
        let controller = list.read();
        (
            controller.projection(),
            controller.query().to_string(),
            controller.sort_options(),
            controller.view(),
            controller.panel(),
            controller.is_loading(),
        )
    };

    let scoped = email.is_some();
    let title = match &email {
        Some(email) => format!("Notifications for {email}"),
        None => "Notifications".to_string(),
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{title}" }
                }
            }

            ListToolbar {
                query: query.clone(),
                on_query: move |q: String| list.write().set_query(q),
                sort_options,
                on_sort: move |index: usize| list.write().toggle_sort_at(index),
                view,
                on_toggle_view: move |_: ()| list.write().toggle_view(),
                collapsible: scoped,
                on_panel: move |p: Panel| list.write().toggle_panel(p),
                open_panel: panel,
            }

            if loading {
                div { class: "loading-state", "Loading notifications..." }
            } else if notifications.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "◔" }
                    p { "No notifications" }
                }
            } else if view == ViewMode::Grid {
                div { class: "card-grid",
                    for notification in notifications.iter().cloned() {
                        div { key: "{notification.id}", class: "card record-card",
                            div { class: "card-header",
                                h2 { class: "card-title", {notification.display_subject()} }
                                span { class: "card-meta", {format_time(notification.created_at)} }
                            }
                            NotificationBody { notification: notification.clone() }
                        }
                    }
                }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Subject" }
                                    th { "Message" }
                                    th { "Sent" }
                                }
                            }
                            tbody {
                                for notification in notifications.iter().cloned() {
                                    tr { key: "{notification.id}", class: "data-row",
                                        td { {notification.display_subject()} }
                                        td { NotificationBody { notification: notification.clone() } }
                                        td { {format_time(notification.created_at)} }
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
