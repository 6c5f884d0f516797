// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::admin::pages::{CorrectionsPage, EventsPage, JobCommentsPage, NotificationsPage, UsersPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Admin routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/")]
        Home {},
        #[route("/admin")]
        AdminRedirect {},
        #[route("/admin/events")]
        AdminEvents {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/corrections")]
        AdminCorrections {},
        #[route("/admin/job-comments")]
        AdminJobComments {},
        #[route("/admin/notifications")]
        AdminNotifications {},

        // Per-user views, scoped by email
        #[route("/freelancer/:email/corrections")]
        FreelancerCorrections { email: String },
        #[route("/freelancer/:email/job-comments")]
        FreelancerJobComments { email: String },
        #[route("/freelancer/:email/notifications")]
        FreelancerNotifications { email: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Layout for admin routes with sidebar navigation.
#[component]
fn AdminLayout() -> Element {
    let nav = use_navigator();
    let mut signing_out = use_signal(|| false);

    let on_logout = move |_| {
        spawn(async move {
            signing_out.set(true);
            if let Err(e) = api::logout().await {
                tracing::warn!(error = %e, "logout failed");
            }
            signing_out.set(false);
            nav.replace(Route::Home {});
        });
    };

    rsx! {
        div { class: "admin-layout",
            // Sidebar navigation
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Crew Console" }
                }
                nav { class: "sidebar-nav",
                    div { class: "nav-section",
                        span { class: "nav-section-title", "Menu" }
                        Link {
                            to: Route::AdminEvents {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "▦" }
                            span { "Events" }
                        }
                        Link {
                            to: Route::AdminUsers {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "◎" }
                            span { "Users" }
                        }
                        Link {
                            to: Route::AdminCorrections {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "✎" }
                            span { "Corrections" }
                        }
                        Link {
                            to: Route::AdminJobComments {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "✉" }
                            span { "Job Comments" }
                        }
                        Link {
                            to: Route::AdminNotifications {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "◔" }
                            span { "Notifications" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "nav-link nav-link-muted",
                        disabled: signing_out(),
                        onclick: on_logout,
                        span { class: "nav-icon", "←" }
                        span { if signing_out() { "Signing out..." } else { "Log out" } }
                    }
                }
            }

            // Main content area
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Entry route; the console opens on the events list.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::AdminEvents {});
    });
    rsx! {}
}

/// Redirect /admin to /admin/events.
#[component]
fn AdminRedirect() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::AdminEvents {});
    });
    rsx! {}
}

#[component]
fn AdminEvents() -> Element {
    rsx! {
        EventsPage {}
    }
}

#[component]
fn AdminUsers() -> Element {
    rsx! {
        UsersPage {}
    }
}

#[component]
fn AdminCorrections() -> Element {
    rsx! {
        CorrectionsPage { email: None }
    }
}

#[component]
fn AdminJobComments() -> Element {
    rsx! {
        JobCommentsPage { email: None }
    }
}

#[component]
fn AdminNotifications() -> Element {
    rsx! {
        NotificationsPage { email: None }
    }
}

// The email key remounts the page, and so refetches, when the route's user changes.

#[component]
fn FreelancerCorrections(email: String) -> Element {
    rsx! {
        CorrectionsPage { key: "{email}", email: Some(email.clone()) }
    }
}

#[component]
fn FreelancerJobComments(email: String) -> Element {
    rsx! {
        JobCommentsPage { key: "{email}", email: Some(email.clone()) }
    }
}

#[component]
fn FreelancerNotifications(email: String) -> Element {
    rsx! {
        NotificationsPage { key: "{email}", email: Some(email.clone()) }
    }
}
