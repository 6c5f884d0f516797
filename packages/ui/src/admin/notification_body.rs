//! Inline rendering of a notification's text and links.

use console_core::{Notification, NotificationSegment};
use dioxus::prelude::*;

#[component]
pub fn NotificationBody(notification: Notification) -> Element {
    rsx! {
        p { class: "notification-body",
            for (index, segment) in notification.segments().into_iter().enumerate() {
                {
                    match segment {
                        NotificationSegment::Text(text) => rsx! {
                            span { key: "{index}", "{text} " }
                        },
                        NotificationSegment::Link { href, label } => rsx! {
                            a {
                                key: "{index}",
                                class: "notification-link",
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{label}"
                            }
                        },
                    }
                }
            }
        }
    }
}
