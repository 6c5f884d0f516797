//! Transient toast notifications.

use console_core::{Toast, ToastKind};
use dioxus::prelude::*;

/// How long a toast stays on screen.
const TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Handle to a page's toast stack.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

/// Create the toast stack for a page.
pub fn use_toasts() -> Toasts {
    Toasts {
        entries: use_signal(Vec::new),
        next_id: use_signal(|| 0),
    }
}

impl Toasts {
    /// Show `toast` and schedule its removal.
    pub fn push(mut self, toast: Toast) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.entries.write().push(ToastEntry { id, toast });

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;

            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_TTL_MS as u64)).await;

            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.read().clone()
    }
}

/// Renders the toasts of a page in the corner of the screen.
#[component]
pub fn ToastStack(toasts: Toasts) -> Element {
    rsx! {
        div { class: "toast-stack",
            for entry in toasts.entries() {
                {
                    let kind_class = match entry.toast.kind {
                        ToastKind::Success => "toast-success",
                        ToastKind::Error => "toast-error",
                    };
                    let id = entry.id;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast {kind_class}",
                            span { "{entry.toast.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| toasts.dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
