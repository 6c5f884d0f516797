//! Confirmation modal for destructive actions.

use dioxus::prelude::*;

/// Props for ConfirmModal component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmModalProps {
    /// Modal title.
    pub title: String,
    /// What is about to happen.
    pub message: String,
    /// Label of the confirm button.
    #[props(default = "Delete".to_string())]
    pub confirm_label: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmModal(props: ConfirmModalProps) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| props.on_cancel.call(()),

            div { class: "modal",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "modal-title", "{props.title}" }
                p { class: "modal-message", "{props.message}" }

                div { class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| props.on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
