//! User edit and create forms.

use console_core::{NewUser, Toast, User, UserUpdate};
use dioxus::prelude::*;

/// A submitted text field; an emptied input clears the value.
fn submitted(text: String) -> Option<String> {
    Some(text.trim().to_string())
}

/// Parse an hourly rate field; empty means no rate.
fn parse_rate(text: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate >= 0.0 => Ok(Some(rate)),
        _ => Err(format!("Invalid rate: {trimmed}")),
    }
}

/// Props for UserEditForm component.
#[derive(Props, Clone, PartialEq)]
pub struct UserEditFormProps {
    /// The user being edited; fields start from its current values.
    pub user: User,
    /// Called with the merged record once the backend accepts the edit.
    pub on_saved: EventHandler<User>,
    /// Called with the toast to show when the update fails.
    pub on_failed: EventHandler<Toast>,
    pub on_cancel: EventHandler<()>,
}

/// Popup form for editing a user.
#[component]
pub fn UserEditForm(props: UserEditFormProps) -> Element {
    let initial = UserUpdate::from(&props.user);

    let mut name = use_signal(|| initial.name.clone().unwrap_or_default());
    let mut email = use_signal(|| initial.email.clone().unwrap_or_default());
    let mut rate = use_signal(|| initial.rate.map(|r| r.to_string()).unwrap_or_default());
    let mut address = use_signal(|| initial.address.clone().unwrap_or_default());
    let mut phone = use_signal(|| initial.phone.clone().unwrap_or_default());
    let mut dob = use_signal(|| initial.dob.clone().unwrap_or_default());
    let mut shirt_size = use_signal(|| initial.shirt_size.clone().unwrap_or_default());
    let mut first_aid_cert = use_signal(|| initial.first_aid_cert.clone().unwrap_or_default());
    let mut allergies = use_signal(|| initial.allergies.clone().unwrap_or_default().join(", "));
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let user = props.user.clone();

    let submit = move |_| {
        let mut user = user.clone();

        let rate_val = match parse_rate(&rate()) {
            Ok(rate) => rate,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        let update = UserUpdate {
            name: submitted(name()),
            email: submitted(email()),
            rate: rate_val,
            address: submitted(address()),
            phone: submitted(phone()),
            dob: submitted(dob()),
            shirt_size: submitted(shirt_size()),
            first_aid_cert: submitted(first_aid_cert()),
            allergies: Some(UserUpdate::parse_allergies(&allergies())),
        };

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::update_user(user.id.to_string(), update.clone()).await {
                Ok(()) => {
                    user.apply(&update);
                    props.on_saved.call(user);
                }
                Err(e) => {
                    tracing::warn!(user = %user.id, error = %e, "user update failed");
                    props.on_failed.call(Toast::failure());
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| props.on_cancel.call(()),

            div { class: "modal user-form",
                onclick: move |e| e.stop_propagation(),

                h3 { "Edit User" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-grid",
                    div { class: "form-group",
                        label { "Name" }
                        input { value: "{name}", oninput: move |e| name.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Email" }
                        input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Rate" }
                        input { inputmode: "decimal", value: "{rate}", oninput: move |e| rate.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Phone" }
                        input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Address" }
                        input { value: "{address}", oninput: move |e| address.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Date of birth" }
                        input { value: "{dob}", oninput: move |e| dob.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "Shirt size" }
                        input { value: "{shirt_size}", oninput: move |e| shirt_size.set(e.value()) }
                    }
                    div { class: "form-group",
                        label { "First aid certificate" }
                        input { value: "{first_aid_cert}", oninput: move |e| first_aid_cert.set(e.value()) }
                    }
                    div { class: "form-group form-group-wide",
                        label { "Allergies (comma separated)" }
                        textarea {
                            rows: 2,
                            value: "{allergies}",
                            oninput: move |e| allergies.set(e.value()),
                        }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Saving..." } else { "Save" }
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

/// Props for CreateUserForm component.
#[derive(Props, Clone, PartialEq)]
pub struct CreateUserFormProps {
    /// Callback with the user the backend created.
    pub on_created: EventHandler<User>,
    /// Callback when form is cancelled.
    pub on_cancel: EventHandler<()>,
}

/// Form component for inviting a new user.
#[component]
pub fn CreateUserForm(props: CreateUserFormProps) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut rate = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let rate_val = match parse_rate(&rate()) {
            Ok(rate) => rate,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        let request = NewUser {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            rate: rate_val,
        };

        if request.name.is_empty() || request.email.is_empty() {
            error.set(Some("Name and email are required".to_string()));
            return;
        }

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api::create_user(request).await {
                Ok(user) => {
                    props.on_created.call(user);
                }
                Err(e) => {
                    error.set(Some(format!("Failed to create user: {}", e)));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "create-user-form card",
            h3 { "Add User" }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            div { class: "form-group",
                label { "Name" }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
            }

            div { class: "form-group",
                label { "Email" }
                input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }
            }

            div { class: "form-group",
                label { "Rate (optional)" }
                input { inputmode: "decimal", value: "{rate}", oninput: move |e| rate.set(e.value()) }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Creating..." } else { "Create User" }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_parsing() {
        assert_eq!(parse_rate(""), Ok(None));
        assert_eq!(parse_rate(" 42.5 "), Ok(Some(42.5)));
        assert!(parse_rate("abc").is_err());
    }

    #[test]
    fn rate_rejects_non_finite_and_negative() {
        assert!(parse_rate("NaN").is_err());
        assert!(parse_rate("inf").is_err());
        assert!(parse_rate("-5").is_err());
        assert_eq!(parse_rate("0"), Ok(Some(0.0)));
    }

    #[test]
    fn emptied_fields_are_still_submitted() {
        assert_eq!(submitted("  ".to_string()), Some(String::new()));
        assert_eq!(submitted(" Ann ".to_string()), Some("Ann".to_string()));
    }
}
