//! User records and the edit/create request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Identified, Listable, RecordId, SortField, SortValue};

/// A staff member or administrator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Hourly rate.
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub shirt_size: Option<String>,
    #[serde(default)]
    pub first_aid_cert: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Present until the user sets their own password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_password: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Activation status derived from the temporary password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatus {
    Pending,
    Active,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Pending => "Pending",
            UserStatus::Active => "Active",
        }
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Unknown user")
    }

    /// `Pending` while a non-empty temporary password is on record.
    pub fn status(&self) -> UserStatus {
        match self.temp_password.as_deref() {
            Some(password) if !password.is_empty() => UserStatus::Pending,
            _ => UserStatus::Active,
        }
    }

    /// Merge an accepted edit into this record.
    ///
    /// Submitted text fields replace the current value; an empty string
    /// clears it. The rate is always submitted, so `None` clears it too.
    pub fn apply(&mut self, update: &UserUpdate) {
        let UserUpdate {
            name,
            email,
            rate,
            address,
            phone,
            dob,
            shirt_size,
            first_aid_cert,
            allergies,
        } = update.clone();

        assign(&mut self.name, name);
        assign(&mut self.email, email);
        assign(&mut self.address, address);
        assign(&mut self.phone, phone);
        assign(&mut self.dob, dob);
        assign(&mut self.shirt_size, shirt_size);
        assign(&mut self.first_aid_cert, first_aid_cert);
        self.rate = rate;
        if let Some(allergies) = allergies {
            self.allergies = allergies;
        }
    }
}

fn assign(field: &mut Option<String>, submitted: Option<String>) {
    if let Some(value) = submitted {
        *field = (!value.is_empty()).then_some(value);
    }
}

impl Identified for User {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSortKey {
    Name,
    Email,
    Rate,
    Status,
    CreatedAt,
}

impl SortField for UserSortKey {
    const ALL: &'static [Self] = &[
        UserSortKey::Name,
        UserSortKey::Email,
        UserSortKey::Rate,
        UserSortKey::Status,
        UserSortKey::CreatedAt,
    ];

    fn label(self) -> &'static str {
        match self {
            UserSortKey::Name => "Name",
            UserSortKey::Email => "Email",
            UserSortKey::Rate => "Rate",
            UserSortKey::Status => "Status",
            UserSortKey::CreatedAt => "Created",
        }
    }
}

impl Listable for User {
    type SortKey = UserSortKey;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        [self.name.as_deref(), self.email.as_deref(), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.status().label()))
            .collect()
    }

    fn sort_value(&self, key: UserSortKey) -> SortValue<'_> {
        match key {
            UserSortKey::Name => self.name.as_deref().into(),
            UserSortKey::Email => self.email.as_deref().into(),
            UserSortKey::Rate => self.rate.into(),
            UserSortKey::Status => self.status().label().into(),
            UserSortKey::CreatedAt => self.created_at.into(),
        }
    }
}

/// Body of `PUT /update-user/{id}`.
///
/// The edit popup starts from the current record and submits every field.
/// An empty string clears a text field and a `null` rate clears the rate;
/// omitted fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aid_cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            rate: user.rate,
            address: user.address.clone(),
            phone: user.phone.clone(),
            dob: user.dob.clone(),
            shirt_size: user.shirt_size.clone(),
            first_aid_cert: user.first_aid_cert.clone(),
            allergies: Some(user.allergies.clone()),
        }
    }
}

impl UserUpdate {
    /// Split a comma separated allergy list typed into the edit form.
    pub fn parse_allergies(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body of `POST /create-user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_password_marks_user_pending() -> Result<(), serde_json::Error> {
        let pending: User = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "name": "Jo",
            "email": "jo@example.com",
            "tempPassword": "x7Yp2"
        }))?;
        assert_eq!(pending.status(), UserStatus::Pending);
        assert_eq!(pending.status().label(), "Pending");

        let active: User = serde_json::from_value(serde_json::json!({
            "_id": "u2",
            "name": "Sam",
            "rate": 27.5
        }))?;
        assert_eq!(active.status(), UserStatus::Active);
        assert_eq!(active.status().label(), "Active");
        Ok(())
    }

    #[test]
    fn empty_temp_password_is_active() {
        let user = User {
            temp_password: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn edit_prefills_and_merges_back() {
        let mut user = User {
            id: RecordId::from("u1"),
            name: Some("Jo".to_string()),
            email: Some("jo@example.com".to_string()),
            rate: Some(20.0),
            allergies: vec!["nuts".to_string()],
            ..Default::default()
        };

        let mut update = UserUpdate::from(&user);
        assert_eq!(update.name.as_deref(), Some("Jo"));
        update.rate = Some(24.0);
        update.allergies = Some(UserUpdate::parse_allergies("nuts, shellfish, "));
        update.email = None;

        user.apply(&update);
        assert_eq!(user.rate, Some(24.0));
        assert_eq!(user.email.as_deref(), Some("jo@example.com"));
        assert_eq!(user.allergies, vec!["nuts", "shellfish"]);
    }

    #[test]
    fn update_body_skips_unset_fields() -> Result<(), serde_json::Error> {
        let update = UserUpdate {
            shirt_size: Some("M".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update)?,
            serde_json::json!({ "shirtSize": "M", "rate": null })
        );
        Ok(())
    }

    #[test]
    fn cleared_fields_are_sent_and_merged() -> Result<(), serde_json::Error> {
        let mut user = User {
            id: RecordId::from("u1"),
            name: Some("Jo".to_string()),
            phone: Some("555-0100".to_string()),
            rate: Some(20.0),
            ..Default::default()
        };

        let mut update = UserUpdate::from(&user);
        update.phone = Some(String::new());
        update.rate = None;

        let body = serde_json::to_value(&update)?;
        assert_eq!(body["phone"], serde_json::json!(""));
        assert_eq!(body["rate"], serde_json::Value::Null);

        user.apply(&update);
        assert_eq!(user.phone, None);
        assert_eq!(user.rate, None);
        assert_eq!(user.name.as_deref(), Some("Jo"));
        Ok(())
    }

    #[test]
    fn search_includes_status_label() {
        let user = User {
            name: Some("Jo".to_string()),
            temp_password: Some("tmp".to_string()),
            ..Default::default()
        };
        assert!(crate::matches_query(user.search_fields(), "pend"));
    }
}
