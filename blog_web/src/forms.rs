use serde::{Deserialize, Serialize};

/// Login submission. Carries input only, never persisted or rendered back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// HTML input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub value: String,
}

/// Shape of the login form, bound to [`Credentials`].
pub struct LoginType;

impl LoginType {
    pub const ACTION: &'static str = "/login";

    pub fn build_form(data: &Credentials) -> Vec<FormField> {
        vec![
            FormField {
                name: "username",
                kind: FieldKind::Text,
                label: "Email :",
                value: data.username.clone(),
            },
            FormField {
                name: "password",
                kind: FieldKind::Password,
                label: "Password :",
                // masked inputs are always rendered empty
                value: String::new(),
            },
        ]
    }
}
