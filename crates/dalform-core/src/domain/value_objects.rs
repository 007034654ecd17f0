//! Domain value objects: form payloads and field names.
//!
//! These are plain data carriers. Validators borrow them and never mutate
//! them; nothing here has identity beyond its values.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── FormField ────────────────────────────────────────────────────────────────

/// Name of a validated field, as used for keys in error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Description,
    Tags,
    Email,
    Password,
}

impl FormField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tag ──────────────────────────────────────────────────────────────────────

/// A category label attached to a question.
///
/// Validation only counts tags; the fields are carried for callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Tag {
    pub fn new(id: u64) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

// ── Forms ────────────────────────────────────────────────────────────────────

/// Payload of the create/edit question form.
///
/// `description` is the rich-text editor's HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl QuestionForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
        }
    }
}

/// Payload of the registration form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegistrationForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
