// ============================================================================
// domain/error.rs - FIELD VIOLATIONS
// ============================================================================

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::rules::{PASSWORD_MIN_LENGTH, PASSWORD_SYMBOLS};

/// Why a single form field was rejected.
///
/// The `Display` text is the exact message shown next to the field in the
/// forum client, so these strings are part of the public contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    // ========================================================================
    // Question title
    // ========================================================================
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at least {min} characters")]
    TitleTooShort { min: usize },

    #[error("Title must not exceed {max} characters")]
    TitleTooLong { max: usize },

    // ========================================================================
    // Question description
    // ========================================================================
    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },

    // ========================================================================
    // Tags
    // ========================================================================
    #[error("Tags must be an array")]
    TagsNotAList,

    #[error("Please select at least one tag")]
    NoTags,

    #[error("Maximum {max} tags allowed")]
    TooManyTags { max: usize },

    #[error("Duplicate tags are not allowed")]
    DuplicateTags,

    // ========================================================================
    // Registration
    // ========================================================================
    #[error("Please use a valid Dalhousie email address (@dal.ca)")]
    NotDalEmail,

    #[error(
        "Password must be at least 8 characters with 1 uppercase, 1 lowercase, 1 number, and 1 symbol"
    )]
    WeakPassword,
}

impl FieldError {
    /// Which class of violation this is, for styling and reporting.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::TitleRequired | Self::DescriptionRequired | Self::NoTags => {
                ViolationKind::Missing
            }
            Self::TagsNotAList => ViolationKind::WrongType,
            Self::TitleTooShort { .. } | Self::DescriptionTooShort { .. } => {
                ViolationKind::BelowMinimum
            }
            Self::TitleTooLong { .. } | Self::TooManyTags { .. } => ViolationKind::AboveMaximum,
            Self::DuplicateTags => ViolationKind::Repeated,
            Self::NotDalEmail | Self::WeakPassword => ViolationKind::MarkerAbsent,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One unmet password requirement.
///
/// [`password_errors`](crate::domain::password_errors) reports these in the
/// order of [`PasswordRule::CHECKED`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    #[error("Password is required")]
    Required,

    #[error("Password must be at least 8 characters")]
    MinLength,

    #[error("Password must contain at least one lowercase letter")]
    Lowercase,

    #[error("Password must contain at least one uppercase letter")]
    Uppercase,

    #[error("Password must contain at least one number")]
    Digit,

    #[error("Password must contain at least one symbol (@$!%*?&#)")]
    Symbol,
}

impl PasswordRule {
    /// Rules checked against a non-empty password, in reporting order.
    pub const CHECKED: [Self; 5] = [
        Self::MinLength,
        Self::Lowercase,
        Self::Uppercase,
        Self::Digit,
        Self::Symbol,
    ];

    /// Whether `password` meets this rule.
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::Required => !password.is_empty(),
            Self::MinLength => password.chars().count() >= PASSWORD_MIN_LENGTH,
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Symbol => password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)),
        }
    }

    pub fn kind(self) -> ViolationKind {
        match self {
            Self::Required => ViolationKind::Missing,
            Self::MinLength => ViolationKind::BelowMinimum,
            _ => ViolationKind::MarkerAbsent,
        }
    }
}

impl Serialize for PasswordRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Violation classes shared by every validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Nothing usable was submitted.
    Missing,
    /// The value had the wrong shape (e.g. a string where a list belongs).
    WrongType,
    BelowMinimum,
    AboveMaximum,
    /// Required content (domain suffix, character class) is absent.
    MarkerAbsent,
    /// A value that must be unique appears more than once.
    Repeated,
}
