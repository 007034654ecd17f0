// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Dalform.
//!
//! Pure validation rules with no I/O and no shared state. Every function
//! here borrows its input, returns a fresh value, and can be called from
//! any number of threads at once.
//!
//! ## Layout
//!
//! - `rules`: bounds and literals (`@dal.ca`, 15..=150, `<p><br></p>`, ...)
//! - `validation`: one validator per field
//! - `markup`: text content of editor HTML, for edit-form measuring
//! - `outcome`: [`ValidationResult`] and [`FormValidationOutcome`]
//! - `error`: the user-facing messages ([`FieldError`], [`PasswordRule`])
//! - `value_objects`: form payloads and field names

pub mod error;
pub mod markup;
pub mod outcome;
pub mod rules;
pub mod validation;
pub mod value_objects;

pub use error::{FieldError, PasswordRule, ViolationKind};
pub use outcome::{FormValidationOutcome, ValidationResult};
pub use markup::text_content;
pub use rules::{DescriptionMeasure, QuestionRules};
pub use validation::{
    QuestionValidator, password_errors, validate_dal_email, validate_password,
    validate_question_description, validate_question_title, validate_tags,
};
pub use value_objects::{FormField, QuestionForm, RegistrationForm, Tag};
