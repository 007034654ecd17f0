//! Dalform Core - form validation for the Dal Overflow forum
//!
//! This crate holds the rules the forum client applies before a question or
//! a registration is submitted: Dalhousie email, password strength, question
//! title and description length, and tag count.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dalform-cli (CLI)             │
//! │   (files, stdin, config, exit codes)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (QuestionService, registration, input  │
//! │   guards for untyped JSON)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (field validators, rules, outcomes)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dalform_core::prelude::*;
//!
//! let form = QuestionForm::new("Short", "Too short", vec![]);
//! let outcome = validate_question_form(&form);
//!
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.errors().len(), 3);
//!
//! assert!(validate_dal_email("student@dal.ca"));
//! assert_eq!(
//!     password_errors(""),
//!     vec![PasswordRule::Required],
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        QuestionService, input, validate_question_edit_form, validate_question_form,
        validate_registration_form, validate_registration_value,
    };
    pub use crate::domain::{
        DescriptionMeasure, FieldError, FormField, FormValidationOutcome, PasswordRule,
        QuestionForm, QuestionRules, QuestionValidator, RegistrationForm, Tag, ValidationResult,
        ViolationKind, password_errors, text_content, validate_dal_email, validate_password,
        validate_question_description, validate_question_title, validate_tags,
    };
    pub use crate::error::{DalformError, DalformResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
