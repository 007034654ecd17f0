//! Application layer for Dalform.
//!
//! This layer contains:
//! - **Services**: form aggregation (QuestionService, registration checks)
//! - **Input**: runtime type guards for untyped JSON payloads
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. Every bound and message lives in `crate::domain`.

pub mod input;
pub mod services;

// Re-export main services
pub use services::{
    QuestionService, validate_question_edit_form, validate_question_form, validate_registration_form,
    validate_registration_value,
};
