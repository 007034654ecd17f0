//! Application services - orchestrate use cases.
//!
//! Services compose the domain's field validators into whole-form passes
//! like "validate this question" or "validate this sign-up".

pub mod question_service;
pub mod registration_service;

pub use question_service::{QuestionService, validate_question_edit_form, validate_question_form};
pub use registration_service::{validate_registration_form, validate_registration_value};
