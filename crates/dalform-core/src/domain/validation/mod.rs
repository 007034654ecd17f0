//! Field validators.
//!
//! Each validator is a pure function of its one field. None of them read
//! another field's value or result, which is what lets the form services
//! run all of them unconditionally.

mod account;
mod question;

pub use account::{password_errors, validate_dal_email, validate_password};
pub use question::{
    QuestionValidator, validate_question_description, validate_question_title, validate_tags,
};
