//! Registration Service - whole-form validation for account sign-up.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::input,
    domain::{
        FieldError, FormField, FormValidationOutcome, RegistrationForm, ValidationResult,
        validate_dal_email, validate_password,
    },
};

/// Validate a typed registration form.
///
/// Email and password are both checked, whatever the other one's outcome.
#[instrument(skip_all)]
pub fn validate_registration_form(form: &RegistrationForm) -> FormValidationOutcome {
    merge(
        validate_dal_email(&form.email),
        validate_password(&form.password),
    )
}

/// Validate an untyped registration payload through the input guards.
#[instrument(skip_all)]
pub fn validate_registration_value(payload: &Value) -> FormValidationOutcome {
    merge(
        input::dal_email(input::field(payload, "email")),
        input::password(input::field(payload, "password")),
    )
}

fn merge(email_ok: bool, password_ok: bool) -> FormValidationOutcome {
    let outcome = FormValidationOutcome::from_fields([
        (FormField::Email, check(email_ok, FieldError::NotDalEmail)),
        (FormField::Password, check(password_ok, FieldError::WeakPassword)),
    ]);
    debug!(
        valid = outcome.is_valid(),
        failed = ?outcome.failed_fields().collect::<Vec<_>>(),
        "Registration form validated"
    );
    outcome
}

fn check(passed: bool, error: FieldError) -> ValidationResult {
    if passed {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(error)
    }
}
