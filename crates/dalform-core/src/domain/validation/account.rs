//! Registration field rules: Dalhousie email and password strength.

use crate::domain::{error::PasswordRule, rules::DAL_EMAIL_SUFFIX};

/// `true` when `email` is non-empty and ends with exactly `@dal.ca`.
///
/// No trimming and no case folding: `"a@DAL.CA"` and `" a@dal.ca "` both fail.
pub fn validate_dal_email(email: &str) -> bool {
    !email.is_empty() && email.ends_with(DAL_EMAIL_SUFFIX)
}

/// `true` when `password` meets every [`PasswordRule::CHECKED`] rule.
pub fn validate_password(password: &str) -> bool {
    !password.is_empty() && password_errors(password).is_empty()
}

/// Every unmet password rule, in [`PasswordRule::CHECKED`] order.
///
/// An empty password yields only [`PasswordRule::Required`]; the other rules
/// are not reported alongside it.
pub fn password_errors(password: &str) -> Vec<PasswordRule> {
    if password.is_empty() {
        return vec![PasswordRule::Required];
    }

    PasswordRule::CHECKED
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect()
}
