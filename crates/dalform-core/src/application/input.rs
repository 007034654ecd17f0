//! Runtime type guards for untyped payloads.
//!
//! Form handlers receive JSON, where a "title" may turn out to be `null`, a
//! number or missing altogether. These guards check the shape first and map
//! anything that is not the expected type to the field's designated invalid
//! result; only well-typed values reach the domain validators.

use serde_json::Value;

use crate::{
    domain::{FieldError, PasswordRule, QuestionValidator, ValidationResult, validation},
    error::DalformResult,
};

/// Parse payload text into an untyped JSON value.
pub fn parse_payload(text: &str) -> DalformResult<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Look up `key` on an object; anything else (including non-objects) is `null`.
pub(crate) fn field<'a>(payload: &'a Value, key: &str) -> &'a Value {
    &payload[key]
}

/// Non-strings are never Dal emails.
pub fn dal_email(value: &Value) -> bool {
    value.as_str().is_some_and(validation::validate_dal_email)
}

/// Non-strings are never strong passwords.
pub fn password(value: &Value) -> bool {
    value.as_str().is_some_and(validation::validate_password)
}

/// Non-strings are treated as an absent password.
pub fn password_errors(value: &Value) -> Vec<PasswordRule> {
    match value.as_str() {
        Some(password) => validation::password_errors(password),
        None => vec![PasswordRule::Required],
    }
}

pub fn question_title(value: &Value) -> ValidationResult {
    question_title_with(&QuestionValidator::default(), value)
}

pub fn question_description(value: &Value) -> ValidationResult {
    question_description_with(&QuestionValidator::default(), value)
}

pub fn tags(value: &Value) -> ValidationResult {
    tags_with(&QuestionValidator::default(), value)
}

pub(crate) fn question_title_with(validator: &QuestionValidator, value: &Value) -> ValidationResult {
    match value.as_str() {
        Some(title) => validator.title(title),
        None => ValidationResult::invalid(FieldError::TitleRequired),
    }
}

pub(crate) fn question_description_with(
    validator: &QuestionValidator,
    value: &Value,
) -> ValidationResult {
    match value.as_str() {
        Some(description) => validator.description(description),
        None => ValidationResult::invalid(FieldError::DescriptionRequired),
    }
}

pub(crate) fn tags_with(validator: &QuestionValidator, value: &Value) -> ValidationResult {
    match value.as_array() {
        Some(tags) => {
            // Tags arrive as `{id, name}` objects or as bare ids.
            let ids: Vec<&Value> = tags.iter().map(|tag| tag.get("id").unwrap_or(tag)).collect();
            validator.tag_ids(&ids)
        }
        None => ValidationResult::invalid(FieldError::TagsNotAList),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_strings_are_not_emails() {
        assert!(dal_email(&json!("student@dal.ca")));
        assert!(!dal_email(&Value::Null));
        assert!(!dal_email(&json!(123)));
        assert!(!dal_email(&json!(["a@dal.ca"])));
    }

    #[test]
    fn non_strings_are_not_passwords() {
        assert!(password(&json!("Test1234!")));
        assert!(!password(&Value::Null));
        assert!(!password(&json!(12345678)));
    }

    #[test]
    fn absent_password_is_required() {
        assert_eq!(password_errors(&Value::Null), vec![PasswordRule::Required]);
        assert_eq!(password_errors(&json!(false)), vec![PasswordRule::Required]);
        assert_eq!(password_errors(&json!("")), vec![PasswordRule::Required]);
    }

    #[test]
    fn wrong_typed_text_fields_are_required() {
        assert_eq!(
            question_title(&Value::Null).error(),
            Some(&FieldError::TitleRequired)
        );
        assert_eq!(
            question_title(&json!(42)).error(),
            Some(&FieldError::TitleRequired)
        );
        assert_eq!(
            question_description(&Value::Null).error(),
            Some(&FieldError::DescriptionRequired)
        );
    }

    #[test]
    fn non_arrays_are_not_tags() {
        for value in [Value::Null, json!("string"), json!(123), json!({"id": 1})] {
            assert_eq!(tags(&value).error(), Some(&FieldError::TagsNotAList), "{value}");
        }
    }

    #[test]
    fn array_elements_are_not_inspected() {
        assert!(tags(&json!([null])).is_valid());
        assert!(tags(&json!([{"id": 1}, "two", 3])).is_valid());
        assert_eq!(
            tags(&json!([1, 2, 3, 4, 5, 6])).error(),
            Some(&FieldError::TooManyTags { max: 5 })
        );
    }

    #[test]
    fn field_lookup_on_non_object_is_null() {
        assert_eq!(field(&json!([1, 2]), "title"), &Value::Null);
        assert_eq!(field(&json!({"title": "x"}), "title"), &json!("x"));
    }

    #[test]
    fn parse_payload_rejects_garbage() {
        assert!(parse_payload("not json").is_err());
        assert_eq!(parse_payload("[]").unwrap(), json!([]));
    }
}
