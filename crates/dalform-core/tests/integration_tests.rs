//! Integration tests for dalform-core.

use dalform_core::prelude::*;
use serde_json::json;

#[test]
fn test_email_suffix_property() {
    for local in ["a", "john.doe", "x+y", "123"] {
        assert!(validate_dal_email(&format!("{local}@dal.ca")), "{local}");
        assert!(!validate_dal_email(&format!("{local}@Dal.ca")), "{local}");
        assert!(!validate_dal_email(&format!("{local}@dal.ca.com")), "{local}");
    }
}

#[test]
fn test_password_forms_agree_except_empty() {
    let candidates = [
        "Test1234!",
        "MySecure@Pass1",
        "password123!",
        "PASSWORD123!",
        "Password!",
        "Password123",
        "Pass1!",
        "weak",
    ];
    for candidate in candidates {
        assert_eq!(
            validate_password(candidate),
            password_errors(candidate).is_empty(),
            "{candidate}"
        );
    }

    // Both reject the empty password; only the message count differs.
    assert!(!validate_password(""));
    assert_eq!(password_errors(""), vec![PasswordRule::Required]);
}

#[test]
fn test_title_boundaries() {
    let cases = [
        (14, Some("Title must be at least 15 characters")),
        (15, None),
        (150, None),
        (151, Some("Title must not exceed 150 characters")),
    ];
    for (len, expected) in cases {
        let result = validate_question_title(&"a".repeat(len));
        assert_eq!(result.is_valid(), expected.is_none(), "len {len}");
        assert_eq!(result.message().as_deref(), expected, "len {len}");
    }
}

#[test]
fn test_description_editor_placeholder() {
    let result = validate_question_description("<p><br></p>");
    assert!(!result.is_valid());
    assert_eq!(result.message().as_deref(), Some("Description is required"));
}

#[test]
fn test_tag_literals() {
    let none: Vec<Tag> = vec![];
    assert_eq!(
        validate_tags(&none).message().as_deref(),
        Some("Please select at least one tag")
    );

    let six: Vec<Tag> = (1..=6).map(Tag::new).collect();
    assert_eq!(
        validate_tags(&six).message().as_deref(),
        Some("Maximum 5 tags allowed")
    );

    let one = [Tag::new(1)];
    assert_eq!(
        serde_json::to_value(validate_tags(&one)).unwrap(),
        json!({"isValid": true, "error": null})
    );
}

#[test]
fn test_minimum_question_form() {
    let form = QuestionForm::new("a".repeat(15), "a".repeat(30), vec![Tag::new(1)]);
    assert_eq!(
        serde_json::to_value(validate_question_form(&form)).unwrap(),
        json!({"isValid": true, "errors": {}})
    );
}

#[test]
fn test_question_form_reports_all_fields() {
    let payload = input::parse_payload(
        r#"{"title": "Short", "description": "Too short", "tags": []}"#,
    )
    .unwrap();
    let outcome = QuestionService::default().validate_value(&payload);

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "isValid": false,
            "errors": {
                "title": "Title must be at least 15 characters",
                "description": "Description must be at least 30 characters",
                "tags": "Please select at least one tag"
            }
        })
    );
}

#[test]
fn test_untyped_guards_match_client_contract() {
    assert!(!input::dal_email(&json!(null)));
    assert!(!input::dal_email(&json!(123)));
    assert!(!input::password(&json!(null)));
    assert!(!input::question_title(&json!(null)).is_valid());
    assert!(!input::question_description(&json!(null)).is_valid());

    for value in [json!(null), json!("string"), json!(123)] {
        assert_eq!(
            input::tags(&value).message().as_deref(),
            Some("Tags must be an array")
        );
    }
}

#[test]
fn test_edit_form_json_shape() {
    let form = QuestionForm::new(
        "",
        "<p><br></p>",
        vec![Tag::named(7, "flask"), Tag::named(7, "flask")],
    );
    let json = serde_json::to_value(validate_question_edit_form(&form)).unwrap();

    assert_eq!(
        json,
        json!({
            "isValid": false,
            "errors": {
                "title": "Title is required",
                "description": "Description is required",
                "tags": "Duplicate tags are not allowed"
            }
        })
    );
}

#[test]
fn test_registration_form() {
    let ok = RegistrationForm::new("student@dal.ca", "Test1234!");
    assert!(validate_registration_form(&ok).is_valid());

    let bad = RegistrationForm::new("student@DAL.CA", "Test1234!");
    let outcome = validate_registration_form(&bad);
    assert_eq!(outcome.failed_fields().collect::<Vec<_>>(), [FormField::Email]);
}

#[test]
fn test_validators_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QuestionService>();
    assert_send_sync::<FormValidationOutcome>();
    assert_send_sync::<ValidationResult>();

    let service = QuestionService::default();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let service = &service;
            scope.spawn(move || {
                let form = QuestionForm::new("a".repeat(15 + i), "a".repeat(30), vec![Tag::new(1)]);
                assert!(service.validate(&form).is_valid());
            });
        }
    });
}
