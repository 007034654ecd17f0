//! Question Service - whole-form validation for create/edit question.
//!
//! Runs the title, description and tag validators unconditionally and merges
//! their failures into one [`FormValidationOutcome`]. A failing title never
//! stops the description or tags from being checked.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::input,
    domain::{FormField, FormValidationOutcome, QuestionForm, QuestionRules, QuestionValidator},
};

/// Service for question form validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionService {
    validator: QuestionValidator,
}

impl QuestionService {
    /// Create a service applying the given rule set.
    pub const fn new(rules: QuestionRules) -> Self {
        Self {
            validator: QuestionValidator::new(rules),
        }
    }

    pub const fn rules(&self) -> &QuestionRules {
        self.validator.rules()
    }

    /// Validate a typed question form.
    #[instrument(skip_all, fields(tags = form.tags.len()))]
    pub fn validate(&self, form: &QuestionForm) -> FormValidationOutcome {
        let outcome = FormValidationOutcome::from_fields([
            (FormField::Title, self.validator.title(&form.title)),
            (FormField::Description, self.validator.description(&form.description)),
            (FormField::Tags, self.validator.tag_ids(&tag_ids(form))),
        ]);
        log_outcome(&outcome);
        outcome
    }

    /// Validate an untyped payload, applying the input guards to each field.
    ///
    /// A payload that is not an object has no fields, so every field fails.
    #[instrument(skip_all)]
    pub fn validate_value(&self, payload: &Value) -> FormValidationOutcome {
        let outcome = FormValidationOutcome::from_fields([
            (
                FormField::Title,
                input::question_title_with(&self.validator, input::field(payload, "title")),
            ),
            (
                FormField::Description,
                input::question_description_with(
                    &self.validator,
                    input::field(payload, "description"),
                ),
            ),
            (
                FormField::Tags,
                input::tags_with(&self.validator, input::field(payload, "tags")),
            ),
        ]);
        log_outcome(&outcome);
        outcome
    }
}

fn tag_ids(form: &QuestionForm) -> Vec<u64> {
    form.tags.iter().map(|tag| tag.id).collect()
}

fn log_outcome(outcome: &FormValidationOutcome) {
    debug!(
        valid = outcome.is_valid(),
        failed = ?outcome.failed_fields().collect::<Vec<_>>(),
        "Question form validated"
    );
}

/// Validate a question form with the production rules.
pub fn validate_question_form(form: &QuestionForm) -> FormValidationOutcome {
    QuestionService::default().validate(form)
}

/// Validate an edit of an existing question with [`QuestionRules::EDIT`].
pub fn validate_question_edit_form(form: &QuestionForm) -> FormValidationOutcome {
    QuestionService::new(QuestionRules::EDIT).validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldError, Tag};
    use serde_json::json;

    #[test]
    fn minimum_form_is_valid() {
        let form = QuestionForm::new("a".repeat(15), "a".repeat(30), vec![Tag::new(1)]);
        let outcome = validate_question_form(&form);
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn every_field_is_checked() {
        let form = QuestionForm::new("Short", "Too short", vec![]);
        let outcome = validate_question_form(&form);

        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.failed_fields().collect::<Vec<_>>(),
            [FormField::Title, FormField::Description, FormField::Tags]
        );
    }

    #[test]
    fn only_failing_fields_reported() {
        let form = QuestionForm::new(
            "Short",
            "This is a valid description with more than thirty characters for testing.",
            vec![Tag::new(1)],
        );
        let outcome = validate_question_form(&form);

        assert_eq!(
            outcome.error(FormField::Title),
            Some(&FieldError::TitleTooShort { min: 15 })
        );
        assert!(outcome.error(FormField::Description).is_none());
        assert!(outcome.error(FormField::Tags).is_none());
    }

    #[test]
    fn one_over_title_maximum_fails() {
        let form = QuestionForm::new("a".repeat(151), "a".repeat(30), vec![Tag::new(1)]);
        let outcome = validate_question_form(&form);
        assert_eq!(
            outcome.error(FormField::Title).map(ToString::to_string).as_deref(),
            Some("Title must not exceed 150 characters")
        );
    }

    #[test]
    fn untyped_payload_uses_guards() {
        let service = QuestionService::default();
        let outcome = service.validate_value(&json!({
            "title": 12,
            "description": null,
            "tags": "rust"
        }));

        assert_eq!(outcome.error(FormField::Title), Some(&FieldError::TitleRequired));
        assert_eq!(
            outcome.error(FormField::Description),
            Some(&FieldError::DescriptionRequired)
        );
        assert_eq!(outcome.error(FormField::Tags), Some(&FieldError::TagsNotAList));
    }

    #[test]
    fn non_object_payload_fails_every_field() {
        let outcome = QuestionService::default().validate_value(&json!("hello"));
        assert_eq!(outcome.errors().len(), 3);
    }

    #[test]
    fn typed_and_untyped_paths_agree() {
        let form = QuestionForm::new(
            "How do I implement user authentication?",
            "I need help implementing JWT authentication in my React app.",
            vec![Tag::new(1), Tag::new(2)],
        );
        let payload = serde_json::to_value(&form).unwrap();
        let service = QuestionService::default();

        assert_eq!(service.validate(&form), service.validate_value(&payload));
    }

    #[test]
    fn edit_form_uses_edit_limits() {
        let form = QuestionForm::new(
            "Short title",
            "<p>Short <em>but</em> still fine</p>",
            vec![Tag::new(1), Tag::new(1)],
        );

        // create rules: title too short, markup long enough, repeats allowed
        let created = validate_question_form(&form);
        assert_eq!(created.failed_fields().collect::<Vec<_>>(), [FormField::Title]);

        let edited = validate_question_edit_form(&form);
        assert_eq!(edited.failed_fields().collect::<Vec<_>>(), [FormField::Tags]);
        assert_eq!(edited.error(FormField::Tags), Some(&FieldError::DuplicateTags));
    }

    #[test]
    fn edit_payload_detects_repeated_ids() {
        let service = QuestionService::new(QuestionRules::EDIT);
        let payload = json!({
            "title": "Updated title",
            "description": "<p>An updated body with enough text.</p>",
            "tags": [{"id": 3, "name": "rust"}, {"id": 3, "name": "rust"}]
        });
        assert_eq!(
            service.validate_value(&payload).error(FormField::Tags),
            Some(&FieldError::DuplicateTags)
        );

        let bare_ids = json!({
            "title": "Updated title",
            "description": "<p>An updated body with enough text.</p>",
            "tags": [3, 4]
        });
        assert!(service.validate_value(&bare_ids).is_valid());
    }

    #[test]
    fn custom_rules_flow_through() {
        let service = QuestionService::new(QuestionRules::try_new(1, 200, 1, 1).unwrap());
        let form = QuestionForm::new("Hi", "Body", vec![Tag::new(1), Tag::new(2)]);
        let outcome = service.validate(&form);

        assert_eq!(outcome.failed_fields().collect::<Vec<_>>(), [FormField::Tags]);
        assert_eq!(
            outcome.error(FormField::Tags),
            Some(&FieldError::TooManyTags { max: 1 })
        );
    }
}
