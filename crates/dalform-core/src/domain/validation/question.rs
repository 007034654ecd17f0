//! Question form field rules: title, description, tag count.

use std::borrow::Cow;

use crate::domain::{
    error::FieldError,
    markup::text_content,
    outcome::ValidationResult,
    rules::{DescriptionMeasure, EMPTY_EDITOR_MARKUP, QuestionRules},
};

/// Applies a [`QuestionRules`] set to the question form fields.
///
/// Lengths are measured in characters after trimming surrounding whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionValidator {
    rules: QuestionRules,
}

impl QuestionValidator {
    pub const fn new(rules: QuestionRules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &QuestionRules {
        &self.rules
    }

    pub fn title(&self, title: &str) -> ValidationResult {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return ValidationResult::invalid(FieldError::TitleRequired);
        }

        let len = trimmed.chars().count();
        if len < self.rules.title_min() {
            return ValidationResult::invalid(FieldError::TitleTooShort {
                min: self.rules.title_min(),
            });
        }
        if len > self.rules.title_max() {
            return ValidationResult::invalid(FieldError::TitleTooLong {
                max: self.rules.title_max(),
            });
        }

        ValidationResult::valid()
    }

    /// With [`DescriptionMeasure::Markup`] tags count toward the length and
    /// only the editor's empty paragraph is treated as "no content".
    pub fn description(&self, description: &str) -> ValidationResult {
        let measured = match self.rules.description_measure() {
            DescriptionMeasure::Markup => Cow::Borrowed(description),
            DescriptionMeasure::TextContent => Cow::Owned(text_content(description)),
        };

        let trimmed = measured.trim();
        if trimmed.is_empty() || description.trim() == EMPTY_EDITOR_MARKUP {
            return ValidationResult::invalid(FieldError::DescriptionRequired);
        }

        if trimmed.chars().count() < self.rules.description_min() {
            return ValidationResult::invalid(FieldError::DescriptionTooShort {
                min: self.rules.description_min(),
            });
        }

        ValidationResult::valid()
    }

    /// Only the number of tags is checked, never their contents.
    pub fn tags<T>(&self, tags: &[T]) -> ValidationResult {
        if tags.is_empty() {
            return ValidationResult::invalid(FieldError::NoTags);
        }
        if tags.len() > self.rules.tags_max() {
            return ValidationResult::invalid(FieldError::TooManyTags {
                max: self.rules.tags_max(),
            });
        }

        ValidationResult::valid()
    }

    /// Count check, then, when the rules ask for unique tags, a check that
    /// no id appears twice.
    pub fn tag_ids<I: PartialEq>(&self, ids: &[I]) -> ValidationResult {
        let counted = self.tags(ids);
        if !counted.is_valid() || !self.rules.unique_tags() {
            return counted;
        }

        let repeated = ids
            .iter()
            .enumerate()
            .any(|(i, id)| ids[..i].contains(id));
        if repeated {
            return ValidationResult::invalid(FieldError::DuplicateTags);
        }

        ValidationResult::valid()
    }
}

/// Title check with the production bounds (15..=150 characters).
pub fn validate_question_title(title: &str) -> ValidationResult {
    QuestionValidator::default().title(title)
}

/// Description check with the production minimum (30 characters).
pub fn validate_question_description(description: &str) -> ValidationResult {
    QuestionValidator::default().description(description)
}

/// Tag count check with the production bounds (1..=5 tags).
pub fn validate_tags<T>(tags: &[T]) -> ValidationResult {
    QuestionValidator::default().tags(tags)
}
