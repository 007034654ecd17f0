//! Validation bounds and literals.
//!
//! Every number and literal the validators compare against lives here as a
//! named constant. [`QuestionRules`] bundles the question-form bounds so a
//! caller can run the same validators with different limits; its `Default`
//! is exactly the constants below.

use serde::Serialize;

use crate::error::{DalformError, DalformResult};

// ── Account rules ────────────────────────────────────────────────────────────

/// Required (case-sensitive) suffix for registration emails.
pub const DAL_EMAIL_SUFFIX: &str = "@dal.ca";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols that satisfy the password "symbol" rule.
pub const PASSWORD_SYMBOLS: [char; 8] = ['@', '$', '!', '%', '*', '?', '&', '#'];

// ── Question rules ───────────────────────────────────────────────────────────

pub const TITLE_MIN_LENGTH: usize = 15;
pub const TITLE_MAX_LENGTH: usize = 150;
pub const DESCRIPTION_MIN_LENGTH: usize = 30;
pub const TAGS_MAX: usize = 5;

// Editing an existing question uses looser text bounds.
pub const EDIT_TITLE_MAX_LENGTH: usize = 120;
pub const EDIT_DESCRIPTION_MIN_LENGTH: usize = 20;

/// What the rich-text editor submits when the user typed nothing.
pub const EMPTY_EDITOR_MARKUP: &str = "<p><br></p>";

/// How a description's length is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptionMeasure {
    /// The submitted text as-is, HTML tags included.
    #[default]
    Markup,
    /// Only the text content, with tags removed and entities decoded.
    TextContent,
}

/// Bounds applied by [`QuestionValidator`](crate::domain::QuestionValidator).
///
/// Lengths are counted in characters after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionRules {
    title_min: usize,
    title_max: usize,
    description_min: usize,
    tags_max: usize,
    description_measure: DescriptionMeasure,
    unique_tags: bool,
}

impl QuestionRules {
    /// The forum's production limits.
    pub const DEFAULT: Self = Self {
        title_min: TITLE_MIN_LENGTH,
        title_max: TITLE_MAX_LENGTH,
        description_min: DESCRIPTION_MIN_LENGTH,
        tags_max: TAGS_MAX,
        description_measure: DescriptionMeasure::Markup,
        unique_tags: false,
    };

    /// Limits for editing a question that already exists: no title minimum,
    /// a shorter title cap, a description measured on its text content and
    /// no repeated tag.
    pub const EDIT: Self = Self {
        title_min: 0,
        title_max: EDIT_TITLE_MAX_LENGTH,
        description_min: EDIT_DESCRIPTION_MIN_LENGTH,
        tags_max: TAGS_MAX,
        description_measure: DescriptionMeasure::TextContent,
        unique_tags: true,
    };

    /// Build a custom rule set.
    ///
    /// # Errors
    ///
    /// Returns [`DalformError::InvalidRules`] when the title bounds are
    /// inverted or when no tag would ever be accepted.
    pub fn try_new(
        title_min: usize,
        title_max: usize,
        description_min: usize,
        tags_max: usize,
    ) -> DalformResult<Self> {
        if title_min > title_max {
            return Err(DalformError::InvalidRules {
                reason: format!("title_min ({title_min}) exceeds title_max ({title_max})"),
            });
        }
        if tags_max == 0 {
            return Err(DalformError::InvalidRules {
                reason: "tags_max must allow at least one tag".into(),
            });
        }

        Ok(Self {
            title_min,
            title_max,
            description_min,
            tags_max,
            description_measure: DescriptionMeasure::Markup,
            unique_tags: false,
        })
    }

    #[must_use]
    pub const fn with_description_measure(mut self, measure: DescriptionMeasure) -> Self {
        self.description_measure = measure;
        self
    }

    #[must_use]
    pub const fn with_unique_tags(mut self, unique: bool) -> Self {
        self.unique_tags = unique;
        self
    }

    pub const fn title_min(&self) -> usize {
        self.title_min
    }

    pub const fn title_max(&self) -> usize {
        self.title_max
    }

    pub const fn description_min(&self) -> usize {
        self.description_min
    }

    pub const fn tags_max(&self) -> usize {
        self.tags_max
    }

    pub const fn description_measure(&self) -> DescriptionMeasure {
        self.description_measure
    }

    /// Whether the same tag id may appear only once.
    pub const fn unique_tags(&self) -> bool {
        self.unique_tags
    }
}

impl Default for QuestionRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}
