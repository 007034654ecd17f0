//! Validation outcomes returned to form handlers.
//!
//! Both types keep their invariants structurally: a [`ValidationResult`]
//! carries an error exactly when it is invalid, and a
//! [`FormValidationOutcome`] is valid exactly when its error map is empty.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeStruct};

use crate::domain::{error::FieldError, value_objects::FormField};

/// Pass/fail outcome for one field.
///
/// Serialises as `{"isValid": bool, "error": string | null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    error: Option<FieldError>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self { error: None }
    }

    pub const fn invalid(error: FieldError) -> Self {
        Self { error: Some(error) }
    }

    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub const fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// The user-facing message, if the field failed.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<(), FieldError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        Self {
            error: result.err(),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("error", &self.error)?;
        state.end()
    }
}

/// Whole-form outcome: every failing field mapped to its error.
///
/// Serialises as `{"isValid": bool, "errors": {"<field>": "<message>"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationOutcome {
    errors: BTreeMap<FormField, FieldError>,
}

impl FormValidationOutcome {
    /// Merge per-field results, keeping only the failures.
    pub fn from_fields(fields: impl IntoIterator<Item = (FormField, ValidationResult)>) -> Self {
        let errors = fields
            .into_iter()
            .filter_map(|(field, result)| result.error.map(|error| (field, error)))
            .collect();
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    /// Failing fields in field order.
    pub fn failed_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }
}

impl Serialize for FormValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Errors<'a>(&'a BTreeMap<FormField, FieldError>);

        impl Serialize for Errors<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (field, error) in self.0 {
                    map.serialize_entry(field.as_str(), error)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("FormValidationOutcome", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &Errors(&self.errors))?;
        state.end()
    }
}
