//! Composable validators built from per-field checks.
//!
//! Every check runs on every validation and failures accumulate through
//! Stillwater's `Validation`, so one pass reports each invalid field.
//! The result is an ordinary [`Validator`] for [`FormConfig::validate`](super::FormConfig).
//!
//! # Example
//!
//! ```rust
//! use formset::form::{FieldValues, ValidationRules};
//!
//! let validate = ValidationRules::new()
//!     .require("username", |v: &String| !v.is_empty(), "You must provide a username")
//!     .require("password", |v: &String| !v.is_empty(), "You must provide a password")
//!     .build();
//!
//! let values: FieldValues<String> = [
//!     ("username".to_string(), "ada".to_string()),
//!     ("password".to_string(), String::new()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let errors = validate(&values);
//! assert_eq!(errors.get("password"), Some("You must provide a password"));
//! assert!(!errors.contains("username"));
//! ```

use super::state::Validator;
use super::values::{FieldErrors, FieldValues};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single failed check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Type alias for whole-form checks
pub type FieldCheck<V> =
    Box<dyn Fn(&FieldValues<V>) -> Validation<(), NonEmptyVec<FieldError>> + Send + Sync>;

/// Ordered list of checks. The first message reported for a field wins.
pub struct ValidationRules<V> {
    checks: Vec<FieldCheck<V>>,
}

impl<V: 'static> ValidationRules<V> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Fail `field` with `message` unless `predicate` holds for its value.
    ///
    /// A field missing from the values fails as well.
    pub fn require<F>(
        mut self,
        field: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let field = field.into();
        let message = message.into();
        let check = move |values: &FieldValues<V>| {
            if values.get(&field).is_some_and(|value| predicate(value)) {
                Validation::success(())
            } else {
                Validation::fail(FieldError::new(field.clone(), message.clone()))
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Add a check over all values, for rules that relate several fields.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&FieldValues<V>) -> Validation<(), NonEmptyVec<FieldError>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, accumulating all failures.
    pub fn validate(&self, values: &FieldValues<V>) -> Validation<(), NonEmptyVec<FieldError>> {
        let results: Vec<Validation<(), NonEmptyVec<FieldError>>> =
            self.checks.iter().map(|check| check(values)).collect();
        Validation::all_vec(results).map(|_| ())
    }

    /// Collapse [`ValidationRules::validate`] into per-field messages.
    pub fn errors(&self, values: &FieldValues<V>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Validation::Failure(failures) = self.validate(values) {
            for failure in failures.iter() {
                if !errors.contains(&failure.field) {
                    errors.set(failure.field.clone(), Some(failure.message.clone()));
                }
            }
        }
        errors
    }

    pub fn build(self) -> Validator<V> {
        Arc::new(move |values: &FieldValues<V>| self.errors(values))
    }
}

impl<V: 'static> Default for ValidationRules<V> {
    fn default() -> Self {
        Self::new()
    }
}
