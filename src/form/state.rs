//! Form state and the configuration it is derived from.

use super::values::{untouched, FieldErrors, FieldValues, Touched};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Synchronous validation function: values in, messages per invalid field out.
///
/// Validators are expected to be total. A panicking validator is not caught
/// and unwinds through whatever applied the behavior.
pub type Validator<V> = Arc<dyn Fn(&FieldValues<V>) -> FieldErrors + Send + Sync>;

/// How behaviors treat field names that were not present at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Write any name into `values`/`touched` without checking.
    #[default]
    Permissive,

    /// Reject unknown names with [`FormError::UnknownField`](super::FormError::UnknownField).
    Strict,
}

/// Input to [`create_form_model`](super::create_form_model).
///
/// # Example
///
/// ```rust
/// use formset::form::{FieldErrors, FieldValues, FormConfig};
///
/// let initial: FieldValues<String> = [("email".to_string(), String::new())]
///     .into_iter()
///     .collect();
///
/// let config = FormConfig::new(initial).validate(|values: &FieldValues<String>| {
///     let mut errors = FieldErrors::new();
///     if !values["email"].contains('@') {
///         errors.set("email", Some("Invalid email".to_string()));
///     }
///     errors
/// });
///
/// assert!(config.validator().is_some());
/// ```
pub struct FormConfig<V> {
    initial_values: FieldValues<V>,
    validate: Option<Validator<V>>,
    field_policy: FieldPolicy,
}

impl<V> FormConfig<V> {
    pub fn new(initial_values: FieldValues<V>) -> Self {
        Self {
            initial_values,
            validate: None,
            field_policy: FieldPolicy::default(),
        }
    }

    /// Set the validation function (optional).
    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&FieldValues<V>) -> FieldErrors + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validate));
        self
    }

    /// Set an already shared validator (optional).
    pub fn validator_arc(mut self, validate: Validator<V>) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn field_policy(mut self, policy: FieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    pub fn initial_values(&self) -> &FieldValues<V> {
        &self.initial_values
    }

    pub fn validator(&self) -> Option<&Validator<V>> {
        self.validate.as_ref()
    }

    pub fn policy(&self) -> FieldPolicy {
        self.field_policy
    }
}

impl<V: Clone> Clone for FormConfig<V> {
    fn clone(&self) -> Self {
        Self {
            initial_values: self.initial_values.clone(),
            validate: self.validate.clone(),
            field_policy: self.field_policy,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for FormConfig<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("initial_values", &self.initial_values)
            .field("validate", &self.validate.is_some())
            .field("field_policy", &self.field_policy)
            .finish()
    }
}

/// One form's slice of the host context.
///
/// `errors` always reflects the last validation of `values`; `touched` has
/// one entry per field known at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormState<V> {
    pub values: FieldValues<V>,
    pub errors: FieldErrors,
    pub touched: Touched,
}

/// Run `validate` against `values`, or produce no errors without a validator.
pub(crate) fn compute_errors<V>(
    validate: Option<&Validator<V>>,
    values: &FieldValues<V>,
) -> FieldErrors {
    validate.map_or_else(FieldErrors::new, |validate| validate(values))
}

/// Derive the initial [`FormState`] from a configuration.
///
/// Missing validator means empty errors; every initial field starts
/// untouched.
pub fn make_initial_state_from_config<V: Clone>(config: &FormConfig<V>) -> FormState<V> {
    let values = config.initial_values.clone();
    let errors = compute_errors(config.validator(), &values);
    let touched = untouched(&values);
    FormState {
        values,
        errors,
        touched,
    }
}
