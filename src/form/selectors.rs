//! Read-only predicates over a form's slice of the host context.

use super::context::FormContext;
use super::error::FormError;
use super::state::FormState;
use std::sync::Arc;

/// Selectors bound to one form's key.
///
/// Each selector fails only when the host context has no form state at the
/// key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSelectors {
    key: Arc<str>,
}

impl FormSelectors {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    /// `true` when the form has no validation errors.
    pub fn is_valid<V, C: FormContext<V>>(&self, context: &C) -> Result<bool, FormError> {
        self.state(context).map(|state| state.errors.is_empty())
    }

    /// `true` when at least one field has been focused.
    pub fn is_dirty<V, C: FormContext<V>>(&self, context: &C) -> Result<bool, FormError> {
        self.state(context)
            .map(|state| state.touched.values().any(|touched| *touched))
    }

    pub fn is_pristine<V, C: FormContext<V>>(&self, context: &C) -> Result<bool, FormError> {
        self.is_dirty(context).map(|dirty| !dirty)
    }

    fn state<'c, V, C: FormContext<V>>(
        &self,
        context: &'c C,
    ) -> Result<&'c FormState<V>, FormError> {
        context
            .form_state(&self.key)
            .ok_or_else(|| FormError::MissingState {
                key: self.key.to_string(),
            })
    }
}
