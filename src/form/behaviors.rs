//! State-merging behaviors.
//!
//! Each behavior takes the previous [`FormState`] and returns the next one.
//! Change and blur share one behavior: set the value, then revalidate.
//! Focus only marks the field touched. Submit has no default behavior.

use super::error::FormError;
use super::state::{compute_errors, FieldPolicy, FormState, Validator};

/// Check `name` against the fields present at construction.
pub(crate) fn check_field<V>(
    key: &str,
    policy: FieldPolicy,
    state: &FormState<V>,
    name: &str,
) -> Result<(), FormError> {
    if policy == FieldPolicy::Strict && !state.touched.contains_key(name) {
        return Err(FormError::UnknownField {
            key: key.to_string(),
            field: name.to_string(),
        });
    }
    Ok(())
}

/// Next state after a change or blur of `name` to `value`.
///
/// `values` is copied with the one field replaced and `errors` is recomputed
/// from the new values. `touched` is carried over unchanged.
pub fn apply_value<V: Clone>(
    state: &FormState<V>,
    name: &str,
    value: V,
    validate: Option<&Validator<V>>,
) -> FormState<V> {
    let mut values = state.values.clone();
    values.insert(name.to_string(), value);
    let errors = compute_errors(validate, &values);
    FormState {
        values,
        errors,
        touched: state.touched.clone(),
    }
}

/// Next state after `name` received focus.
pub fn apply_focus<V: Clone>(state: &FormState<V>, name: &str) -> FormState<V> {
    let mut touched = state.touched.clone();
    touched.insert(name.to_string(), true);
    FormState {
        values: state.values.clone(),
        errors: state.errors.clone(),
        touched,
    }
}
