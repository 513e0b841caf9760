//! Seams between a form model and the host machine's types.
//!
//! The host owns one context value and one event type. A form model only
//! needs to find its own [`FormState`] inside that context by key, and to
//! find a [`FormEvent`] inside the host event.

use super::events::FormEvent;
use super::state::FormState;
use std::collections::BTreeMap;

/// A host context that holds form states under string keys.
///
/// Implementations must keep every other part of the context intact when
/// replacing one slot.
///
/// # Example
///
/// ```rust
/// use formset::form::{FormContext, FormState};
///
/// #[derive(Clone)]
/// struct AppContext {
///     login: FormState<String>,
///     attempts: u32,
/// }
///
/// impl FormContext<String> for AppContext {
///     fn form_state(&self, key: &str) -> Option<&FormState<String>> {
///         (key == "login").then_some(&self.login)
///     }
///
///     fn with_form_state(&self, key: &str, state: FormState<String>) -> Option<Self> {
///         (key == "login").then(|| AppContext { login: state, ..self.clone() })
///     }
/// }
/// ```
pub trait FormContext<V>: Sized {
    fn form_state(&self, key: &str) -> Option<&FormState<V>>;

    /// A copy of the context with the slot at `key` replaced.
    ///
    /// Returns `None` when the context has no slot named `key`.
    fn with_form_state(&self, key: &str, state: FormState<V>) -> Option<Self>;
}

impl<V: Clone> FormContext<V> for BTreeMap<String, FormState<V>> {
    fn form_state(&self, key: &str) -> Option<&FormState<V>> {
        self.get(key)
    }

    fn with_form_state(&self, key: &str, state: FormState<V>) -> Option<Self> {
        if !self.contains_key(key) {
            return None;
        }
        let mut next = self.clone();
        next.insert(key.to_string(), state);
        Some(next)
    }
}

/// A host event that may carry a form event.
pub trait FormEventSource<V> {
    fn form_event(&self) -> Option<&FormEvent<V>>;
}

impl<V> FormEventSource<V> for FormEvent<V> {
    fn form_event(&self) -> Option<&FormEvent<V>> {
        Some(self)
    }
}
