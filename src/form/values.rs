//! Field-keyed maps held by a form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current value per field name.
pub type FieldValues<V> = BTreeMap<String, V>;

/// Whether each field has received focus.
pub type Touched = BTreeMap<String, bool>;

/// Validation messages per field name.
///
/// A field without an entry is valid. Absent messages are never stored:
/// setting `None` removes the entry, so an empty map means the whole form is
/// valid.
///
/// # Example
///
/// ```rust
/// use formset::form::FieldErrors;
///
/// let errors: FieldErrors = [
///     ("username", Some("You must provide a username")),
///     ("password", None),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get("username"), Some("You must provide a username"));
/// assert_eq!(errors.get("password"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the message for `field`.
    pub fn set(&mut self, field: impl Into<String>, message: Option<String>) {
        let field = field.into();
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    /// Builder form of [`FieldErrors::set`] with a present message.
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.set(field, Some(message.into()));
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, M> FromIterator<(K, Option<M>)> for FieldErrors
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<M>)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, message) in iter {
            errors.set(field, message.map(Into::into));
        }
        errors
    }
}

/// Every key of `values` mapped to `false`.
pub(crate) fn untouched<V>(values: &FieldValues<V>) -> Touched {
    values.keys().map(|name| (name.clone(), false)).collect()
}
