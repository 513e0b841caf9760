//! Form model errors.

use thiserror::Error;

/// Errors raised while applying form behaviors or reading selectors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Only raised under [`FieldPolicy::Strict`](crate::form::FieldPolicy::Strict).
    #[error("Form '{key}' has no field named '{field}'")]
    UnknownField { key: String, field: String },

    #[error("Host context has no form state at '{key}'")]
    MissingState { key: String },

    #[error("Form '{key}' cannot handle event '{event_type}'")]
    UnexpectedEvent { key: String, event_type: String },
}
