//! Host machine errors.

use crate::form::FormError;
use thiserror::Error;

/// Errors that can occur while dispatching an event
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("No state node registered for '{name}'")]
    UnknownState { name: String },

    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error(transparent)]
    Form(#[from] FormError),
}
