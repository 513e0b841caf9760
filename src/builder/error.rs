//! Build errors for machines and handlers.

use thiserror::Error;

/// Errors that can occur when building machines and handlers.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("Initial state '{name}' has no state node. Call .state(state, node)")]
    MissingInitialNode { name: String },

    #[error("Handler does nothing. Call .target(state) or .action(f)")]
    EmptyHandler,
}
