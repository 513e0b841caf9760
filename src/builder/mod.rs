//! Builder API for ergonomic machine construction.
//!
//! Fluent builders for handlers and machines, plus the `state_enum!` macro
//! for declaring host states with minimal boilerplate.

pub mod error;
pub mod handler;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use handler::HandlerBuilder;
pub use machine::MachineBuilder;

use crate::machine::Handler;

/// Create a handler that only moves the machine to `to`.
///
/// # Example
///
/// ```
/// use formset::builder::goto;
/// use formset::form::FormEvent;
/// use formset::state_enum;
///
/// state_enum! {
///     enum LoginState {
///         Editing,
///         Submitting,
///     }
/// }
///
/// let handler = goto::<_, (), FormEvent<String>>(LoginState::Submitting);
/// assert_eq!(handler.target, Some(LoginState::Submitting));
/// ```
pub fn goto<S, C, E>(to: S) -> Handler<S, C, E> {
    Handler {
        target: Some(to),
        guard: None,
        actions: Vec::new(),
    }
}

/// Create a handler that moves to `to` only when `guard` holds.
pub fn guarded_goto<S, C, E, F>(to: S, guard: F) -> Handler<S, C, E>
where
    F: Fn(&C, &E) -> bool + Send + Sync + 'static,
{
    Handler {
        target: Some(to),
        guard: Some(crate::core::Guard::new(guard)),
        actions: Vec::new(),
    }
}
