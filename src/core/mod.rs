//! Host-side state machine primitives.
//!
//! - State node identity via the `State` trait
//! - Guard predicates over context and event
//! - Immutable history of state changes
//!
//! Everything here is pure; the [`crate::machine`] interpreter is the only
//! place that owns and replaces values.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
