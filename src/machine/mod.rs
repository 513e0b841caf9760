//! A small host state machine for embedding form models.
//!
//! # Key Concepts
//!
//! - **State nodes**: each host state maps exact event tags to handlers
//! - **Handlers**: optional guard, ordered context actions, optional target
//! - **Machine**: owns the context and serializes event dispatch
//!
//! Form models plug into this through [`FormModel::create_state`](crate::form::FormModel::create_state),
//! which only adds entries to a node's `on` table.

mod error;
mod interpreter;
mod node;

pub use error::MachineError;
pub use interpreter::{Dispatch, Machine, MachineEvent};
pub use node::{Action, Handler, StateNode};
