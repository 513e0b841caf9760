//! Builder for constructing host machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{Machine, MachineEvent, StateNode};

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<S: State, C, E> {
    initial: Option<S>,
    context: Option<C>,
    states: Vec<(S, StateNode<S, C, E>)>,
}

impl<S: State, C, E: MachineEvent> MachineBuilder<S, C, E> {
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial context (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Register the node for `state`. A later node for the same state wins.
    pub fn state(mut self, state: S, node: StateNode<S, C, E>) -> Self {
        self.states.push((state, node));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<S, C, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if !self.states.iter().any(|(state, _)| state.name() == initial.name()) {
            return Err(BuildError::MissingInitialNode {
                name: initial.name().to_string(),
            });
        }

        let mut machine = Machine::new(initial, context);
        for (state, node) in self.states {
            machine.add_state(&state, node);
        }

        Ok(machine)
    }
}

impl<S: State, C, E: MachineEvent> Default for MachineBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
