//! Interpreter that dispatches events to state node handlers.

use super::error::MachineError;
use super::node::StateNode;
use crate::core::{State, StateHistory, StateTransition};
use crate::form::FormEvent;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Events the machine can dispatch, identified by their exact tag.
pub trait MachineEvent {
    fn event_type(&self) -> &str;
}

impl<V> MachineEvent for FormEvent<V> {
    fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// Outcome of a single [`Machine::send`].
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch<S: State> {
    /// The current state has no handler for the event tag
    Ignored,

    /// A handler exists but its guard rejected the event
    Blocked,

    /// Context replaced, state unchanged
    Updated,

    /// Context (possibly) replaced and the machine moved to a new state
    Transitioned { from: S, to: S },
}

/// Host state machine owning one context value.
///
/// Events are processed one at a time: `send` takes `&mut self`, so two
/// handlers can never observe the same context concurrently. The context is
/// only replaced after every action of the chosen handler succeeded.
pub struct Machine<S: State, C, E> {
    current: S,
    context: C,
    nodes: HashMap<String, StateNode<S, C, E>>,
    history: StateHistory<S>,
}

impl<S: State, C, E: MachineEvent> Machine<S, C, E> {
    /// Create a machine in `initial` with the given context.
    pub fn new(initial: S, context: C) -> Self {
        Self {
            current: initial,
            context,
            nodes: HashMap::new(),
            history: StateHistory::new(),
        }
    }

    /// Register the node for `state`, replacing any previous one.
    pub fn add_state(&mut self, state: &S, node: StateNode<S, C, E>) {
        self.nodes.insert(state.name().to_string(), node);
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Dispatch one event to the current state's handler.
    pub fn send(&mut self, event: &E) -> Result<Dispatch<S>, MachineError> {
        let event_type = event.event_type();
        let state_name = self.current.name();
        let node = self
            .nodes
            .get(state_name)
            .ok_or_else(|| MachineError::UnknownState {
                name: state_name.to_string(),
            })?;

        debug!(state = state_name, event = event_type, "dispatching event");

        let Some(handler) = node.handler(event_type) else {
            trace!(state = state_name, event = event_type, "no handler, event ignored");
            return Ok(Dispatch::Ignored);
        };

        if !handler.can_run(&self.context, event) {
            trace!(state = state_name, event = event_type, "guard blocked event");
            return Ok(Dispatch::Blocked);
        }

        let next = handler.run(&self.context, event).inspect_err(|error| {
            warn!(state = state_name, event = event_type, %error, "action failed");
        })?;

        let target = handler.target.clone();
        if let Some(next) = next {
            self.context = next;
        }

        match target {
            Some(to) => {
                let from = std::mem::replace(&mut self.current, to.clone());
                debug!(from = from.name(), to = to.name(), event = event_type, "state changed");
                self.history = self.history.record(StateTransition {
                    from: from.clone(),
                    to: to.clone(),
                    event: event_type.to_string(),
                    timestamp: Utc::now(),
                });
                Ok(Dispatch::Transitioned { from, to })
            }
            None => Ok(Dispatch::Updated),
        }
    }
}
