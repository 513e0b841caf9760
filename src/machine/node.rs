//! State node configuration: the `on` table of a host state.

use super::error::MachineError;
use crate::core::Guard;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Pure context update run when a handler fires.
pub type Action<C, E> = Arc<dyn Fn(&C, &E) -> Result<C, MachineError> + Send + Sync>;

/// What happens when a state node receives a given event tag.
///
/// Actions run in order, each seeing the context produced by the previous
/// one. A handler with a `target` also moves the machine to that state.
pub struct Handler<S, C, E> {
    pub target: Option<S>,
    pub guard: Option<Guard<C, E>>,
    pub actions: Vec<Action<C, E>>,
}

impl<S, C, E> Handler<S, C, E> {
    /// Handler that only updates the context.
    pub fn assign<F>(action: F) -> Self
    where
        F: Fn(&C, &E) -> Result<C, MachineError> + Send + Sync + 'static,
    {
        Self {
            target: None,
            guard: None,
            actions: vec![Arc::new(action)],
        }
    }

    /// Check the guard, if any (pure).
    pub fn can_run(&self, context: &C, event: &E) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(context, event))
    }

    /// Fold every action over `context`.
    ///
    /// The first failing action aborts the fold; the caller's context is
    /// never touched.
    pub fn run(&self, context: &C, event: &E) -> Result<Option<C>, MachineError> {
        let mut next: Option<C> = None;
        for action in &self.actions {
            let current = next.as_ref().unwrap_or(context);
            next = Some(action(current, event)?);
        }
        Ok(next)
    }
}

impl<S: Clone, C, E> Clone for Handler<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            guard: self.guard.clone(),
            actions: self.actions.clone(),
        }
    }
}

/// Handlers of one host state, keyed by exact event tag.
pub struct StateNode<S, C, E> {
    on: BTreeMap<String, Handler<S, C, E>>,
}

impl<S, C, E> StateNode<S, C, E> {
    pub fn new() -> Self {
        Self {
            on: BTreeMap::new(),
        }
    }

    /// Register `handler` for `event_type`, replacing any previous entry.
    pub fn on(mut self, event_type: impl Into<String>, handler: Handler<S, C, E>) -> Self {
        self.on.insert(event_type.into(), handler);
        self
    }

    pub fn handler(&self, event_type: &str) -> Option<&Handler<S, C, E>> {
        self.on.get(event_type)
    }

    /// Event tags this node reacts to.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.on.keys().map(String::as_str)
    }

    /// Install `defaults` underneath this node's own handlers.
    ///
    /// On a tag collision the node's entry wins and the default is dropped
    /// entirely; handlers are never combined.
    pub fn with_defaults(self, defaults: BTreeMap<String, Handler<S, C, E>>) -> Self {
        let mut on = defaults;
        on.extend(self.on);
        Self { on }
    }
}

impl<S, C, E> Default for StateNode<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, C, E> Clone for StateNode<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Node = StateNode<&'static str, i32, i32>;

    fn add() -> Handler<&'static str, i32, i32> {
        Handler::assign(|ctx: &i32, delta: &i32| Ok(ctx + delta))
    }

    fn double() -> Handler<&'static str, i32, i32> {
        Handler::assign(|ctx: &i32, _: &i32| Ok(ctx * 2))
    }

    #[test]
    fn actions_fold_in_order() {
        let mut handler = add();
        handler.actions.extend(double().actions);

        assert_eq!(handler.run(&1, &2).unwrap(), Some(6));
    }

    #[test]
    fn handler_without_actions_yields_no_context() {
        let handler: Handler<&'static str, i32, i32> = Handler {
            target: Some("Done"),
            guard: None,
            actions: Vec::new(),
        };

        assert_eq!(handler.run(&1, &0).unwrap(), None);
    }

    #[test]
    fn failing_action_aborts_fold() {
        let mut handler = add();
        handler
            .actions
            .push(Arc::new(|_: &i32, _: &i32| {
                Err::<i32, _>(MachineError::ActionFailed("nope".into()))
            }));
        handler.actions.extend(double().actions);

        assert_eq!(
            handler.run(&1, &1),
            Err(MachineError::ActionFailed("nope".into()))
        );
    }

    #[test]
    fn guard_controls_can_run() {
        let mut handler = add();
        handler.guard = Some(Guard::new(|ctx: &i32, _: &i32| *ctx < 10));

        assert!(handler.can_run(&1, &0));
        assert!(!handler.can_run(&10, &0));
    }

    #[test]
    fn own_handlers_win_over_defaults() {
        let defaults: BTreeMap<String, Handler<&'static str, i32, i32>> = [
            ("ADD".to_string(), add()),
            ("DOUBLE".to_string(), double()),
        ]
        .into_iter()
        .collect();

        let node: Node = StateNode::new()
            .on("ADD", double())
            .with_defaults(defaults);

        assert_eq!(node.event_types().collect::<Vec<_>>(), vec!["ADD", "DOUBLE"]);
        let handler = node.handler("ADD").unwrap();
        assert_eq!(handler.run(&3, &100).unwrap(), Some(6));
    }
}
