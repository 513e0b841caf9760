//! Builder for event handlers.

use crate::builder::error::BuildError;
use crate::core::Guard;
use crate::machine::{Action, Handler, MachineError};
use std::sync::Arc;

/// Builder for constructing handlers with a fluent API.
pub struct HandlerBuilder<S, C, E> {
    target: Option<S>,
    guard: Option<Guard<C, E>>,
    actions: Vec<Action<C, E>>,
}

impl<S, C, E> HandlerBuilder<S, C, E> {
    pub fn new() -> Self {
        Self {
            target: None,
            guard: None,
            actions: Vec::new(),
        }
    }

    /// Move to `state` after the actions ran (optional).
    pub fn target(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<C, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Append a context action. Actions run in the order they were added.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &E) -> Result<C, MachineError> + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// Build the handler.
    pub fn build(self) -> Result<Handler<S, C, E>, BuildError> {
        if self.target.is_none() && self.actions.is_empty() {
            return Err(BuildError::EmptyHandler);
        }

        Ok(Handler {
            target: self.target,
            guard: self.guard,
            actions: self.actions,
        })
    }
}

impl<S, C, E> Default for HandlerBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_handler() {
        let result = HandlerBuilder::<&str, u8, u8>::new().build();

        assert!(matches!(result, Err(BuildError::EmptyHandler)));
    }

    #[test]
    fn guard_alone_is_still_empty() {
        let result = HandlerBuilder::<&str, u8, u8>::new()
            .when(|_, _| true)
            .build();

        assert!(matches!(result, Err(BuildError::EmptyHandler)));
    }

    #[test]
    fn target_only_handler_builds() {
        let handler = HandlerBuilder::<&str, u8, u8>::new()
            .target("Done")
            .build()
            .unwrap();

        assert_eq!(handler.target, Some("Done"));
        assert!(handler.actions.is_empty());
    }

    #[test]
    fn fluent_api_builds_handler() {
        let handler = HandlerBuilder::<&str, u8, u8>::new()
            .when(|ctx: &u8, _: &u8| *ctx < 200)
            .action(|ctx: &u8, by: &u8| Ok(ctx + by))
            .action(|ctx: &u8, _: &u8| Ok(ctx * 2))
            .build()
            .unwrap();

        assert!(handler.can_run(&1, &0));
        assert!(!handler.can_run(&250, &0));
        assert_eq!(handler.run(&1, &2).unwrap(), Some(6));
    }
}
