//! Guard predicates for event handlers.
//!
//! A guard decides, from the current context and the incoming event,
//! whether a handler is allowed to run. Guards never change anything.

use std::sync::Arc;

/// Pure predicate over a host context and an event.
///
/// # Example
///
/// ```rust
/// use formset::core::Guard;
///
/// let only_positive = Guard::new(|count: &i32, delta: &i32| count + delta >= 0);
///
/// assert!(only_positive.check(&3, &-2));
/// assert!(!only_positive.check(&1, &-2));
/// ```
pub struct Guard<C, E> {
    predicate: Arc<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }
}

impl<C, E> Clone for Guard<C, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Ctx {
        submitted: bool,
    }

    #[test]
    fn guard_reads_context() {
        let guard = Guard::new(|ctx: &Ctx, _event: &&str| !ctx.submitted);

        assert!(guard.check(&Ctx { submitted: false }, &"SUBMIT"));
        assert!(!guard.check(&Ctx { submitted: true }, &"SUBMIT"));
    }

    #[test]
    fn guard_reads_event() {
        let guard = Guard::new(|_ctx: &Ctx, event: &&str| event.ends_with(".SUBMIT"));
        let ctx = Ctx { submitted: false };

        assert!(guard.check(&ctx, &"login.SUBMIT"));
        assert!(!guard.check(&ctx, &"login.CHANGE"));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|ctx: &Ctx, _event: &&str| ctx.submitted);
        let ctx = Ctx { submitted: true };

        assert_eq!(guard.check(&ctx, &"x"), guard.check(&ctx, &"x"));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|ctx: &Ctx, _event: &&str| ctx.submitted);
        let cloned = guard.clone();
        let ctx = Ctx { submitted: true };

        assert_eq!(guard.check(&ctx, &"x"), cloned.check(&ctx, &"x"));
    }
}
