//! History of host state changes.
//!
//! Only transitions that move the host machine to a target node are
//! recorded. Context-only handlers (such as form value changes) leave the
//! history untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single host state change.
///
/// # Example
///
/// ```rust
/// use formset::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LoginState {
///     Editing,
///     Submitting,
/// }
///
/// impl State for LoginState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Editing => "Editing",
///             Self::Submitting => "Submitting",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: LoginState::Editing,
///     to: LoginState::Submitting,
///     event: "loginForm.SUBMIT".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Tag of the event that triggered the change
    pub event: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of host state changes.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Event tags that caused each recorded transition, in order.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.event.as_str()).collect()
    }

    /// All recorded transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
