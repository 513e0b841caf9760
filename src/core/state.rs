//! Identity of host machine state nodes.
//!
//! A host machine moves between named state nodes (`Editing`, `Submitting`,
//! ...). Form models never look at these; they only decorate the nodes'
//! event tables.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for host machine state nodes.
///
/// All methods are pure. A state value identifies one node of the host
/// machine; the node's handlers are looked up by [`State::name`].
///
/// # Example
///
/// ```rust
/// use formset::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LoginState {
///     Editing,
///     Submitting,
///     LoggedIn,
/// }
///
/// impl State for LoginState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Editing => "Editing",
///             Self::Submitting => "Submitting",
///             Self::LoggedIn => "LoggedIn",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::LoggedIn)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the state node. Handlers are registered under this name.
    fn name(&self) -> &str;

    /// Check if this is a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Editing,
        Submitting,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Editing => "Editing",
                Self::Submitting => "Submitting",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Editing.name(), "Editing");
        assert_eq!(TestState::Submitting.name(), "Submitting");
        assert_eq!(TestState::Done.name(), "Done");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Editing.is_final());
        assert!(!TestState::Submitting.is_final());
        assert!(TestState::Done.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Submitting;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
