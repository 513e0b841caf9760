//! Formset: namespaced form models for pure functional state machines
//!
//! A form model bundles everything one form needs inside a larger state
//! machine: its initial state, typed event constructors, the handlers that
//! merge change/blur/focus events into state, and valid/dirty/pristine
//! selectors. Everything is addressed by a caller-chosen key, so many forms
//! can live in one machine's context without colliding.
//!
//! # Core Concepts
//!
//! - **Form model**: built by [`create_form_model`] from initial values and an optional validator
//! - **Host machine**: [`Machine`] dispatches events to state node handlers by exact tag
//! - **Decoration**: [`FormModel::create_state`] installs the default form handlers on a node
//!
//! # Example
//!
//! ```rust
//! use formset::builder::MachineBuilder;
//! use formset::form::{create_form_model, FieldErrors, FieldValues, FormConfig, FormEvent, FormState};
//! use formset::machine::StateNode;
//! use formset::state_enum;
//! use std::collections::BTreeMap;
//!
//! state_enum! {
//!     enum LoginState {
//!         Editing,
//!     }
//! }
//!
//! let initial: FieldValues<String> = [
//!     ("username".to_string(), String::new()),
//!     ("password".to_string(), String::new()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let login = create_form_model(
//!     "loginForm",
//!     FormConfig::new(initial).validate(|values: &FieldValues<String>| {
//!         let mut errors = FieldErrors::new();
//!         if values["username"].is_empty() {
//!             errors.set("username", Some("You must provide a username".to_string()));
//!         }
//!         errors
//!     }),
//! );
//!
//! let context: BTreeMap<String, FormState<String>> =
//!     [(login.key().to_string(), login.initial_context().clone())]
//!         .into_iter()
//!         .collect();
//!
//! let mut machine = MachineBuilder::<_, _, FormEvent<String>>::new()
//!     .initial(LoginState::Editing)
//!     .context(context)
//!     .state(LoginState::Editing, login.create_state(StateNode::new()))
//!     .build()
//!     .unwrap();
//!
//! machine
//!     .send(&login.events().change("username", "ada".to_string()))
//!     .unwrap();
//! assert!(login.selectors().is_valid(machine.context()).unwrap());
//! ```

pub mod builder;
pub mod core;
pub mod form;
pub mod machine;

// Re-export commonly used types
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use form::{create_form_model, FormConfig, FormEvent, FormModel, FormState};
pub use machine::{Dispatch, Machine, MachineError, StateNode};
