//! Namespaced form models.
//!
//! A form model keeps one form's values, validation errors and touched
//! flags in a slot of a host machine's context, addressed by a key:
//!
//! - **State**: `FormState` derived from initial values and an optional validator
//! - **Events**: `<key>.CHANGE`, `<key>.BLUR`, `<key>.FOCUS`, `<key>.SUBMIT`
//! - **Behaviors**: pure functions from the previous state to the next one
//! - **Selectors**: valid / dirty / pristine predicates
//!
//! Behaviors assume the host applies them one event at a time.

mod behaviors;
mod context;
mod error;
mod events;
mod model;
mod rules;
mod selectors;
mod state;
mod values;

pub use behaviors::{apply_focus, apply_value};
pub use context::{FormContext, FormEventSource};
pub use error::FormError;
pub use events::{EventKind, EventPayload, FormEvent, FormEvents};
pub use model::{create_form_model, FormModel};
pub use rules::{FieldCheck, FieldError, ValidationRules};
pub use selectors::FormSelectors;
pub use state::{make_initial_state_from_config, FieldPolicy, FormConfig, FormState, Validator};
pub use values::{FieldErrors, FieldValues, Touched};
