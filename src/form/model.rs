//! The form model factory.
//!
//! [`create_form_model`] closes over a key and a configuration and returns a
//! [`FormModel`]: the initial form state, event constructors, a state node
//! decorator and selectors, all namespaced under the key.

use super::behaviors::{apply_focus, apply_value, check_field};
use super::context::{FormContext, FormEventSource};
use super::error::FormError;
use super::events::{EventKind, EventPayload, FormEvent, FormEvents};
use super::selectors::FormSelectors;
use super::state::{
    make_initial_state_from_config, FieldPolicy, FormConfig, FormState, Validator,
};
use crate::machine::{Handler, MachineEvent, StateNode};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything a state machine needs to host one form.
///
/// A model is immutable; cloning it is cheap apart from the initial values.
///
/// # Example
///
/// ```rust
/// use formset::form::{create_form_model, FieldErrors, FieldValues, FormConfig, FormState};
/// use std::collections::BTreeMap;
///
/// let initial: FieldValues<String> = [("username".to_string(), String::new())]
///     .into_iter()
///     .collect();
/// let model = create_form_model(
///     "loginForm",
///     FormConfig::new(initial).validate(|values: &FieldValues<String>| {
///         let mut errors = FieldErrors::new();
///         if values["username"].is_empty() {
///             errors.set("username", Some("You must provide a username".to_string()));
///         }
///         errors
///     }),
/// );
///
/// let mut context: BTreeMap<String, FormState<String>> = BTreeMap::new();
/// context.insert(model.key().to_string(), model.initial_context().clone());
/// assert!(!model.selectors().is_valid(&context).unwrap());
///
/// let event = model.events().change("username", "ada".to_string());
/// let context = model.reduce(&context, &event).unwrap();
/// assert!(model.selectors().is_valid(&context).unwrap());
/// ```
#[derive(Clone)]
pub struct FormModel<V> {
    initial_context: FormState<V>,
    events: FormEvents,
    selectors: FormSelectors,
    reducer: Reducer<V>,
}

/// Build a form model namespaced under `key`.
///
/// Two models sharing a key inside one host collide; keeping keys unique is
/// the caller's job.
pub fn create_form_model<V: Clone>(
    key: impl Into<Arc<str>>,
    config: FormConfig<V>,
) -> FormModel<V> {
    let key: Arc<str> = key.into();
    FormModel {
        initial_context: make_initial_state_from_config(&config),
        events: FormEvents::new(Arc::clone(&key)),
        selectors: FormSelectors::new(Arc::clone(&key)),
        reducer: Reducer {
            key,
            validate: config.validator().cloned(),
            policy: config.policy(),
        },
    }
}

impl<V: Clone> FormModel<V> {
    pub fn key(&self) -> &str {
        &self.reducer.key
    }

    /// Form state to place in the host context under [`FormModel::key`].
    pub fn initial_context(&self) -> &FormState<V> {
        &self.initial_context
    }

    pub fn events(&self) -> &FormEvents {
        &self.events
    }

    pub fn selectors(&self) -> &FormSelectors {
        &self.selectors
    }

    /// Apply the default behavior for a change, blur or focus event.
    ///
    /// Submit events, and events namespaced under another key, are rejected
    /// with [`FormError::UnexpectedEvent`].
    pub fn reduce<C: FormContext<V>>(
        &self,
        context: &C,
        event: &FormEvent<V>,
    ) -> Result<C, FormError> {
        self.reducer.reduce(context, event)
    }

    /// Install the default `<key>.CHANGE`, `<key>.BLUR` and `<key>.FOCUS`
    /// handlers on `node`.
    ///
    /// Handlers already present on `node` for those tags are kept and the
    /// corresponding default is discarded.
    pub fn create_state<S, C, E>(&self, node: StateNode<S, C, E>) -> StateNode<S, C, E>
    where
        V: 'static,
        C: FormContext<V> + 'static,
        E: MachineEvent + FormEventSource<V> + 'static,
    {
        let key = self.key();
        let defaults: BTreeMap<String, Handler<S, C, E>> =
            [EventKind::Change, EventKind::Blur, EventKind::Focus]
                .into_iter()
                .map(|kind| {
                    let reducer = self.reducer.clone();
                    let handler = Handler::assign(move |context: &C, event: &E| {
                        let form_event =
                            event
                                .form_event()
                                .ok_or_else(|| FormError::UnexpectedEvent {
                                    key: reducer.key.to_string(),
                                    event_type: event.event_type().to_string(),
                                })?;
                        Ok(reducer.reduce(context, form_event)?)
                    });
                    (kind.tag(key), handler)
                })
                .collect();
        node.with_defaults(defaults)
    }
}

/// The captured pieces the behaviors need; shared by every installed handler.
struct Reducer<V> {
    key: Arc<str>,
    validate: Option<Validator<V>>,
    policy: FieldPolicy,
}

impl<V> Clone for Reducer<V> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            validate: self.validate.clone(),
            policy: self.policy,
        }
    }
}

impl<V: Clone> Reducer<V> {
    fn reduce<C: FormContext<V>>(
        &self,
        context: &C,
        event: &FormEvent<V>,
    ) -> Result<C, FormError> {
        let state = context
            .form_state(&self.key)
            .ok_or_else(|| self.missing_state())?;

        let next = match (event.kind(&self.key), &event.payload) {
            (Some(EventKind::Change | EventKind::Blur), EventPayload::Field { name, value }) => {
                check_field(&self.key, self.policy, state, name)?;
                apply_value(state, name, value.clone(), self.validate.as_ref())
            }
            (Some(EventKind::Focus), EventPayload::Focus { name }) => {
                check_field(&self.key, self.policy, state, name)?;
                apply_focus(state, name)
            }
            _ => {
                return Err(FormError::UnexpectedEvent {
                    key: self.key.to_string(),
                    event_type: event.event_type.clone(),
                })
            }
        };

        context
            .with_form_state(&self.key, next)
            .ok_or_else(|| self.missing_state())
    }

    fn missing_state(&self) -> FormError {
        FormError::MissingState {
            key: self.key.to_string(),
        }
    }
}
