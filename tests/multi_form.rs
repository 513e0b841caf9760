//! Several form models sharing one host machine.

use formset::builder::{guarded_goto, MachineBuilder};
use formset::form::{
    create_form_model, FieldPolicy, FieldValues, FormConfig, FormContext, FormError, FormEvent,
    FormEventSource, FormModel, FormState, ValidationRules,
};
use formset::machine::{Dispatch, Machine, MachineError, MachineEvent, StateNode};
use formset::state_enum;

state_enum! {
    enum Wizard {
        Profile,
        Done,
    }
    final: [Done]
}

#[derive(Clone, Debug, PartialEq)]
struct AppContext {
    profile: FormState<String>,
    prefs: FormState<u32>,
    finished_at_step: Option<u32>,
}

impl FormContext<String> for AppContext {
    fn form_state(&self, key: &str) -> Option<&FormState<String>> {
        (key == "profile").then_some(&self.profile)
    }

    fn with_form_state(&self, key: &str, state: FormState<String>) -> Option<Self> {
        (key == "profile").then(|| AppContext {
            profile: state,
            ..self.clone()
        })
    }
}

impl FormContext<u32> for AppContext {
    fn form_state(&self, key: &str) -> Option<&FormState<u32>> {
        (key == "prefs").then_some(&self.prefs)
    }

    fn with_form_state(&self, key: &str, state: FormState<u32>) -> Option<Self> {
        (key == "prefs").then(|| AppContext {
            prefs: state,
            ..self.clone()
        })
    }
}

#[derive(Clone, Debug)]
enum AppEvent {
    Profile(FormEvent<String>),
    Prefs(FormEvent<u32>),
    Finish,
}

impl MachineEvent for AppEvent {
    fn event_type(&self) -> &str {
        match self {
            Self::Profile(event) => event.event_type(),
            Self::Prefs(event) => event.event_type(),
            Self::Finish => "FINISH",
        }
    }
}

impl FormEventSource<String> for AppEvent {
    fn form_event(&self) -> Option<&FormEvent<String>> {
        match self {
            Self::Profile(event) => Some(event),
            _ => None,
        }
    }
}

impl FormEventSource<u32> for AppEvent {
    fn form_event(&self) -> Option<&FormEvent<u32>> {
        match self {
            Self::Prefs(event) => Some(event),
            _ => None,
        }
    }
}

struct Forms {
    profile: FormModel<String>,
    prefs: FormModel<u32>,
}

fn forms() -> Forms {
    let profile_values: FieldValues<String> = [
        ("name".to_string(), String::new()),
        ("email".to_string(), String::new()),
    ]
    .into_iter()
    .collect();
    let profile_rules = ValidationRules::new()
        .require("name", |v: &String| !v.is_empty(), "Name is required")
        .require("email", |v: &String| v.contains('@'), "Email is invalid")
        .build();

    let prefs_values: FieldValues<u32> = [("volume".to_string(), 5)].into_iter().collect();
    let prefs_rules = ValidationRules::new()
        .require("volume", |v: &u32| *v <= 10, "Volume goes up to 10")
        .build();

    Forms {
        profile: create_form_model(
            "profile",
            FormConfig::new(profile_values).validator_arc(profile_rules),
        ),
        prefs: create_form_model(
            "prefs",
            FormConfig::new(prefs_values)
                .validator_arc(prefs_rules)
                .field_policy(FieldPolicy::Strict),
        ),
    }
}

fn wizard(forms: &Forms) -> Machine<Wizard, AppContext, AppEvent> {
    let profile = forms.profile.clone();
    let prefs = forms.prefs.clone();
    let finish = guarded_goto(Wizard::Done, move |ctx: &AppContext, _: &AppEvent| {
        profile.selectors().is_valid::<String, _>(ctx).unwrap_or(false)
            && prefs.selectors().is_valid::<u32, _>(ctx).unwrap_or(false)
    });

    let node = StateNode::new().on("FINISH", finish);
    let node = forms.prefs.create_state(forms.profile.create_state(node));

    MachineBuilder::new()
        .initial(Wizard::Profile)
        .context(AppContext {
            profile: forms.profile.initial_context().clone(),
            prefs: forms.prefs.initial_context().clone(),
            finished_at_step: None,
        })
        .state(Wizard::Profile, node)
        .state(Wizard::Done, StateNode::new())
        .build()
        .unwrap()
}

#[test]
fn forms_update_only_their_own_slot() {
    let forms = forms();
    let mut machine = wizard(&forms);
    let before = machine.context().clone();

    machine
        .send(&AppEvent::Profile(
            forms.profile.events().change("name", "Ada".to_string()),
        ))
        .unwrap();

    assert_eq!(machine.context().profile.values["name"], "Ada");
    assert_eq!(machine.context().prefs, before.prefs);
    assert_eq!(machine.context().finished_at_step, None);

    machine
        .send(&AppEvent::Prefs(forms.prefs.events().change("volume", 11)))
        .unwrap();

    assert_eq!(
        machine.context().prefs.errors.get("volume"),
        Some("Volume goes up to 10")
    );
    assert_eq!(machine.context().profile.values["name"], "Ada");
}

#[test]
fn rules_report_every_invalid_field_at_once() {
    let forms = forms();
    let machine = wizard(&forms);

    let errors = &machine.context().profile.errors;
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("email"), Some("Email is invalid"));
}

#[test]
fn wizard_finishes_once_both_forms_are_valid() {
    let forms = forms();
    let mut machine = wizard(&forms);

    assert_eq!(machine.send(&AppEvent::Finish).unwrap(), Dispatch::Blocked);

    for event in [
        forms.profile.events().change("name", "Ada".to_string()),
        forms.profile.events().blur("email", "ada@example.com".to_string()),
    ] {
        machine.send(&AppEvent::Profile(event)).unwrap();
    }

    assert_eq!(
        machine.send(&AppEvent::Finish).unwrap(),
        Dispatch::Transitioned {
            from: Wizard::Profile,
            to: Wizard::Done,
        }
    );
    assert!(machine.is_final());
}

#[test]
fn strict_form_rejects_unknown_field_and_keeps_context() {
    let forms = forms();
    let mut machine = wizard(&forms);
    let before = machine.context().clone();

    let result = machine.send(&AppEvent::Prefs(forms.prefs.events().focus("bass")));

    assert_eq!(
        result,
        Err(MachineError::Form(FormError::UnknownField {
            key: "prefs".to_string(),
            field: "bass".to_string(),
        }))
    );
    assert_eq!(machine.context(), &before);
}

#[test]
fn permissive_form_accepts_unknown_field() {
    let forms = forms();
    let mut machine = wizard(&forms);

    machine
        .send(&AppEvent::Profile(forms.profile.events().focus("nickname")))
        .unwrap();

    assert_eq!(
        machine.context().profile.touched.get("nickname"),
        Some(&true)
    );
    assert!(forms
        .profile
        .selectors()
        .is_dirty::<String, _>(machine.context())
        .unwrap());
    assert!(forms
        .prefs
        .selectors()
        .is_pristine::<u32, _>(machine.context())
        .unwrap());
}

#[test]
fn mismatched_event_source_is_reported() {
    let forms = forms();
    let mut machine = wizard(&forms);

    // A prefs-tagged event wrapped as a profile event cannot reach the prefs form.
    let misrouted = AppEvent::Profile(FormEvent {
        event_type: "prefs.FOCUS".to_string(),
        payload: formset::form::EventPayload::Focus {
            name: "volume".to_string(),
        },
    });

    assert_eq!(
        machine.send(&misrouted),
        Err(MachineError::Form(FormError::UnexpectedEvent {
            key: "prefs".to_string(),
            event_type: "prefs.FOCUS".to_string(),
        }))
    );
}
