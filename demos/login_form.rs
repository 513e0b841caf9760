//! Login form hosted in a two-state machine.
//!
//! Run with `RUST_LOG=debug` to see every dispatch.

use formset::builder::{HandlerBuilder, MachineBuilder};
use formset::form::{
    create_form_model, FieldValues, FormConfig, FormEvent, FormState, ValidationRules,
};
use formset::machine::StateNode;
use formset::state_enum;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum LoginState {
        Editing,
        LoggedIn,
    }
    final: [LoggedIn]
}

type Ctx = BTreeMap<String, FormState<String>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let initial: FieldValues<String> = [
        ("username".to_string(), String::new()),
        ("password".to_string(), String::new()),
    ]
    .into_iter()
    .collect();
    let rules = ValidationRules::new()
        .require("username", |v: &String| !v.is_empty(), "You must provide a username")
        .require("password", |v: &String| !v.is_empty(), "You must provide a password")
        .build();
    let login = create_form_model("loginForm", FormConfig::new(initial).validator_arc(rules));

    let selectors = login.selectors().clone();
    let submit = HandlerBuilder::new()
        .target(LoginState::LoggedIn)
        .when(move |ctx: &Ctx, _: &FormEvent<String>| selectors.is_valid(ctx).unwrap_or(false))
        .build()?;

    let context: Ctx = [(login.key().to_string(), login.initial_context().clone())]
        .into_iter()
        .collect();
    let mut machine = MachineBuilder::new()
        .initial(LoginState::Editing)
        .context(context)
        .state(
            LoginState::Editing,
            login.create_state(StateNode::new().on("loginForm.SUBMIT", submit)),
        )
        .state(LoginState::LoggedIn, StateNode::new())
        .build()?;

    let events = login.events();
    for event in [
        events.focus("username"),
        events.change("username", "ada".to_string()),
        events.focus("password"),
        events.blur("password", "analytical-engine".to_string()),
    ] {
        machine.send(&event)?;
        let form = &machine.context()[login.key()];
        println!("{} -> errors: {:?}", event.event_type(), form.errors);
    }

    let values = machine.context()[login.key()].values.clone();
    let outcome = machine.send(&events.submit(values))?;
    println!("submit -> {outcome:?}, final: {}", machine.is_final());

    Ok(())
}
