//! When steps for contact submission BDD scenarios.

use super::world::{ContactWorld, contact_body, run_async};
use crate::support;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::{Value, json};

fn submit(world: &mut ContactWorld, body: Value) -> Result<(), eyre::Report> {
    let request = support::post_json("/api/contact", body.to_string())?;
    let response = run_async(support::send(world.app.clone(), request))
        .wrap_err("send contact submission")?;
    world.submitted = Some(body);
    world.response = Some(response);
    Ok(())
}

#[when(r#"a contact message from "{name}" at "{email}" saying "{message}" is submitted"#)]
fn a_message_is_submitted(
    world: &mut ContactWorld,
    name: String,
    email: String,
    message: String,
) -> Result<(), eyre::Report> {
    submit(world, contact_body(&name, &email, &message))
}

#[when("an empty contact form is submitted")]
fn an_empty_form_is_submitted(world: &mut ContactWorld) -> Result<(), eyre::Report> {
    submit(world, json!({}))
}
