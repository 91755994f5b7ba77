//! Then steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use rstest_bdd_macros::then;
use vitrine::document_store::{
    domain::{CollectionName, DocumentId},
    ports::DocumentStore,
};

fn contact_collection() -> Result<CollectionName, eyre::Report> {
    CollectionName::new("contactmessage").map_err(|err| eyre::eyre!("bad collection: {err}"))
}

#[then("the response status is {status:u16}")]
fn response_status_is(world: &ContactWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.response()?.status.as_u16();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, got {actual}"));
    }
    Ok(())
}

#[then("the response carries a document id")]
fn response_carries_id(world: &ContactWorld) -> Result<(), eyre::Report> {
    let body = world.response_json()?;
    if body["status"] != "ok" {
        return Err(eyre::eyre!("expected status ok, got {body}"));
    }
    let id = body["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("response has no string id: {body}"))?;
    if id.is_empty() {
        return Err(eyre::eyre!("response id is empty"));
    }
    Ok(())
}

#[then("the contactmessage collection document count is {count:usize}")]
fn collection_holds(world: &ContactWorld, count: usize) -> Result<(), eyre::Report> {
    let store = world
        .store
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no store connected in scenario world"))?;
    let actual = store
        .count(&contact_collection()?)
        .map_err(|err| eyre::eyre!("count failed: {err}"))?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} stored messages, found {actual}"));
    }
    Ok(())
}

#[then("the stored message matches the submission")]
fn stored_message_matches(world: &ContactWorld) -> Result<(), eyre::Report> {
    let store = world
        .store
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no store connected in scenario world"))?;
    let submitted = world
        .submitted
        .as_ref()
        .ok_or_else(|| eyre::eyre!("nothing was submitted"))?;
    let body = world.response_json()?;
    let id: DocumentId = body["id"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("response has no string id"))?
        .parse::<DocumentId>()
        .map_err(|err| eyre::eyre!("id is not a UUID: {err}"))?;

    let document = run_async(store.find_document(&contact_collection()?, id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("document {id} not found"))?;
    for key in ["name", "email", "message"] {
        if document.body().get(key) != submitted.get(key) {
            return Err(eyre::eyre!(
                "stored {key} differs: {:?} vs {:?}",
                document.body().get(key),
                submitted.get(key)
            ));
        }
    }
    Ok(())
}

#[then(r#"the rejected fields are "{fields}""#)]
fn rejected_fields_are(world: &ContactWorld, fields: String) -> Result<(), eyre::Report> {
    let body = world.response_json()?;
    let details = body["detail"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("response has no detail list: {body}"))?;
    let reported: Vec<&str> = details
        .iter()
        .filter_map(|detail| detail["loc"][1].as_str())
        .collect();
    let expected: Vec<&str> = fields.split(", ").collect();
    if reported != expected {
        return Err(eyre::eyre!("expected rejected {expected:?}, got {reported:?}"));
    }
    Ok(())
}

#[then(r#"the response detail mentions "{text}""#)]
fn detail_mentions(world: &ContactWorld, text: String) -> Result<(), eyre::Report> {
    let body = world.response_json()?;
    let detail = body["detail"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("response has no detail text: {body}"))?;
    if !detail.contains(&text) {
        return Err(eyre::eyre!("expected detail to mention '{text}', got '{detail}'"));
    }
    Ok(())
}
