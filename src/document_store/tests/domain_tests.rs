//! Unit tests for document store domain types.

use crate::document_store::domain::{
    CollectionName, DocumentDomainError, DocumentId, NewDocument,
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

// ── CollectionName validation ──────────────────────────────────────

#[rstest]
#[case("contactmessage")]
#[case("contact_message")]
#[case("projects_v2")]
#[case("_private")]
fn valid_collection_names_are_accepted(#[case] input: &str) {
    let name = CollectionName::new(input);
    assert!(name.is_ok(), "expected '{input}' to be valid");
    assert_eq!(name.expect("valid name").as_str(), input);
}

#[rstest]
fn collection_name_is_trimmed() {
    let name = CollectionName::new("  contactmessage ").expect("should accept after trim");
    assert_eq!(name.as_str(), "contactmessage");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_collection_name_is_rejected(#[case] input: &str) {
    assert_eq!(
        CollectionName::new(input),
        Err(DocumentDomainError::EmptyCollectionName)
    );
}

#[rstest]
#[case("ContactMessage")]
#[case("contact-message")]
#[case("contact message")]
#[case("contact\"; DROP TABLE x; --")]
#[case("1contacts")]
#[case("Contacts")]
#[case("café_notes")]
#[case("contacts.public")]
fn unsafe_collection_names_are_rejected(#[case] input: &str) {
    assert!(matches!(
        CollectionName::new(input),
        Err(DocumentDomainError::InvalidCollectionName(_))
    ));
}

#[rstest]
#[case(63, true)]
#[case(64, false)]
fn collection_name_length_boundary(#[case] length: usize, #[case] expected_ok: bool) {
    let result = CollectionName::new("c".repeat(length));
    if expected_ok {
        assert!(result.is_ok(), "expected length {length} to be accepted");
    } else {
        assert!(
            matches!(result, Err(DocumentDomainError::CollectionNameTooLong(_))),
            "expected length {length} to be rejected"
        );
    }
}

// ── NewDocument construction ───────────────────────────────────────

#[rstest]
fn object_values_become_documents() {
    let document = NewDocument::from_value(json!({"name": "Ada"}), &DefaultClock)
        .expect("object should be accepted");
    assert_eq!(document.body().get("name"), Some(&json!("Ada")));
}

#[rstest]
#[case(json!(null), "null")]
#[case(json!("text"), "a string")]
#[case(json!([1, 2]), "an array")]
#[case(json!(7), "a number")]
fn non_object_values_are_rejected(
    #[case] value: serde_json::Value,
    #[case] kind: &'static str,
) {
    let result = NewDocument::from_value(value, &DefaultClock);
    assert_eq!(result, Err(DocumentDomainError::NotAnObject(kind)));
}

#[rstest]
fn stored_document_keeps_body_and_timestamp() {
    let document = NewDocument::from_value(json!({"email": "ada@example.com"}), &DefaultClock)
        .expect("object should be accepted");
    let created_at = document.created_at();
    let id = DocumentId::generate();

    let stored = document.into_stored(id);

    assert_eq!(stored.id(), id);
    assert_eq!(stored.created_at(), created_at);
    assert_eq!(stored.text_field("email"), Some("ada@example.com"));
    assert_eq!(stored.text_field("missing"), None);
}

#[rstest]
fn document_id_displays_as_hyphenated_uuid() {
    let id = DocumentId::generate();
    let rendered = id.to_string();
    assert_eq!(rendered.len(), 36);
    assert_eq!(rendered, id.into_inner().hyphenated().to_string());
}

#[rstest]
fn generated_document_ids_are_distinct_v4_uuids() {
    let first = DocumentId::generate();
    let second = DocumentId::generate();

    assert_ne!(first, second);
    assert_eq!(first.into_inner().get_version_num(), 4);
}

#[rstest]
fn document_id_parses_its_display_form() {
    let id = DocumentId::generate();

    let parsed: DocumentId = id.to_string().parse().expect("display form parses");

    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<DocumentId>().is_err());
}
