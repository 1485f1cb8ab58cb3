use jsonapi_client::model::document::{Document, PrimaryData};
use jsonapi_client::model::error::Error;
use jsonapi_client::model::relationship::{Linkage, Relationship};
use jsonapi_client::model::resource::{Resource, ResourceIdentifier};
use serde_json::json;
use std::collections::HashMap;

#[test]
fn to_one_linkage_serializes_as_an_object() {
    let _ = env_logger::try_init();

    let relationship = Relationship::to_one(ResourceIdentifier::new("company", "companyID123"));
    assert_eq!(
        serde_json::to_string(&relationship).unwrap(),
        r#"{"data":{"type":"company","id":"companyID123"}}"#
    );
}

#[test]
fn single_element_to_many_linkage_stays_an_array() {
    let _ = env_logger::try_init();

    let relationship = Relationship::to_many(vec![ResourceIdentifier::new("comments", "1")]);
    assert_eq!(
        serde_json::to_string(&relationship).unwrap(),
        r#"{"data":[{"type":"comments","id":"1"}]}"#
    );
}

#[test]
fn empty_to_one_linkage_serializes_as_null() {
    let relationship = Relationship::empty_to_one();
    assert_eq!(serde_json::to_string(&relationship).unwrap(), r#"{"data":null}"#);
}

#[test]
fn linkage_decodes_object_array_and_null() {
    let _ = env_logger::try_init();

    let to_one: Relationship =
        serde_json::from_str(r#"{"data":{"type":"company","id":"1"}}"#).unwrap();
    assert_eq!(to_one.data, Linkage::ToOne(Some(ResourceIdentifier::new("company", "1"))));

    let to_many: Relationship =
        serde_json::from_str(r#"{"data":[{"type":"comments","id":"1"}]}"#).unwrap();
    assert_eq!(to_many.data, Linkage::ToMany(vec![ResourceIdentifier::new("comments", "1")]));

    let empty: Relationship = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert_eq!(empty.data, Linkage::ToOne(None));
}

#[test]
fn linkage_normalizes_to_an_identifier_sequence() {
    let one = Linkage::ToOne(Some(ResourceIdentifier::new("company", "1")));
    assert_eq!(one.identifiers(), vec![ResourceIdentifier::new("company", "1")]);
    assert!(!one.is_empty());

    let none = Linkage::ToOne(None);
    assert!(none.identifiers().is_empty());
    assert!(none.is_empty());

    let many = Linkage::ToMany(vec![
        ResourceIdentifier::new("comments", "1"),
        ResourceIdentifier::new("comments", "2"),
    ]);
    assert_eq!(many.identifiers().len(), 2);
}

#[test]
fn resource_omits_absent_sections() {
    let _ = env_logger::try_init();

    let resource = Resource::new("user", "1", json!(null));
    assert_eq!(serde_json::to_string(&resource).unwrap(), r#"{"type":"user","id":"1"}"#);
}

#[test]
fn resource_keeps_an_explicit_empty_relationships_section() {
    let mut resource = Resource::new("user", "1", json!(null));
    resource.relationships = Some(HashMap::new());
    assert_eq!(
        serde_json::to_string(&resource).unwrap(),
        r#"{"type":"user","id":"1","relationships":{}}"#
    );

    let parsed: Resource =
        serde_json::from_str(r#"{"type":"user","id":"1","relationships":{}}"#).unwrap();
    assert_eq!(parsed.relationships, Some(HashMap::new()));

    let absent: Resource = serde_json::from_str(r#"{"type":"user","id":"1"}"#).unwrap();
    assert_eq!(absent.relationships, None);
}

#[test]
fn attributes_stay_opaque_until_the_caller_decodes_them() {
    let _ = env_logger::try_init();

    let resource: Resource = serde_json::from_str(
        r#"{"type":"user","id":"1","attributes":{"name":"rob","unknown_field":true}}"#,
    )
    .unwrap();
    assert_eq!(resource.attributes.raw(), &json!({"name": "rob", "unknown_field": true}));

    let decoded: HashMap<String, serde_json::Value> = resource.attributes.decode().unwrap();
    assert_eq!(decoded["name"], json!("rob"));
}

#[test]
fn relate_creates_the_section_on_first_use() {
    let mut resource = Resource::new("user", "1", json!({"name": "rob"}));
    assert_eq!(resource.relationships, None);

    resource.relate("company", Relationship::to_one(ResourceIdentifier::new("company", "9")));
    assert_eq!(resource.identifier(), ResourceIdentifier::new("user", "1"));

    let relationships = resource.relationships.as_ref().unwrap();
    assert_eq!(relationships.len(), 1);
    assert_eq!(
        relationships["company"],
        Relationship::to_one(ResourceIdentifier::new("company", "9"))
    );
}

#[test]
fn document_branches_are_explicit() {
    let _ = env_logger::try_init();

    let single: Document =
        serde_json::from_str(r#"{"data":{"type":"user","id":"1"}}"#).unwrap();
    assert!(single.clone().into_single().is_ok());
    assert!(single.into_multiple().is_err());

    let list: Document = serde_json::from_str(r#"{"data":[{"type":"user","id":"1"}]}"#).unwrap();
    assert!(list.clone().into_multiple().is_ok());
    assert!(list.into_single().is_err());

    let null: Document = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert_eq!(null.data, None);
}

#[test]
fn document_serializes_the_envelope() {
    let doc = Document::single(Resource::new("user", "1", json!(null)));
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"data":{"type":"user","id":"1"}}"#);

    let doc = Document::multiple(vec![Resource::new("user", "1", json!(null))]);
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"data":[{"type":"user","id":"1"}]}"#);

    match doc.data {
        Some(PrimaryData::Multiple(resources)) => assert_eq!(resources.len(), 1),
        other => unreachable!("expected a list branch, got {:?}", other),
    }
}

#[test]
fn error_object_omits_empty_keys() {
    let error = Error { id: Some("error_id".to_string()), ..Default::default() };
    assert_eq!(serde_json::to_string(&error).unwrap(), r#"{"id":"error_id"}"#);
}

#[test]
fn error_object_from_json_string() {
    let _ = env_logger::try_init();

    let serialized = r#"
        {"id":"1", "status" : "422", "code" : "code1", "title" : "error-title", "detail": "error-detail"}
        "#;
    let error: Error = serde_json::from_str(serialized).unwrap();
    assert_eq!(error.id.as_deref(), Some("1"));
    assert_eq!(error.status.as_deref(), Some("422"));
}
