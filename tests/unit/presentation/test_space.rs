use crate::support::{space_detailed, space_json, spaces_response};
use assert_json_diff::assert_json_include;
use confluence_mcp::controller::spaces::format_spaces_list;
use confluence_mcp::prelude::*;
use confluence_mcp::presentation::common::{OptionalField, Property};
use serde_json::json;

#[test]
fn test_space_deserialization() {
    let space: Space = serde_json::from_value(space_json()).unwrap();
    assert_eq!(space.id, "98306");
    assert_eq!(space.key, "ENG");
    assert_eq!(space.space_type, SpaceType::Global);
    assert_eq!(space.status, SpaceStatus::Current);
    assert_eq!(space.homepage_id.as_deref(), Some("98310"));
    assert_eq!(
        space.description.as_ref().and_then(|d| d.plain_text()),
        Some("Engineering handbook")
    );
    assert_eq!(space.links.webui, "/spaces/ENG");
    assert!(space.created_at.is_some());
}

#[test]
fn test_space_optional_fields_may_be_absent() {
    let space: Space = serde_json::from_value(json!({
        "id": "1",
        "key": "K",
        "name": "Minimal",
        "type": "collaboration",
        "status": "current"
    }))
    .unwrap();
    assert!(space.author_id.is_none());
    assert!(space.homepage_id.is_none());
    assert!(space.description.is_none());
    assert_eq!(space.links.webui, "");
}

#[test]
fn test_space_missing_required_field_fails() {
    let result: Result<Space, _> = serde_json::from_value(json!({
        "id": "1",
        "name": "No key",
        "type": "global",
        "status": "current"
    }));
    assert!(result.is_err());
}

#[test]
fn test_space_unrecognized_type_and_status_decode_as_unknown() {
    let mut value = space_json();
    value["type"] = json!("onboarding");
    value["status"] = json!("suspended");
    let space: Space = serde_json::from_value(value).unwrap();
    assert_eq!(space.space_type, SpaceType::Unknown);
    assert_eq!(space.status, SpaceStatus::Unknown);
    assert_eq!(space.space_type.to_string(), "unknown");
}

#[test]
fn test_one_unrecognized_space_does_not_break_the_listing() {
    let response: SpacesResponse = serde_json::from_value(json!({
        "results": [
            space_json(),
            {
                "id": "2",
                "key": "ONB",
                "name": "Onboarding",
                "type": "onboarding",
                "status": "current",
                "_links": { "webui": "/spaces/ONB" }
            }
        ]
    }))
    .unwrap();
    assert_eq!(response.results.len(), 2);
    let content = format_spaces_list(&response);
    assert!(content.contains("## 2. Onboarding\n- ID: 2\n- Key: ONB\n- Type: unknown"));
}

#[test]
fn test_optional_field_decodes_without_results() {
    let labels: OptionalField<Label> =
        serde_json::from_value(json!({ "meta": { "hasMore": true, "cursor": "c1" } })).unwrap();
    assert!(labels.results.is_empty());
    assert!(labels.meta.has_more);
    assert_eq!(labels.meta.cursor.as_deref(), Some("c1"));

    let properties: OptionalField<Property> = serde_json::from_value(json!({
        "results": [{ "id": "p1", "key": "editor", "value": { "v2": true } }]
    }))
    .unwrap();
    assert_eq!(properties.results[0].value, json!({ "v2": true }));
}

#[test]
fn test_spaces_response_links() {
    let response = spaces_response();
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.links.next_cursor().as_deref(), Some("abc123"));
    assert_eq!(
        response.links.base.as_deref(),
        Some("https://acme.atlassian.net/wiki")
    );

    let empty: SpacesResponse = serde_json::from_value(json!({ "results": [] })).unwrap();
    assert!(empty.results.is_empty());
    assert!(empty.links.next_cursor().is_none());
}

#[test]
fn test_space_detailed_flattens_base_fields() {
    let detailed = space_detailed();
    assert_eq!(detailed.space.name, "Engineering");
    let labels = detailed.labels.as_ref().unwrap();
    assert_eq!(labels.results[0].name, "docs");
    assert!(!labels.meta.has_more);
    assert!(detailed.permissions.is_none());

    let serialized = serde_json::to_value(&detailed).unwrap();
    assert_json_include!(
        actual: serialized,
        expected: json!({
            "id": "98306",
            "key": "ENG",
            "type": "global",
            "_links": { "webui": "/spaces/ENG" },
            "labels": { "results": [{ "name": "docs" }] }
        })
    );
}

#[test]
fn test_space_detailed_with_role_assignments() {
    let mut value = space_json();
    value["roleAssignments"] = json!({
        "results": [{
            "id": "ra-1",
            "role": "admin",
            "subject": { "type": "user", "identifier": "5b10a2844c20165700ede21g" }
        }]
    });
    let detailed: SpaceDetailed = serde_json::from_value(value).unwrap();
    let roles = detailed.role_assignments.unwrap();
    assert_eq!(roles.results[0].role, "admin");
    assert_eq!(roles.results[0].subject.subject_type, "user");
}
