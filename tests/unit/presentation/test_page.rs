use crate::support::{page_detailed, page_json, pages_response};
use confluence_mcp::prelude::*;
use confluence_mcp::presentation::page::{BodyBulk, ParentContentType};
use confluence_mcp::presentation::common::BodyType;
use serde_json::json;

#[test]
fn test_page_deserialization() {
    let page: Page = serde_json::from_value(page_json()).unwrap();
    assert_eq!(page.id, "557060");
    assert_eq!(page.status, ContentStatus::Current);
    assert_eq!(page.space_id, "98306");
    assert_eq!(page.parent_type, Some(ParentContentType::Page));
    assert_eq!(page.version.as_ref().map(|v| v.number), Some(3));
    assert!(page.body.is_none());
}

#[test]
fn test_pages_response() {
    let response = pages_response();
    assert_eq!(response.results.len(), 1);
    assert!(response.links.next.is_none());
}

#[test]
fn test_page_detailed_body_and_labels() {
    let detailed = page_detailed();
    assert_eq!(detailed.page.title, "Release notes");
    let body = detailed.page.body.as_ref().and_then(|b| b.first()).unwrap();
    assert_eq!(body.representation, "storage");
    assert_eq!(body.value, "<p>Shipped 1.2</p>");
    assert_eq!(detailed.labels.unwrap().results[0].name, "release");
}

#[test]
fn test_body_first_skips_empty_representations() {
    let body = BodyBulk {
        storage: Some(BodyType {
            value: "  ".to_string(),
            representation: "storage".to_string(),
        }),
        atlas_doc_format: Some(BodyType {
            value: "{\"type\":\"doc\"}".to_string(),
            representation: "atlas_doc_format".to_string(),
        }),
        view: None,
    };
    assert_eq!(body.first().unwrap().representation, "atlas_doc_format");
    assert!(BodyBulk::default().first().is_none());
}

#[test]
fn test_page_unrecognized_status_decodes_as_unknown() {
    let mut value = page_json();
    value["status"] = json!("locked");
    value["parentType"] = json!("whiteboard");
    let page: Page = serde_json::from_value(value).unwrap();
    assert_eq!(page.status, ContentStatus::Unknown);
    assert_eq!(page.parent_type, Some(ParentContentType::Unknown));
}

#[test]
fn test_page_malformed_payload_fails() {
    let result: Result<PagesResponse, _> =
        serde_json::from_value(json!({ "results": [{ "id": 1 }] }));
    assert!(result.is_err());
}
