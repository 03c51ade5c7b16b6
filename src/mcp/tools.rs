//! Tool definitions: names, descriptions, input schemas and argument types

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Tool listing spaces
pub const LIST_SPACES: &str = "list-spaces";
/// Tool fetching one space
pub const GET_SPACE: &str = "get-space";
/// Tool listing pages
pub const LIST_PAGES: &str = "list-pages";
/// Tool fetching one page
pub const GET_PAGE: &str = "get-page";

/// Arguments of `get-space`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSpaceArgs {
    /// ID of the Confluence space to retrieve
    pub id: String,
}

/// Arguments of `get-page`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPageArgs {
    /// ID of the Confluence page to retrieve
    pub id: String,
}

fn object_schema(schema: Value) -> Arc<Map<String, Value>> {
    match schema {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(Map::new()),
    }
}

fn tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    Tool {
        name: name.into(),
        title: Some(name.to_string()),
        icons: None,
        description: Some(description.into()),
        input_schema: object_schema(schema),
        output_schema: None,
        annotations: None,
        meta: None,
    }
}

/// Every tool served, in listing order
#[must_use]
pub fn all_tools() -> Vec<Tool> {
    vec![
        tool(
            LIST_SPACES,
            "List all available Confluence spaces",
            json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["global", "personal", "collaboration", "knowledge_base"],
                        "description": "Filter spaces by type"
                    },
                    "status": {
                        "type": "string",
                        "enum": ["current", "archived"],
                        "description": "Filter spaces by status"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Limit the number of spaces returned"
                    },
                    "cursor": {
                        "type": "string",
                        "description": "Cursor of the page of results to fetch"
                    }
                }
            }),
        ),
        tool(
            GET_SPACE,
            "Get details about a specific Confluence space",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "ID of the Confluence space to retrieve"
                    }
                },
                "required": ["id"]
            }),
        ),
        tool(
            LIST_PAGES,
            "List Confluence pages, optionally filtered by space",
            json!({
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Only pages of these spaces"
                    },
                    "status": {
                        "type": "string",
                        "enum": ["current", "trashed", "deleted", "draft", "archived", "historical"],
                        "description": "Filter pages by status"
                    },
                    "title": {
                        "type": "string",
                        "description": "Filter pages by exact title"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Limit the number of pages returned"
                    },
                    "cursor": {
                        "type": "string",
                        "description": "Cursor of the page of results to fetch"
                    }
                }
            }),
        ),
        tool(
            GET_PAGE,
            "Get a specific Confluence page with its content",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "ID of the Confluence page to retrieve"
                    }
                },
                "required": ["id"]
            }),
        ),
    ]
}
