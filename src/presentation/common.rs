use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Metadata attached to optional expansions (`include-labels`, ...)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptionalFieldMeta {
    /// Whether more results exist beyond the embedded ones
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next batch, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Links attached to optional expansions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OptionalFieldLinks {
    /// Relative link to the next batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// An embedded, paginated collection returned when an `include-*` flag is set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OptionalField<T> {
    /// Embedded results
    #[serde(default)]
    pub results: Vec<T>,
    /// Pagination metadata
    #[serde(default)]
    pub meta: OptionalFieldMeta,
    /// Pagination links
    #[serde(rename = "_links", default)]
    pub links: OptionalFieldLinks,
}

impl<T> Default for OptionalField<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            meta: OptionalFieldMeta::default(),
            links: OptionalFieldLinks::default(),
        }
    }
}

/// Links object at the top of list responses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MultiEntityLinks {
    /// Relative URL of the next page of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Base URL of the tenant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl MultiEntityLinks {
    /// Cursor embedded in the `next` link, if any
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        let next = self.next.as_deref()?;
        let (_, query) = next.split_once('?')?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "cursor")
            .map(|(_, value)| value.into_owned())
    }
}

/// Label attached to a space or page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label identifier
    pub id: String,
    /// Label name
    pub name: String,
    /// Label prefix (`global`, `my`, `team`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Key/value property attached to a space or page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Property {
    /// Property identifier
    pub id: String,
    /// Property key
    pub key: String,
    /// Arbitrary JSON value
    pub value: serde_json::Value,
}

/// Operation the current user may perform
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name (`read`, `update`, ...)
    pub operation: String,
    /// Target of the operation (`space`, `page`, ...)
    pub target_type: String,
}

/// Value in a particular representation (`plain`, `view`, `storage`, ...)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyType {
    /// Rendered value
    pub value: String,
    /// Representation name
    pub representation: String,
}
