use crate::presentation::common::{
    BodyType, Label, MultiEntityLinks, Operation, OptionalField, Property,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Status of a piece of content
    ContentStatus {
        /// Published, current version
        Current => "current",
        /// In the trash
        Trashed => "trashed",
        /// Purged
        Deleted => "deleted",
        /// Unpublished draft
        Draft => "draft",
        /// Archived
        Archived => "archived",
        /// Historical version
        Historical => "historical",
    }
    /// Value not known to this client
    _ => Unknown
}

api_enum! {
    /// Type of the parent of a page
    ParentContentType {
        /// Parent is a page
        Page => "page",
        /// Parent is a blog post
        Blogpost => "blogpost",
    }
    /// Value not known to this client
    _ => Unknown
}

api_enum! {
    /// Sort order accepted by the page listing
    PageSortOrder {
        /// Ascending id
        Id => "id",
        /// Descending id
        IdDesc => "-id",
        /// Oldest first
        CreatedDate => "created-date",
        /// Newest first
        CreatedDateDesc => "-created-date",
        /// Least recently modified first
        ModifiedDate => "modified-date",
        /// Most recently modified first
        ModifiedDateDesc => "-modified-date",
        /// Ascending title
        Title => "title",
        /// Descending title
        TitleDesc => "-title",
    }
}

api_enum! {
    /// Representation of the page body
    BodyFormat {
        /// Storage format (XHTML)
        Storage => "storage",
        /// Atlassian document format (JSON)
        AtlasDocFormat => "atlas_doc_format",
        /// Rendered HTML
        View => "view",
    }
}

/// Version information of a page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// When this version was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Version message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Version number
    pub number: u32,
    /// Whether the edit was minor
    #[serde(default)]
    pub minor_edit: bool,
    /// Account id of the author
    #[serde(default)]
    pub author_id: Option<String>,
}

/// Page body in the requested representations
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BodyBulk {
    /// Storage format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BodyType>,
    /// Atlassian document format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atlas_doc_format: Option<BodyType>,
    /// Rendered HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<BodyType>,
}

impl BodyBulk {
    /// First non-empty representation, preferring storage, then view, then ADF
    #[must_use]
    pub fn first(&self) -> Option<&BodyType> {
        [&self.storage, &self.view, &self.atlas_doc_format]
            .into_iter()
            .flatten()
            .find(|body| !body.value.trim().is_empty())
    }
}

/// Links of a page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PageLinks {
    /// Relative web UI link
    #[serde(default)]
    pub webui: String,
    /// Relative editor link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editui: Option<String>,
    /// Short link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tinyui: Option<String>,
    /// Tenant base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Like on a page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// Account id of the user
    pub account_id: String,
}

/// Page as returned by the listing endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page identifier
    pub id: String,
    /// Content status
    pub status: ContentStatus,
    /// Title
    pub title: String,
    /// Id of the containing space
    pub space_id: String,
    /// Id of the parent content
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Type of the parent content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<ParentContentType>,
    /// Position among siblings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Account id of the creator
    #[serde(default)]
    pub author_id: Option<String>,
    /// Account id of the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Account id of the previous owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_owner_id: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Current version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Body, when a body format was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyBulk>,
    /// Links
    #[serde(rename = "_links", default)]
    pub links: PageLinks,
}

/// Page with the optional expansions of the single-page endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageDetailed {
    /// Base fields
    #[serde(flatten)]
    pub page: Page,
    /// Labels, with `include-labels`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<OptionalField<Label>>,
    /// Properties, with `include-properties`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OptionalField<Property>>,
    /// Operations, with `include-operations`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<OptionalField<Operation>>,
    /// Likes, with `include-likes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<OptionalField<Like>>,
    /// Versions, with `include-versions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<OptionalField<Version>>,
    /// Favourite flag, with `include-favorited-by-current-user-status`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorited_by_current_user: Option<bool>,
}

/// Response of `GET /wiki/api/v2/pages`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PagesResponse {
    /// Pages in this page of results
    #[serde(default)]
    pub results: Vec<Page>,
    /// Pagination links
    #[serde(rename = "_links", default)]
    pub links: MultiEntityLinks,
}
