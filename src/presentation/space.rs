use crate::presentation::common::{
    BodyType, Label, MultiEntityLinks, Operation, OptionalField, Property,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

api_enum! {
    /// Kind of space
    SpaceType {
        /// Site-wide space
        Global => "global",
        /// Personal space of a user
        Personal => "personal",
        /// Collaboration space
        Collaboration => "collaboration",
        /// Knowledge base space
        KnowledgeBase => "knowledge_base",
    }
    /// Value not known to this client
    _ => Unknown
}

api_enum! {
    /// Lifecycle status of a space
    SpaceStatus {
        /// Active space
        Current => "current",
        /// Archived space
        Archived => "archived",
    }
    /// Value not known to this client
    _ => Unknown
}

api_enum! {
    /// Sort order accepted by the space listing
    SpaceSortOrder {
        /// Ascending id
        Id => "id",
        /// Descending id
        IdDesc => "-id",
        /// Ascending key
        Key => "key",
        /// Descending key
        KeyDesc => "-key",
        /// Ascending name
        Name => "name",
        /// Descending name
        NameDesc => "-name",
    }
}

api_enum! {
    /// Representation of the space description
    DescriptionFormat {
        /// Plain text
        Plain => "plain",
        /// Rendered HTML
        View => "view",
    }
}

/// Space description in the requested representations
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SpaceDescription {
    /// Plain text representation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<BodyType>,
    /// Rendered HTML representation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<BodyType>,
}

impl SpaceDescription {
    /// Non-empty plain text value, if present
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        self.plain
            .as_ref()
            .map(|body| body.value.as_str())
            .filter(|value| !value.trim().is_empty())
    }
}

/// Space icon
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpaceIcon {
    /// Relative path of the icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Download link through the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_download_link: Option<String>,
}

/// Links of a space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SpaceLinks {
    /// Relative web UI link
    #[serde(default)]
    pub webui: String,
    /// Tenant base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Subject of a permission or role assignment
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSubject {
    /// `user` or `group`
    #[serde(rename = "type")]
    pub subject_type: String,
    /// User account id or group id
    pub identifier: String,
}

/// Permission granted on a space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpacePermissionAssignment {
    /// Assignment identifier
    pub id: String,
    /// Who holds the permission
    pub subject: PermissionSubject,
    /// What is permitted
    pub operation: Operation,
}

/// Role held on a space
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceRoleAssignment {
    /// Assignment identifier
    pub id: String,
    /// Role name
    pub role: String,
    /// Who holds the role
    pub subject: PermissionSubject,
}

/// Space as returned by the listing endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Space identifier
    pub id: String,
    /// Space key
    pub key: String,
    /// Display name
    pub name: String,
    /// Kind of space
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    /// Lifecycle status
    pub status: SpaceStatus,
    /// Account id of the creator
    #[serde(default)]
    pub author_id: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Id of the space homepage
    #[serde(default)]
    pub homepage_id: Option<String>,
    /// Description, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SpaceDescription>,
    /// Icon, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<SpaceIcon>,
    /// Links
    #[serde(rename = "_links", default)]
    pub links: SpaceLinks,
    /// Current alias of the space key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_active_alias: Option<String>,
}

/// Space with the optional expansions of the single-space endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpaceDetailed {
    /// Base fields
    #[serde(flatten)]
    pub space: Space,
    /// Labels, with `include-labels`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<OptionalField<Label>>,
    /// Properties, with `include-properties`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OptionalField<Property>>,
    /// Operations, with `include-operations`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<OptionalField<Operation>>,
    /// Permissions, with `include-permissions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<OptionalField<SpacePermissionAssignment>>,
    /// Role assignments, with `include-role-assignments`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_assignments: Option<OptionalField<SpaceRoleAssignment>>,
}

/// Response of `GET /wiki/api/v2/spaces`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SpacesResponse {
    /// Spaces in this page of results
    #[serde(default)]
    pub results: Vec<Space>,
    /// Pagination links
    #[serde(rename = "_links", default)]
    pub links: MultiEntityLinks,
}
