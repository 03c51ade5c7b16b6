use crate::presentation::page::{BodyFormat, ContentStatus, PageSortOrder};
use crate::presentation::space::{DescriptionFormat, SpaceSortOrder, SpaceStatus, SpaceType};
use std::fmt::Display;

/// Ordered query parameters with Confluence conventions
///
/// Lists are comma-joined, booleans and numbers are stringified, absent or
/// empty values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value when present and non-empty
    pub fn push<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    /// Adds a comma-joined list when it has at least one element
    pub fn push_list<T: Display>(&mut self, key: &'static str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key, joined));
        }
        self
    }

    /// Whether no parameter was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of a parameter, if set
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-urlencoded query including the leading `?`, or an empty string
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        format!("?{}", serializer.finish())
    }
}

/// Parameters of `GET /spaces`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSpacesParams {
    /// Filter by space ids
    pub ids: Vec<String>,
    /// Filter by space keys
    pub keys: Vec<String>,
    /// Filter by type
    pub space_type: Option<SpaceType>,
    /// Filter by status
    pub status: Option<SpaceStatus>,
    /// Filter by labels
    pub labels: Vec<String>,
    /// Only spaces favourited by this account id
    pub favorited_by: Option<String>,
    /// Only spaces not favourited by this account id
    pub not_favorited_by: Option<String>,
    /// Sort order
    pub sort: Option<SpaceSortOrder>,
    /// Description representation to include
    pub description_format: Option<DescriptionFormat>,
    /// Include the space icon
    pub include_icon: Option<bool>,
    /// Pagination cursor
    pub cursor: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

impl ListSpacesParams {
    /// Query parameters in API naming
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_list("ids", &self.ids)
            .push_list("keys", &self.keys)
            .push("type", self.space_type)
            .push("status", self.status)
            .push_list("labels", &self.labels)
            .push("favorited-by", self.favorited_by.as_deref())
            .push("not-favorited-by", self.not_favorited_by.as_deref())
            .push("sort", self.sort)
            .push("description-format", self.description_format)
            .push("include-icon", self.include_icon)
            .push("cursor", self.cursor.as_deref())
            .push("limit", self.limit.filter(|limit| *limit > 0));
        query
    }
}

/// Parameters of `GET /spaces/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSpaceParams {
    /// Description representation to include
    pub description_format: Option<DescriptionFormat>,
    /// Include the space icon
    pub include_icon: Option<bool>,
    /// Include allowed operations
    pub include_operations: Option<bool>,
    /// Include space properties
    pub include_properties: Option<bool>,
    /// Include permissions
    pub include_permissions: Option<bool>,
    /// Include role assignments
    pub include_role_assignments: Option<bool>,
    /// Include labels
    pub include_labels: Option<bool>,
}

impl GetSpaceParams {
    /// Query parameters in API naming
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("description-format", self.description_format)
            .push("include-icon", self.include_icon)
            .push("include-operations", self.include_operations)
            .push("include-properties", self.include_properties)
            .push("include-permissions", self.include_permissions)
            .push("include-role-assignments", self.include_role_assignments)
            .push("include-labels", self.include_labels);
        query
    }
}

/// Parameters of `GET /pages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPagesParams {
    /// Filter by page ids
    pub ids: Vec<String>,
    /// Filter by space ids
    pub space_ids: Vec<String>,
    /// Filter by parent page
    pub parent_id: Option<String>,
    /// Sort order
    pub sort: Option<PageSortOrder>,
    /// Filter by status
    pub status: Vec<ContentStatus>,
    /// Filter by exact title
    pub title: Option<String>,
    /// Body representation to include
    pub body_format: Option<BodyFormat>,
    /// Pagination cursor
    pub cursor: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

impl ListPagesParams {
    /// Query parameters in API naming
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_list("id", &self.ids)
            .push_list("space-id", &self.space_ids)
            .push("parent-id", self.parent_id.as_deref())
            .push("sort", self.sort)
            .push_list("status", &self.status)
            .push("title", self.title.as_deref())
            .push("body-format", self.body_format)
            .push("cursor", self.cursor.as_deref())
            .push("limit", self.limit.filter(|limit| *limit > 0));
        query
    }
}

/// Parameters of `GET /pages/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPageParams {
    /// Body representation to include
    pub body_format: Option<BodyFormat>,
    /// Retrieve the draft
    pub get_draft: Option<bool>,
    /// Accepted statuses
    pub status: Vec<ContentStatus>,
    /// Specific version number
    pub version: Option<u32>,
    /// Include labels
    pub include_labels: Option<bool>,
    /// Include properties
    pub include_properties: Option<bool>,
    /// Include allowed operations
    pub include_operations: Option<bool>,
    /// Include likes
    pub include_likes: Option<bool>,
    /// Include version history
    pub include_versions: Option<bool>,
    /// Include the current version
    pub include_version: Option<bool>,
    /// Include the favourite flag of the current user
    pub include_favorited_by_current_user_status: Option<bool>,
    /// Include web resources
    pub include_webresources: Option<bool>,
    /// Include collaborators
    pub include_collaborators: Option<bool>,
}

impl GetPageParams {
    /// Query parameters in API naming
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("body-format", self.body_format)
            .push("get-draft", self.get_draft)
            .push_list("status", &self.status)
            .push("version", self.version)
            .push("include-labels", self.include_labels)
            .push("include-properties", self.include_properties)
            .push("include-operations", self.include_operations)
            .push("include-likes", self.include_likes)
            .push("include-versions", self.include_versions)
            .push("include-version", self.include_version)
            .push(
                "include-favorited-by-current-user-status",
                self.include_favorited_by_current_user_status,
            )
            .push("include-webresources", self.include_webresources)
            .push("include-collaborators", self.include_collaborators);
        query
    }
}
