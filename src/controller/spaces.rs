use crate::application::interfaces::space::SpaceService;
use crate::constants::NO_SPACES_FOUND;
use crate::controller::ControllerResponse;
use crate::controller::format::{absolute_url, format_timestamp, push_field};
use crate::model::requests::{GetSpaceParams, ListSpacesParams};
use crate::presentation::space::{
    DescriptionFormat, SpaceDetailed, SpaceStatus, SpaceType, SpacesResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Options accepted by `list-spaces`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSpacesOptions {
    /// Filter spaces by type
    #[serde(rename = "type", default)]
    pub space_type: Option<SpaceType>,
    /// Filter spaces by status
    #[serde(default)]
    pub status: Option<SpaceStatus>,
    /// Limit the number of spaces returned
    #[serde(default)]
    pub limit: Option<u32>,
    /// Cursor of the page to fetch
    #[serde(default)]
    pub cursor: Option<String>,
}

impl ListSpacesOptions {
    /// Service parameters for these options
    #[must_use]
    pub fn to_params(&self) -> ListSpacesParams {
        ListSpacesParams {
            space_type: self.space_type,
            status: self.status,
            limit: self.limit,
            cursor: self.cursor.clone(),
            description_format: Some(DescriptionFormat::Plain),
            ..ListSpacesParams::default()
        }
    }
}

/// Lists spaces and renders them as markdown
pub async fn list<S: SpaceService + ?Sized>(
    service: &S,
    options: &ListSpacesOptions,
) -> ControllerResponse {
    debug!("Listing Confluence spaces...");

    match service.list_spaces(&options.to_params()).await {
        Ok(spaces) => ControllerResponse::ok(format_spaces_list(&spaces)),
        Err(e) => {
            error!("Error listing spaces: {e}");
            ControllerResponse::error(format!("Error listing Confluence spaces: {e}"))
        }
    }
}

/// Gets one space and renders its details as markdown
pub async fn get<S: SpaceService + ?Sized>(service: &S, id: &str) -> ControllerResponse {
    debug!("Getting Confluence space with ID: {id}...");

    let params = GetSpaceParams {
        description_format: Some(DescriptionFormat::Plain),
        include_labels: Some(true),
        ..GetSpaceParams::default()
    };

    match service.get_space(id, &params).await {
        Ok(space) => ControllerResponse::ok(format_space_details(&space)),
        Err(e) => {
            error!("Error getting space: {e}");
            ControllerResponse::error(format!("Error getting Confluence space: {e}"))
        }
    }
}

/// Markdown list of spaces
#[must_use]
pub fn format_spaces_list(spaces: &SpacesResponse) -> String {
    if spaces.results.is_empty() {
        return NO_SPACES_FOUND.to_string();
    }

    let base = spaces.links.base.as_deref();
    let mut lines = vec!["# Confluence Spaces".to_string(), String::new()];

    for (index, space) in spaces.results.iter().enumerate() {
        lines.push(format!("## {}. {}", index + 1, space.name));
        lines.push(format!("- ID: {}", space.id));
        lines.push(format!("- Key: {}", space.key));
        lines.push(format!("- Type: {}", space.space_type));
        lines.push(format!("- Status: {}", space.status));
        push_field(
            &mut lines,
            "Description",
            space.description.as_ref().and_then(|d| d.plain_text()),
        );
        lines.push(format!(
            "- URL: {}",
            absolute_url(base.or(space.links.base.as_deref()), &space.links.webui)
        ));
        lines.push(String::new());
    }

    if spaces.links.next.is_some() {
        match spaces.links.next_cursor() {
            Some(cursor) => lines.push(format!(
                "*More spaces available. Use cursor `{cursor}` to request the next page.*"
            )),
            None => lines.push(
                "*More spaces available. Please refine your search or request the next page.*"
                    .to_string(),
            ),
        }
    }

    lines.join("\n")
}

/// Markdown details of a space
#[must_use]
pub fn format_space_details(detailed: &SpaceDetailed) -> String {
    let space = &detailed.space;
    let mut lines = vec![format!("# Confluence Space: {}", space.name), String::new()];

    lines.push("## Basic Information".to_string());
    lines.push(format!("- ID: {}", space.id));
    lines.push(format!("- Key: {}", space.key));
    lines.push(format!("- Type: {}", space.space_type));
    lines.push(format!("- Status: {}", space.status));
    push_field(
        &mut lines,
        "Created At",
        space.created_at.as_ref().map(format_timestamp),
    );
    push_field(&mut lines, "Author ID", space.author_id.as_deref());
    push_field(&mut lines, "Homepage ID", space.homepage_id.as_deref());

    if let Some(description) = space.description.as_ref().and_then(|d| d.plain_text()) {
        lines.push(String::new());
        lines.push("## Description".to_string());
        lines.push(description.to_string());
    }

    lines.push(String::new());
    lines.push("## Links".to_string());
    lines.push(format!(
        "- Web UI: {}",
        absolute_url(space.links.base.as_deref(), &space.links.webui)
    ));

    if let Some(labels) = detailed.labels.as_ref().filter(|l| !l.results.is_empty()) {
        lines.push(String::new());
        lines.push("## Labels".to_string());
        for label in &labels.results {
            lines.push(format!("- {}", label.name));
        }
    }

    lines.join("\n")
}
