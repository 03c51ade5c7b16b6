use crate::application::interfaces::page::PageService;
use crate::constants::NO_PAGES_FOUND;
use crate::controller::ControllerResponse;
use crate::controller::format::{absolute_url, format_timestamp, push_field};
use crate::model::requests::{GetPageParams, ListPagesParams};
use crate::presentation::page::{BodyFormat, ContentStatus, PageDetailed, PagesResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Options accepted by `list-pages`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPagesOptions {
    /// Only pages of these spaces
    #[serde(default)]
    pub space_id: Vec<String>,
    /// Filter pages by status
    #[serde(default)]
    pub status: Option<ContentStatus>,
    /// Filter pages by exact title
    #[serde(default)]
    pub title: Option<String>,
    /// Limit the number of pages returned
    #[serde(default)]
    pub limit: Option<u32>,
    /// Cursor of the page of results to fetch
    #[serde(default)]
    pub cursor: Option<String>,
}

impl ListPagesOptions {
    /// Service parameters for these options
    #[must_use]
    pub fn to_params(&self) -> ListPagesParams {
        ListPagesParams {
            space_ids: self.space_id.clone(),
            status: self.status.into_iter().collect(),
            title: self.title.clone(),
            limit: self.limit,
            cursor: self.cursor.clone(),
            ..ListPagesParams::default()
        }
    }
}

/// Lists pages and renders them as markdown
pub async fn list<S: PageService + ?Sized>(
    service: &S,
    options: &ListPagesOptions,
) -> ControllerResponse {
    debug!("Listing Confluence pages...");

    match service.list_pages(&options.to_params()).await {
        Ok(pages) => ControllerResponse::ok(format_pages_list(&pages)),
        Err(e) => {
            error!("Error listing pages: {e}");
            ControllerResponse::error(format!("Error listing Confluence pages: {e}"))
        }
    }
}

/// Gets one page and renders its details and body as markdown
pub async fn get<S: PageService + ?Sized>(service: &S, id: &str) -> ControllerResponse {
    debug!("Getting Confluence page with ID: {id}...");

    let params = GetPageParams {
        body_format: Some(BodyFormat::Storage),
        include_labels: Some(true),
        include_version: Some(true),
        ..GetPageParams::default()
    };

    match service.get_page(id, &params).await {
        Ok(page) => ControllerResponse::ok(format_page_details(&page)),
        Err(e) => {
            error!("Error getting page: {e}");
            ControllerResponse::error(format!("Error getting Confluence page: {e}"))
        }
    }
}

/// Markdown list of pages
#[must_use]
pub fn format_pages_list(pages: &PagesResponse) -> String {
    if pages.results.is_empty() {
        return NO_PAGES_FOUND.to_string();
    }

    let base = pages.links.base.as_deref();
    let mut lines = vec!["# Confluence Pages".to_string(), String::new()];

    for (index, page) in pages.results.iter().enumerate() {
        lines.push(format!("## {}. {}", index + 1, page.title));
        lines.push(format!("- ID: {}", page.id));
        lines.push(format!("- Space ID: {}", page.space_id));
        lines.push(format!("- Status: {}", page.status));
        push_field(&mut lines, "Parent ID", page.parent_id.as_deref());
        push_field(&mut lines, "Version", page.version.as_ref().map(|v| v.number));
        lines.push(format!(
            "- URL: {}",
            absolute_url(base.or(page.links.base.as_deref()), &page.links.webui)
        ));
        lines.push(String::new());
    }

    if pages.links.next.is_some() {
        match pages.links.next_cursor() {
            Some(cursor) => lines.push(format!(
                "*More pages available. Use cursor `{cursor}` to request the next page.*"
            )),
            None => lines.push(
                "*More pages available. Please refine your search or request the next page.*"
                    .to_string(),
            ),
        }
    }

    lines.join("\n")
}

/// Markdown details of a page
#[must_use]
pub fn format_page_details(detailed: &PageDetailed) -> String {
    let page = &detailed.page;
    let mut lines = vec![format!("# Confluence Page: {}", page.title), String::new()];

    lines.push("## Basic Information".to_string());
    lines.push(format!("- ID: {}", page.id));
    lines.push(format!("- Space ID: {}", page.space_id));
    lines.push(format!("- Status: {}", page.status));
    push_field(&mut lines, "Parent ID", page.parent_id.as_deref());
    push_field(
        &mut lines,
        "Created At",
        page.created_at.as_ref().map(format_timestamp),
    );
    push_field(&mut lines, "Author ID", page.author_id.as_deref());
    if let Some(version) = &page.version {
        let updated = version
            .created_at
            .as_ref()
            .map(|at| format!(" ({})", format_timestamp(at)))
            .unwrap_or_default();
        lines.push(format!("- Version: {}{}", version.number, updated));
    }

    if let Some(body) = page.body.as_ref().and_then(|b| b.first()) {
        lines.push(String::new());
        lines.push("## Content".to_string());
        lines.push(body.value.clone());
    }

    lines.push(String::new());
    lines.push("## Links".to_string());
    lines.push(format!(
        "- Web UI: {}",
        absolute_url(page.links.base.as_deref(), &page.links.webui)
    ));
    push_field(
        &mut lines,
        "Edit UI",
        page.links
            .editui
            .as_deref()
            .map(|link| absolute_url(page.links.base.as_deref(), link)),
    );

    if let Some(labels) = detailed.labels.as_ref().filter(|l| !l.results.is_empty()) {
        lines.push(String::new());
        lines.push("## Labels".to_string());
        for label in &labels.results {
            lines.push(format!("- {}", label.name));
        }
    }

    lines.join("\n")
}
