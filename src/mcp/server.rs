use crate::application::client::ConfluenceApi;
use crate::controller::ControllerResponse;
use crate::controller::pages::{self, ListPagesOptions};
use crate::controller::spaces::{self, ListSpacesOptions};
use crate::mcp::tools::{
    GET_PAGE, GET_SPACE, GetPageArgs, GetSpaceArgs, LIST_PAGES, LIST_SPACES, all_tools,
};
use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
        ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// MCP server handler exposing the Confluence tools
#[derive(Clone)]
pub struct ConfluenceMcpService {
    api: Arc<dyn ConfluenceApi>,
}

impl ConfluenceMcpService {
    /// Creates a handler backed by any Confluence implementation
    pub fn new(api: Arc<dyn ConfluenceApi>) -> Self {
        Self { api }
    }

    /// Dispatches a tool call by name
    ///
    /// Unknown tools and malformed arguments are protocol errors; a failed
    /// Confluence call is a tool result flagged as an error.
    pub async fn handle_tool(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Calling tool: {name}");
        let arguments = Value::Object(arguments.unwrap_or_default());

        let response = match name {
            LIST_SPACES => {
                let options: ListSpacesOptions = parse_arguments(name, arguments)?;
                spaces::list(self.api.as_ref(), &options).await
            }
            GET_SPACE => {
                let args: GetSpaceArgs = parse_arguments(name, arguments)?;
                spaces::get(self.api.as_ref(), &args.id).await
            }
            LIST_PAGES => {
                let options: ListPagesOptions = parse_arguments(name, arguments)?;
                pages::list(self.api.as_ref(), &options).await
            }
            GET_PAGE => {
                let args: GetPageArgs = parse_arguments(name, arguments)?;
                pages::get(self.api.as_ref(), &args.id).await
            }
            other => {
                warn!("Unknown tool requested: {other}");
                return Err(McpError::invalid_params(
                    format!("Unknown tool: {other}"),
                    None,
                ));
            }
        };

        Ok(into_tool_result(response))
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| {
        McpError::invalid_params(format!("Invalid arguments for '{tool}': {e}"), None)
    })
}

/// Wraps controller output in a single text content block
#[must_use]
pub fn into_tool_result(response: ControllerResponse) -> CallToolResult {
    let content = vec![Content::text(response.content)];
    if response.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for ConfluenceMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: Some("Atlassian Confluence".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read Confluence spaces and pages. Use list-spaces to discover space IDs, then get-space or list-pages."
                    .to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                meta: None,
                tools: all_tools(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.handle_tool(params.name.as_ref(), params.arguments).await }
    }
}
