//! # Model Context Protocol server
//!
//! Serves the Confluence tools over stdio with `rmcp`.

/// Server handler
pub mod server;
/// Tool definitions
pub mod tools;

pub use server::ConfluenceMcpService;

use crate::application::client::Client;
use crate::application::config::Config;
use crate::error::AppError;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing::info;

/// Starts the MCP server on stdio and runs until the client disconnects
pub async fn start_server(config: Config) -> Result<(), AppError> {
    let client = Client::new(config)?;
    let service = ConfluenceMcpService::new(Arc::new(client));

    info!("Starting Confluence MCP server with STDIO transport...");
    let running = service
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| AppError::Mcp(e.to_string()))?;

    let reason = running
        .waiting()
        .await
        .map_err(|e| AppError::Mcp(e.to_string()))?;
    info!("MCP server stopped: {reason:?}");
    Ok(())
}
