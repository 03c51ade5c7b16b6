/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Confluence MCP
//!
//! A thin client for the Atlassian Confluence REST API (v2) exposed both as a
//! command-line tool and as a Model Context Protocol server.
//!
//! Every operation follows the same path: credentials are resolved from the
//! injected [`application::config::Config`], an authenticated request is issued
//! through [`model::http::HttpClient`], the JSON body is decoded into the typed
//! models of [`presentation`], and a controller renders markdown.
//!
//! ```rust,no_run
//! use confluence_mcp::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! let spaces = client.list_spaces(&ListSpacesParams::default()).await?;
//! println!("{} spaces", spaces.results.len());
//! # Ok(())
//! # }
//! ```

/// Services, configuration and telemetry
pub mod application;
/// Command-line interface
pub mod cli;
/// Library-wide constants
pub mod constants;
/// Markdown controllers shared by the CLI and the MCP server
pub mod controller;
/// Error types
pub mod error;
/// Model Context Protocol server
pub mod mcp;
/// Transport and request models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Typed Confluence API payloads
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
