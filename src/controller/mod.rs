//! Markdown controllers
//!
//! Controllers call a service, render the typed response as markdown and never
//! fail: errors become a one-line `Error ...: <message>` response flagged with
//! `is_error`, which the CLI turns into a non-zero exit and the MCP server into
//! a tool error.

/// Shared markdown helpers
pub mod format;
/// Page controller
pub mod pages;
/// Space controller
pub mod spaces;

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Rendered output of a controller operation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerResponse {
    /// Markdown, or the error line
    pub content: String,
    /// Whether `content` describes a failure
    #[serde(default)]
    pub is_error: bool,
}

impl ControllerResponse {
    /// Successful response
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Failed response
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}
