/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use thiserror::Error;

/// Errors produced while talking to the Confluence API
///
/// Missing credentials are not an error at the transport level (credential
/// resolution returns `None`); services turn that signal into
/// [`AppError::MissingCredentials`] when an operation cannot proceed.
#[derive(Debug, Error)]
pub enum AppError {
    /// Credentials are not configured
    #[error("{0}")]
    MissingCredentials(String),
    /// The API answered with a non-success status
    #[error("Atlassian API error: {status} {status_text}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Reason phrase of the status
        status_text: String,
    },
    /// Connection, timeout or other transport failure, passed through unchanged
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    /// Response body is not valid JSON or does not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Caller supplied an unusable value
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// MCP transport failure
    #[error("mcp error: {0}")]
    Mcp(String),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status carried by an API error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
