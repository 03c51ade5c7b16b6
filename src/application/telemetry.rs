//! Structured transport events
//!
//! The transport never logs directly. It reports what happens to a
//! [`TransportObserver`]; [`TracingObserver`] is the default sink and forwards
//! every event to `tracing`.

use crate::constants::MISSING_CREDENTIALS_WARNING;
use std::fmt::Debug;
use tracing::{debug, error, warn};

/// Event emitted by credential resolution and the HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// One or more credential values are absent
    MissingCredentials {
        /// Names of the missing configuration keys
        missing: Vec<&'static str>,
    },
    /// A request is about to be sent
    RequestStarted {
        /// HTTP method
        method: String,
        /// Full request URL
        url: String,
    },
    /// A response arrived, whatever its status
    ResponseReceived {
        /// Full request URL
        url: String,
        /// HTTP status code
        status: u16,
    },
    /// The API answered with a non-success status
    ApiError {
        /// Full request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Reason phrase
        status_text: String,
        /// Raw response body
        body: String,
    },
    /// The request failed below HTTP (connection, timeout)
    RequestFailed {
        /// Full request URL
        url: String,
        /// Underlying error message
        error: String,
    },
    /// The response body could not be decoded
    DecodeFailed {
        /// Full request URL
        url: String,
        /// Decoder message
        error: String,
    },
}

/// Receives transport events
pub trait TransportObserver: Send + Sync + Debug {
    /// Called synchronously for every event
    fn on_event(&self, event: &TransportEvent);
}

/// Forwards transport events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TransportObserver for TracingObserver {
    fn on_event(&self, event: &TransportEvent) {
        match event {
            TransportEvent::MissingCredentials { missing } => {
                warn!(missing = ?missing, "{}", MISSING_CREDENTIALS_WARNING);
            }
            TransportEvent::RequestStarted { method, url } => {
                debug!("Calling Atlassian API: {} {}", method, url);
            }
            TransportEvent::ResponseReceived { url, status } => {
                debug!(url = %url, "Response status: {}", status);
            }
            TransportEvent::ApiError {
                url,
                status,
                status_text,
                body,
            } => {
                error!(url = %url, "API error: {} {}: {}", status, status_text, body);
            }
            TransportEvent::RequestFailed { url, error } => {
                error!(url = %url, "Request failed: {}", error);
            }
            TransportEvent::DecodeFailed { url, error } => {
                error!(url = %url, "Failed to decode response: {}", error);
            }
        }
    }
}
