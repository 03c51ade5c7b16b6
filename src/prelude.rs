/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Confluence MCP Prelude
//!
//! Re-exports the types needed for most Confluence interactions.
//!
//! ```rust,no_run
//! use confluence_mcp::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and resolved credentials
pub use crate::application::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Confluence client and the combined service trait
pub use crate::application::client::{Client, ConfluenceApi};

/// Service traits
pub use crate::application::interfaces::page::PageService;
pub use crate::application::interfaces::space::SpaceService;

/// Transport observers
pub use crate::application::telemetry::{TracingObserver, TransportEvent, TransportObserver};

// ============================================================================
// TRANSPORT AND REQUESTS
// ============================================================================

pub use crate::model::http::{HttpClient, RequestOptions, make_http_request};
pub use crate::model::requests::{
    GetPageParams, GetSpaceParams, ListPagesParams, ListSpacesParams, QueryParams,
};

// ============================================================================
// PRESENTATION
// ============================================================================

pub use crate::presentation::common::{Label, MultiEntityLinks};
pub use crate::presentation::page::{
    BodyFormat, ContentStatus, Page, PageDetailed, PageSortOrder, PagesResponse,
};
pub use crate::presentation::space::{
    DescriptionFormat, Space, SpaceDetailed, SpaceSortOrder, SpaceStatus, SpaceType,
    SpacesResponse,
};

// ============================================================================
// CONTROLLERS AND UTILITIES
// ============================================================================

pub use crate::controller::ControllerResponse;
pub use crate::controller::pages::ListPagesOptions;
pub use crate::controller::spaces::ListSpacesOptions;
pub use crate::utils::logger::{setup_logger, setup_logger_with_debug};
