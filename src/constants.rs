/// Base path of the Confluence REST API v2
pub const API_PATH: &str = "/wiki/api/v2";
/// User agent string used in HTTP requests to identify this client to Atlassian
pub const USER_AGENT: &str = concat!("confluence-mcp/", env!("CARGO_PKG_VERSION"));
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Domain suffix of Atlassian cloud tenants
pub const ATLASSIAN_DOMAIN: &str = "atlassian.net";

/// Environment variable holding the Atlassian site name (`<site>.atlassian.net`)
pub const ENV_SITE_NAME: &str = "ATLASSIAN_SITE_NAME";
/// Environment variable holding the account email
pub const ENV_USER_EMAIL: &str = "ATLASSIAN_USER_EMAIL";
/// Environment variable holding the API token
pub const ENV_API_TOKEN: &str = "ATLASSIAN_API_TOKEN";
/// Optional override of the tenant base URL
pub const ENV_BASE_URL: &str = "ATLASSIAN_BASE_URL";
/// Optional request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "ATLASSIAN_TIMEOUT_SECS";
/// Enables debug logging when set to `true`
pub const ENV_DEBUG: &str = "DEBUG";
/// Explicit log level (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`)
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";

/// Warning emitted when any credential is missing
pub const MISSING_CREDENTIALS_WARNING: &str = "Missing Atlassian credentials. Please set ATLASSIAN_SITE_NAME, ATLASSIAN_USER_EMAIL, and ATLASSIAN_API_TOKEN environment variables.";

/// Rendered when a space listing comes back empty
pub const NO_SPACES_FOUND: &str = "No Confluence spaces found.";
/// Rendered when a page listing comes back empty
pub const NO_PAGES_FOUND: &str = "No Confluence pages found.";
