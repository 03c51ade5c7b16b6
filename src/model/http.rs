/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::config::{Config, Credentials, timeout_or_default};
use crate::application::telemetry::{TransportEvent, TransportObserver};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Per-request overrides: method, extra headers and JSON body
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method, `GET` by default
    pub method: Method,
    /// Headers merged over the defaults; a header with the same name replaces the default
    pub headers: Vec<(String, String)>,
    /// Body, serialized as JSON when present
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// Default options: `GET`, no extra headers, no body
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Prefixes `/` when the path lacks it; already-slashed paths are returned as is
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Percent-encodes an id as a single path segment
///
/// Blank ids and the dot segments `.` and `..` are rejected.
pub fn encode_path_segment(id: &str) -> Result<String, AppError> {
    let id = id.trim();
    if id.is_empty() || id == "." || id == ".." {
        return Err(AppError::InvalidInput(format!("invalid id '{id}'")));
    }

    let mut url = Url::parse("http://localhost/")
        .map_err(|e| AppError::InvalidInput(format!("cannot encode id '{id}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| AppError::InvalidInput(format!("cannot encode id '{id}'")))?
        .clear()
        .push(id);
    Ok(url.path().trim_start_matches('/').to_string())
}

/// Joins a base URL and a normalized path
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), normalize_path(path))
}

/// Builds the request headers: Basic auth, JSON content type and accept,
/// then the caller's headers on top
pub fn build_headers(
    credentials: &Credentials,
    overrides: &[(String, String)],
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();

    let mut authorization = header_value(&credentials.basic_auth_header())?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in overrides {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name '{name}': {e}")))?;
        headers.insert(header_name, header_value(value)?);
    }

    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))
}

/// Authenticated client for the Confluence REST API
///
/// Holds the connection pool and the observer; credentials are passed on every
/// call so that they are always resolved from the current configuration.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: Option<String>,
    observer: Arc<dyn TransportObserver>,
}

impl HttpClient {
    /// Creates a client from the configuration
    ///
    /// # Arguments
    /// * `config` - Source of the timeout and the optional base URL override
    /// * `observer` - Receives transport events
    pub fn new(config: &Config, observer: Arc<dyn TransportObserver>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_or_default(Some(config.timeout_secs))))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            observer,
        })
    }

    /// Observer receiving the transport events
    pub fn observer(&self) -> &dyn TransportObserver {
        self.observer.as_ref()
    }

    /// Base URL used for the given credentials
    #[must_use]
    pub fn base_url(&self, credentials: &Credentials) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| credentials.base_url())
    }

    /// Full URL of `path` for the given credentials
    #[must_use]
    pub fn url_for(&self, credentials: &Credentials, path: &str) -> String {
        build_url(&self.base_url(credentials), path)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path: &str,
    ) -> Result<T, AppError> {
        self.fetch(credentials, path, RequestOptions::default()).await
    }

    /// Sends an authenticated request and decodes the JSON response into `T`
    ///
    /// # Returns
    /// * `Err(AppError::Api)` - Non-success status, no retry
    /// * `Err(AppError::Network)` - Transport failure, passed through unchanged
    /// * `Err(AppError::Decode)` - Body is not valid JSON for `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let url = self.url_for(credentials, path);
        let headers = build_headers(credentials, &options.headers)?;

        let response = make_http_request(
            &self.http_client,
            self.observer.as_ref(),
            options.method,
            &url,
            headers,
            options.body.as_ref(),
        )
        .await?;

        parse_response(self.observer.as_ref(), &url, response).await
    }
}

/// Sends a single HTTP request and checks its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `observer` - Receives the request, response and failure events
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Complete header set
/// * `body` - Optional body, serialized to JSON
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - `Api` for a non-success status, `Network` when the request could not complete
pub async fn make_http_request(
    client: &Client,
    observer: &dyn TransportObserver,
    method: Method,
    url: &str,
    headers: HeaderMap,
    body: Option<&Value>,
) -> Result<Response, AppError> {
    observer.on_event(&TransportEvent::RequestStarted {
        method: method.to_string(),
        url: url.to_string(),
    });

    let mut request = client.request(method, url).headers(headers);
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            observer.on_event(&TransportEvent::RequestFailed {
                url: url.to_string(),
                error: e.to_string(),
            });
            return Err(AppError::Network(e));
        }
    };

    let status = response.status();
    observer.on_event(&TransportEvent::ResponseReceived {
        url: url.to_string(),
        status: status.as_u16(),
    });

    if status.is_success() {
        return Ok(response);
    }

    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let body = response.text().await.unwrap_or_default();
    observer.on_event(&TransportEvent::ApiError {
        url: url.to_string(),
        status: status.as_u16(),
        status_text: status_text.clone(),
        body,
    });

    Err(AppError::Api {
        status: status.as_u16(),
        status_text,
    })
}

async fn parse_response<T: DeserializeOwned>(
    observer: &dyn TransportObserver,
    url: &str,
    response: Response,
) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        observer.on_event(&TransportEvent::DecodeFailed {
            url: url.to_string(),
            error: e.to_string(),
        });
        AppError::Decode(e)
    })
}
