/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::{Config, Credentials};
use crate::application::interfaces::page::PageService;
use crate::application::interfaces::space::SpaceService;
use crate::application::telemetry::{TracingObserver, TransportObserver};
use crate::constants::API_PATH;
use crate::error::AppError;
use crate::model::http::{HttpClient, encode_path_segment};
use crate::model::requests::{GetPageParams, GetSpaceParams, ListPagesParams, ListSpacesParams};
use crate::presentation::page::{PageDetailed, PagesResponse};
use crate::presentation::space::{SpaceDetailed, SpacesResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Any implementation of every Confluence service
pub trait ConfluenceApi: SpaceService + PageService {}

impl<T: SpaceService + PageService> ConfluenceApi for T {}

/// Confluence client
///
/// Resolves credentials from the injected configuration on every call and
/// delegates the request to [`HttpClient`].
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client that reports transport events to `tracing`
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    /// Creates a client with a custom transport observer
    pub fn with_observer(
        config: Config,
        observer: Arc<dyn TransportObserver>,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::new(&config, observer)?;
        Ok(Self {
            config: Arc::new(config),
            http_client: Arc::new(http_client),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn credentials(&self, action: &str) -> Result<Credentials, AppError> {
        self.config
            .credentials(self.http_client.observer())
            .ok_or_else(|| {
                AppError::MissingCredentials(format!(
                    "Atlassian credentials are required to {action}"
                ))
            })
    }
}

#[async_trait]
impl SpaceService for Client {
    async fn list_spaces(&self, params: &ListSpacesParams) -> Result<SpacesResponse, AppError> {
        debug!("Listing spaces");
        let credentials = self.credentials("list spaces")?;
        let path = format!("{API_PATH}/spaces{}", params.to_query().to_query_string());

        let result: SpacesResponse = self.http_client.get(&credentials, &path).await?;
        debug!("Spaces obtained: {} spaces", result.results.len());
        Ok(result)
    }

    async fn get_space(
        &self,
        id: &str,
        params: &GetSpaceParams,
    ) -> Result<SpaceDetailed, AppError> {
        debug!("Getting space: {}", id);
        let credentials = self.credentials("get space details")?;
        let path = format!(
            "{API_PATH}/spaces/{}{}",
            encode_path_segment(id)?,
            params.to_query().to_query_string()
        );

        let result: SpaceDetailed = self.http_client.get(&credentials, &path).await?;
        debug!("Space obtained: {}", result.space.key);
        Ok(result)
    }
}

#[async_trait]
impl PageService for Client {
    async fn list_pages(&self, params: &ListPagesParams) -> Result<PagesResponse, AppError> {
        debug!("Listing pages");
        let credentials = self.credentials("list pages")?;
        let path = format!("{API_PATH}/pages{}", params.to_query().to_query_string());

        let result: PagesResponse = self.http_client.get(&credentials, &path).await?;
        debug!("Pages obtained: {} pages", result.results.len());
        Ok(result)
    }

    async fn get_page(&self, id: &str, params: &GetPageParams) -> Result<PageDetailed, AppError> {
        debug!("Getting page: {}", id);
        let credentials = self.credentials("get page details")?;
        let path = format!(
            "{API_PATH}/pages/{}{}",
            encode_path_segment(id)?,
            params.to_query().to_query_string()
        );

        let result: PageDetailed = self.http_client.get(&credentials, &path).await?;
        debug!("Page obtained: {}", result.page.title);
        Ok(result)
    }
}
