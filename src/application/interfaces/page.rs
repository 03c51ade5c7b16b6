use crate::error::AppError;
use crate::model::requests::{GetPageParams, ListPagesParams};
use crate::presentation::page::{PageDetailed, PagesResponse};
use async_trait::async_trait;

/// Interface for the page service
#[async_trait]
pub trait PageService: Send + Sync {
    /// Lists pages with optional filtering, sorting and pagination
    async fn list_pages(&self, params: &ListPagesParams) -> Result<PagesResponse, AppError>;

    /// Gets a page by id
    async fn get_page(&self, id: &str, params: &GetPageParams) -> Result<PageDetailed, AppError>;
}
