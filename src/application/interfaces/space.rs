use crate::error::AppError;
use crate::model::requests::{GetSpaceParams, ListSpacesParams};
use crate::presentation::space::{SpaceDetailed, SpacesResponse};
use async_trait::async_trait;

/// Interface for the space service
#[async_trait]
pub trait SpaceService: Send + Sync {
    /// Lists spaces with optional filtering, sorting and pagination
    ///
    /// # Arguments
    /// * `params` - Filters mapped one-to-one onto query parameters
    ///
    /// # Returns
    /// * One page of spaces and the link to the next one
    async fn list_spaces(&self, params: &ListSpacesParams) -> Result<SpacesResponse, AppError>;

    /// Gets a space by id
    async fn get_space(&self, id: &str, params: &GetSpaceParams)
    -> Result<SpaceDetailed, AppError>;
}
