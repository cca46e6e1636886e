use crate::{domain::responses::RawResponse, errors::ApiError};
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

pub type DynHttpExecutor = Arc<dyn HttpExecutorTrait + Send + Sync>;

#[async_trait]
pub trait HttpExecutorTrait {
    /// Issues one authenticated GET. Any status code is returned as-is.
    async fn execute(&self, url: Url) -> Result<RawResponse, ApiError>;
}
