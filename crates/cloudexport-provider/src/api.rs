//! Cloud export API seam
//!
//! The HTTP client lives outside this crate; the provider only talks to it
//! through [`CloudExportApi`].

use async_trait::async_trait;
use cloudexport_core::CloudExport;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by the API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Cloud export not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request failed: {0}")]
    Request(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Cloud export CRUD operations of the remote API
#[async_trait]
pub trait CloudExportApi: Send + Sync {
    /// List all cloud exports of the account
    async fn list(&self) -> ApiResult<Vec<CloudExport>>;

    /// Fetch one cloud export by id
    async fn get(&self, id: &str) -> ApiResult<CloudExport>;

    /// Create a cloud export; the returned record carries the server-assigned fields
    async fn create(&self, export: &CloudExport) -> ApiResult<CloudExport>;

    /// Replace the cloud export identified by `export.id`
    async fn update(&self, export: &CloudExport) -> ApiResult<CloudExport>;

    /// Delete a cloud export by id
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

#[async_trait]
impl<T: CloudExportApi + ?Sized> CloudExportApi for Arc<T> {
    async fn list(&self) -> ApiResult<Vec<CloudExport>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> ApiResult<CloudExport> {
        (**self).get(id).await
    }

    async fn create(&self, export: &CloudExport) -> ApiResult<CloudExport> {
        (**self).create(export).await
    }

    async fn update(&self, export: &CloudExport) -> ApiResult<CloudExport> {
        (**self).update(export).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        (**self).delete(id).await
    }
}
