//! Kentik cloud export provider
//!
//! Resource and data source handlers loaded by the orchestration host.
//!
//! # Surface
//!
//! - Resource `kentik-cloudexport_item`: create, read, update, delete
//! - Data source `kentik-cloudexport_item`: single item by `id`
//! - Data source `kentik-cloudexport_list`: all items
//!
//! # Configuration
//!
//! The provider block accepts `apiurl`, `email` and `token`, each falling back
//! to `KTAPI_URL`, `KTAPI_AUTH_EMAIL` and `KTAPI_AUTH_TOKEN`.
//!
//! # Example
//!
//! ```ignore
//! use cloudexport_provider::CloudExportProvider;
//!
//! let provider = CloudExportProvider::configure(&provider_block, |config| {
//!     KentikClient::new(&config.api_url, &config.email, config.token.expose())
//! })?;
//!
//! let state = provider.create(&planned).await?;
//! ```

pub mod api;
pub mod error;
pub mod logging;
pub mod provider;
pub mod schema;

pub use api::{ApiError, ApiResult, CloudExportApi};
pub use error::{Diagnostic, ProviderError, Result, Severity};
pub use provider::CloudExportProvider;
pub use schema::{DATA_SOURCE_ITEM, DATA_SOURCE_LIST, ProviderSchema, RESOURCE_ITEM};
