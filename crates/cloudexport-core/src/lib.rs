//! Kentik Cloud Export core
//!
//! Record model, schema descriptor and attribute mapper shared by the
//! cloud export provider.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              orchestration host                  │
//! │        (schema requests, attribute maps)         │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               cloudexport-core                   │
//! │  ┌──────────────────┐  ┌──────────────────────┐ │
//! │  │ schema::describe │  │ mapper::to_external  │ │
//! │  │  (mode → fields) │  │ mapper::from_external│ │
//! │  └──────────────────┘  └──────────┬───────────┘ │
//! └───────────────────────────────────┼─────────────┘
//!                                     │ CloudExport
//!                         ┌───────────▼───────────┐
//!                         │   cloud export API    │
//!                         └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use cloudexport_core::{CloudProvider, SchemaMode, describe, from_external};
//! use serde_json::json;
//!
//! let schema = describe(SchemaMode::Create);
//! assert!(schema["cloud_provider"].is_required());
//!
//! let attrs = json!({
//!     "type": "CLOUD_EXPORT_TYPE_CUSTOMER_MANAGED",
//!     "name": "export1",
//!     "plan_id": "42",
//!     "cloud_provider": "ibm",
//!     "ibm": [{ "bucket": "my-bucket" }],
//! });
//! let export = from_external(attrs.as_object().unwrap()).unwrap();
//! assert_eq!(export.cloud_provider(), CloudProvider::Ibm);
//! ```

pub mod attributes;
pub mod error;
pub mod mapper;
pub mod model;
pub mod schema;

// Re-exports
pub use attributes::{Attributes, AttributesExt};
pub use error::{CloudExportError, Result};
pub use mapper::{from_external, to_external};
pub use model::{
    AwsProperties, AzureProperties, BgpProperties, CloudExport, CloudExportType, CloudProvider,
    CurrentStatus, GceProperties, IbmProperties, ProviderProperties,
};
pub use schema::{Access, Attribute, AttributeType, FieldMap, SchemaMode, describe, describe_list};
