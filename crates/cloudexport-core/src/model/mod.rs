//! Cloud export data model
//!
//! Canonical records exchanged with the Kentik cloud export API.

mod export;
mod provider;

pub use export::{CloudExport, CloudExportType, CurrentStatus};
pub use provider::{
    AwsProperties, AzureProperties, BgpProperties, CloudProvider, GceProperties, IbmProperties,
    ProviderProperties,
};
