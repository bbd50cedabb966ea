//! Provider discriminator and provider-specific properties

use crate::error::CloudExportError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cloud provider a cloud export pulls flow data from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Bgp,
    Gce,
    Ibm,
}

impl CloudProvider {
    /// All supported providers, in schema order
    pub const ALL: [CloudProvider; 5] = [
        CloudProvider::Aws,
        CloudProvider::Azure,
        CloudProvider::Bgp,
        CloudProvider::Gce,
        CloudProvider::Ibm,
    ];

    /// Attribute name of the provider block, identical to the discriminator value
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Bgp => "bgp",
            CloudProvider::Gce => "gce",
            CloudProvider::Ibm => "ibm",
        }
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = CloudExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(CloudProvider::Aws),
            "azure" => Ok(CloudProvider::Azure),
            "bgp" => Ok(CloudProvider::Bgp),
            "gce" => Ok(CloudProvider::Gce),
            "ibm" => Ok(CloudProvider::Ibm),
            other => Err(CloudExportError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// AWS S3 flow log export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsProperties {
    pub bucket: String,
    pub iam_role_arn: String,
    pub region: String,
    pub delete_after_read: bool,
    pub multiple_buckets: bool,
}

/// Azure NSG flow log export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureProperties {
    pub location: String,
    pub resource_group: String,
    pub storage_account: String,
    pub subscription_id: String,
    pub security_principal_enabled: bool,
}

/// BGP enrichment settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgpProperties {
    pub apply_bgp: bool,
    pub use_bgp_device_id: String,
    pub device_bgp_type: String,
}

/// Google Cloud VPC flow log export (via Pub/Sub)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GceProperties {
    pub project: String,
    pub subscription: String,
}

/// IBM Cloud object storage export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbmProperties {
    pub bucket: String,
}

/// Provider-specific configuration; exactly one per cloud export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderProperties {
    Aws(AwsProperties),
    Azure(AzureProperties),
    Bgp(BgpProperties),
    Gce(GceProperties),
    Ibm(IbmProperties),
}

impl ProviderProperties {
    /// The discriminator matching this variant
    pub fn provider(&self) -> CloudProvider {
        match self {
            ProviderProperties::Aws(_) => CloudProvider::Aws,
            ProviderProperties::Azure(_) => CloudProvider::Azure,
            ProviderProperties::Bgp(_) => CloudProvider::Bgp,
            ProviderProperties::Gce(_) => CloudProvider::Gce,
            ProviderProperties::Ibm(_) => CloudProvider::Ibm,
        }
    }
}

impl From<AwsProperties> for ProviderProperties {
    fn from(p: AwsProperties) -> Self {
        ProviderProperties::Aws(p)
    }
}

impl From<AzureProperties> for ProviderProperties {
    fn from(p: AzureProperties) -> Self {
        ProviderProperties::Azure(p)
    }
}

impl From<BgpProperties> for ProviderProperties {
    fn from(p: BgpProperties) -> Self {
        ProviderProperties::Bgp(p)
    }
}

impl From<GceProperties> for ProviderProperties {
    fn from(p: GceProperties) -> Self {
        ProviderProperties::Gce(p)
    }
}

impl From<IbmProperties> for ProviderProperties {
    fn from(p: IbmProperties) -> Self {
        ProviderProperties::Ibm(p)
    }
}
