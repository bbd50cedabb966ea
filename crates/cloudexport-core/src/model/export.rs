//! Cloud export record

use super::provider::{
    AwsProperties, AzureProperties, BgpProperties, CloudProvider, GceProperties, IbmProperties,
    ProviderProperties,
};
use crate::error::CloudExportError;
use serde::{Deserialize, Serialize};

/// Who operates the export pipeline
///
/// Values the API adds later, or `CLOUD_EXPORT_TYPE_UNSPECIFIED`, are kept
/// verbatim in `Other` so they survive a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CloudExportType {
    KentikManaged,
    CustomerManaged,
    Other(String),
}

impl CloudExportType {
    pub fn as_str(&self) -> &str {
        match self {
            CloudExportType::KentikManaged => "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            CloudExportType::CustomerManaged => "CLOUD_EXPORT_TYPE_CUSTOMER_MANAGED",
            CloudExportType::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for CloudExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CloudExportType {
    fn from(s: &str) -> Self {
        match s {
            "CLOUD_EXPORT_TYPE_KENTIK_MANAGED" => CloudExportType::KentikManaged,
            "CLOUD_EXPORT_TYPE_CUSTOMER_MANAGED" => CloudExportType::CustomerManaged,
            other => CloudExportType::Other(other.to_string()),
        }
    }
}

impl From<String> for CloudExportType {
    fn from(s: String) -> Self {
        CloudExportType::from(s.as_str())
    }
}

impl From<CloudExportType> for String {
    fn from(t: CloudExportType) -> Self {
        match t {
            CloudExportType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Health of the export as last observed by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentStatus {
    pub status: String,
    pub error_message: String,
    pub flow_found: bool,
    pub api_access: bool,
    pub storage_account_access: bool,
}

/// A single cloud export configuration
///
/// `id`, `api_root`, `flow_dest` and `current_status` are assigned by the
/// server. The cloud provider is implied by `properties`, so a record can
/// never carry a payload that disagrees with its discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CloudExportWire", into = "CloudExportWire")]
pub struct CloudExport {
    pub id: String,
    pub export_type: CloudExportType,
    pub enabled: bool,
    pub name: String,
    pub description: String,
    pub api_root: String,
    pub flow_dest: String,
    pub plan_id: String,
    pub properties: ProviderProperties,
    pub current_status: Option<CurrentStatus>,
}

impl CloudExport {
    /// Create a record with the user-required fields set and server fields empty
    pub fn new(
        export_type: CloudExportType,
        name: impl Into<String>,
        plan_id: impl Into<String>,
        properties: impl Into<ProviderProperties>,
    ) -> Self {
        Self {
            id: String::new(),
            export_type,
            enabled: false,
            name: name.into(),
            description: String::new(),
            api_root: String::new(),
            flow_dest: String::new(),
            plan_id: plan_id.into(),
            properties: properties.into(),
            current_status: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_current_status(mut self, status: CurrentStatus) -> Self {
        self.current_status = Some(status);
        self
    }

    /// Discriminator derived from the populated payload
    pub fn cloud_provider(&self) -> CloudProvider {
        self.properties.provider()
    }
}

/// API JSON shape: a `cloudProvider` string with one sibling object per provider
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudExportWire {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    export_type: CloudExportType,
    #[serde(default)]
    enabled: bool,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    api_root: String,
    #[serde(default)]
    flow_dest: String,
    #[serde(default)]
    plan_id: String,
    cloud_provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aws: Option<AwsProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    azure: Option<AzureProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bgp: Option<BgpProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gce: Option<GceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ibm: Option<IbmProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_status: Option<CurrentStatus>,
}

impl TryFrom<CloudExportWire> for CloudExport {
    type Error = CloudExportError;

    fn try_from(wire: CloudExportWire) -> Result<Self, Self::Error> {
        let provider: CloudProvider = wire.cloud_provider.parse()?;
        let properties = match provider {
            CloudProvider::Aws => wire.aws.map(ProviderProperties::Aws),
            CloudProvider::Azure => wire.azure.map(ProviderProperties::Azure),
            CloudProvider::Bgp => wire.bgp.map(ProviderProperties::Bgp),
            CloudProvider::Gce => wire.gce.map(ProviderProperties::Gce),
            CloudProvider::Ibm => wire.ibm.map(ProviderProperties::Ibm),
        }
        .ok_or(CloudExportError::MissingProviderConfiguration(provider))?;

        Ok(Self {
            id: wire.id,
            export_type: wire.export_type,
            enabled: wire.enabled,
            name: wire.name,
            description: wire.description,
            api_root: wire.api_root,
            flow_dest: wire.flow_dest,
            plan_id: wire.plan_id,
            properties,
            current_status: wire.current_status,
        })
    }
}

impl From<CloudExport> for CloudExportWire {
    fn from(export: CloudExport) -> Self {
        let mut wire = CloudExportWire {
            id: export.id,
            export_type: export.export_type,
            enabled: export.enabled,
            name: export.name,
            description: export.description,
            api_root: export.api_root,
            flow_dest: export.flow_dest,
            plan_id: export.plan_id,
            cloud_provider: export.properties.provider().to_string(),
            aws: None,
            azure: None,
            bgp: None,
            gce: None,
            ibm: None,
            current_status: export.current_status,
        };
        match export.properties {
            ProviderProperties::Aws(p) => wire.aws = Some(p),
            ProviderProperties::Azure(p) => wire.azure = Some(p),
            ProviderProperties::Bgp(p) => wire.bgp = Some(p),
            ProviderProperties::Gce(p) => wire.gce = Some(p),
            ProviderProperties::Ibm(p) => wire.ibm = Some(p),
        }
        wire
    }
}
