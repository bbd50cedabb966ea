//! Provider error types

use crate::api::ApiError;
use cloudexport_config::ConfigError;
use cloudexport_core::CloudExportError;
use cloudexport_core::schema::CLOUD_PROVIDER;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid cloud export configuration: {0}")]
    Mapping(#[from] CloudExportError),

    #[error("Invalid provider configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// How the host should treat a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Error report handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Attribute the error points at, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl ProviderError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (summary, detail, attribute) = match self {
            ProviderError::Mapping(e) => (
                "Invalid cloud export configuration",
                e.to_string(),
                mapping_attribute(e),
            ),
            ProviderError::Config(e) => {
                let attribute = match e {
                    ConfigError::MissingSetting { attribute, .. } => Some(attribute.to_string()),
                    ConfigError::InvalidSettings(_) => None,
                };
                ("Invalid provider configuration", e.to_string(), attribute)
            }
            ProviderError::Api(e) => ("Cloud export API request failed", e.to_string(), None),
        };

        Diagnostic {
            severity: Severity::Error,
            summary: summary.to_string(),
            detail,
            attribute,
        }
    }
}

fn mapping_attribute(error: &CloudExportError) -> Option<String> {
    match error {
        CloudExportError::MissingProviderConfiguration(p)
        | CloudExportError::MultipleProviderConfigurations { provider: p, .. } => {
            Some(p.to_string())
        }
        CloudExportError::UnsupportedProvider(_) => Some(CLOUD_PROVIDER.to_string()),
        CloudExportError::MissingAttribute(name)
        | CloudExportError::InvalidAttribute { name, .. } => Some(name.clone()),
    }
}
