//! Cloud export mapping error types

use crate::model::CloudProvider;
use thiserror::Error;

/// Errors raised while converting host attributes into a cloud export record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudExportError {
    #[error("for cloud_provider={0}, there should also be {0}{{...}} attribute provided")]
    MissingProviderConfiguration(CloudProvider),

    #[error("cloud_provider should be one of [aws, azure, ibm, gce, bgp], got: {0:?}")]
    UnsupportedProvider(String),

    #[error("{provider}{{...}} attribute accepts a single block, got {count}")]
    MultipleProviderConfigurations {
        provider: CloudProvider,
        count: usize,
    },

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("Invalid attribute {name}: expected {expected}")]
    InvalidAttribute {
        name: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CloudExportError>;
