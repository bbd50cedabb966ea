//! Provider schema exposed to the host

use cloudexport_config::{API_URL_ENV, DEFAULT_API_URL, EMAIL_ENV, TOKEN_ENV};
use cloudexport_core::{Access, Attribute, FieldMap, SchemaMode, describe, describe_list};
use serde::Serialize;
use std::collections::BTreeMap;

/// Resource type name of a managed cloud export
pub const RESOURCE_ITEM: &str = "kentik-cloudexport_item";

/// Data source type name of a single cloud export lookup
pub const DATA_SOURCE_ITEM: &str = "kentik-cloudexport_item";

/// Data source type name of the cloud export listing
pub const DATA_SOURCE_LIST: &str = "kentik-cloudexport_list";

/// Everything the host needs to know before configuring the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSchema {
    pub provider: FieldMap,
    pub resources: BTreeMap<String, FieldMap>,
    pub data_sources: BTreeMap<String, FieldMap>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        let mut resources = BTreeMap::new();
        resources.insert(RESOURCE_ITEM.to_string(), describe(SchemaMode::Create));

        let mut data_sources = BTreeMap::new();
        data_sources.insert(DATA_SOURCE_ITEM.to_string(), describe(SchemaMode::ReadSingle));
        data_sources.insert(DATA_SOURCE_LIST.to_string(), describe_list());

        Self {
            provider: provider_block(),
            resources,
            data_sources,
        }
    }
}

impl Default for ProviderSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Schema of the provider configuration block
pub fn provider_block() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert(
        "apiurl".to_string(),
        Attribute::string(Access::Optional)
            .with_env_default(API_URL_ENV)
            .with_description(format!(
                "Custom apiserver url can be specified either by apiurl attribute or {} environment variable. If not specified, default of {} will be used",
                API_URL_ENV, DEFAULT_API_URL
            )),
    );
    fields.insert(
        "email".to_string(),
        Attribute::string(Access::Required)
            .with_env_default(EMAIL_ENV)
            .with_description(format!(
                "Authorization. Either email attribute or {} environment variable is required",
                EMAIL_ENV
            )),
    );
    fields.insert(
        "token".to_string(),
        Attribute::string(Access::Required)
            .sensitive()
            .with_env_default(TOKEN_ENV)
            .with_description(format!(
                "Authorization. Either token attribute or {} environment variable is required",
                TOKEN_ENV
            )),
    );
    fields
}
