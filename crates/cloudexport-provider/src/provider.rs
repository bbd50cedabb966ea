//! Cloud export provider implementation
//!
//! Each handler converts host attributes through the core mapper and calls
//! the API client with the canonical record.

use crate::api::{ApiError, CloudExportApi};
use crate::error::Result;
use crate::schema::ProviderSchema;
use cloudexport_config::{ProviderConfig, ProviderSettings};
use cloudexport_core::schema::ITEMS;
use cloudexport_core::{Attributes, AttributesExt, CloudExportError, from_external, to_external};
use serde_json::Value;

/// Kentik cloud export provider
pub struct CloudExportProvider<A> {
    api: A,
}

impl<A: CloudExportApi> CloudExportProvider<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Resolve the provider block and build the API client from it
    pub fn configure<F>(attrs: &Attributes, connect: F) -> Result<Self>
    where
        F: FnOnce(&ProviderConfig) -> A,
    {
        let config = ProviderConfig::resolve(ProviderSettings::from_attributes(attrs)?)?;
        tracing::debug!(
            api_url = %config.api_url,
            email = %config.email,
            "Configuring cloud export provider"
        );
        Ok(Self::new(connect(&config)))
    }

    pub fn schema() -> ProviderSchema {
        ProviderSchema::new()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// `kentik-cloudexport_item` data source: look one item up by id
    pub async fn read_item_data_source(&self, attrs: &Attributes) -> Result<Attributes> {
        let id = resource_id(attrs)?;
        tracing::debug!("Reading cloud export {}", id);
        let export = self.api.get(&id).await?;
        Ok(to_external(&export))
    }

    /// `kentik-cloudexport_list` data source: every item of the account
    pub async fn read_list_data_source(&self) -> Result<Attributes> {
        let exports = self.api.list().await?;
        tracing::debug!("Listed {} cloud exports", exports.len());

        let items = exports
            .iter()
            .map(|export| Value::Object(to_external(export)))
            .collect();

        let mut attrs = Attributes::new();
        attrs.insert(ITEMS.to_string(), Value::Array(items));
        Ok(attrs)
    }

    /// Create the resource; returns the state to store
    pub async fn create(&self, attrs: &Attributes) -> Result<Attributes> {
        let export = from_external(attrs)?;
        tracing::info!(
            "Creating cloud export {} ({})",
            export.name,
            export.cloud_provider()
        );

        let created = self.api.create(&export).await?;
        tracing::debug!("Created cloud export {}", created.id);
        Ok(to_external(&created))
    }

    /// Refresh the resource state
    ///
    /// Returns `None` when the item is gone on the server, so the host can
    /// drop it from its state.
    pub async fn read(&self, state: &Attributes) -> Result<Option<Attributes>> {
        let id = resource_id(state)?;
        match self.api.get(&id).await {
            Ok(export) => Ok(Some(to_external(&export))),
            Err(ApiError::NotFound(_)) => {
                tracing::warn!("Cloud export {} no longer exists, removing from state", id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update the resource in place; `attrs` must carry the stored `id`
    pub async fn update(&self, attrs: &Attributes) -> Result<Attributes> {
        let id = resource_id(attrs)?;
        let export = from_external(attrs)?;
        tracing::info!("Updating cloud export {}", id);

        let updated = self.api.update(&export).await?;
        Ok(to_external(&updated))
    }

    pub async fn delete(&self, state: &Attributes) -> Result<()> {
        let id = resource_id(state)?;
        tracing::info!("Deleting cloud export {}", id);
        self.api.delete(&id).await?;
        Ok(())
    }
}

fn resource_id(attrs: &Attributes) -> Result<String> {
    let id = attrs.string_or_default("id")?;
    if id.is_empty() {
        return Err(CloudExportError::MissingAttribute("id".to_string()).into());
    }
    Ok(id)
}
