use async_trait::async_trait;
use cloudexport_core::{Attributes, CloudExport, CurrentStatus};
use cloudexport_provider::{ApiError, ApiResult, CloudExportApi};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory stand-in for the cloud export API
#[derive(Default)]
pub struct MemoryApi {
    exports: Mutex<BTreeMap<String, CloudExport>>,
    next_id: Mutex<u64>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exports.lock().unwrap().len()
    }

    pub fn stored(&self, id: &str) -> Option<CloudExport> {
        self.exports.lock().unwrap().get(id).cloned()
    }

    fn assign_server_fields(&self, mut export: CloudExport) -> CloudExport {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        export.id = next_id.to_string();
        export.api_root = "https://api.kentik.com".to_string();
        export.flow_dest = "https://flow.kentik.com".to_string();
        export.current_status = Some(CurrentStatus {
            status: "OK".to_string(),
            flow_found: true,
            api_access: true,
            ..Default::default()
        });
        export
    }
}

#[async_trait]
impl CloudExportApi for MemoryApi {
    async fn list(&self) -> ApiResult<Vec<CloudExport>> {
        Ok(self.exports.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> ApiResult<CloudExport> {
        self.exports
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create(&self, export: &CloudExport) -> ApiResult<CloudExport> {
        let created = self.assign_server_fields(export.clone());
        self.exports
            .lock()
            .unwrap()
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn update(&self, export: &CloudExport) -> ApiResult<CloudExport> {
        let mut exports = self.exports.lock().unwrap();
        let existing = exports
            .get_mut(&export.id)
            .ok_or_else(|| ApiError::NotFound(export.id.clone()))?;

        let current_status = existing.current_status.take();
        *existing = CloudExport {
            current_status,
            ..export.clone()
        };
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.exports
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}

pub fn attrs(value: Value) -> Attributes {
    value.as_object().cloned().unwrap()
}
