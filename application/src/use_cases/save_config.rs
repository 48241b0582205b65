//! Save config use case

use crate::ports::config_store::{ConfigStore, ConfigStoreError};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use vox_domain::{ConfigKind, normalize_document};

/// Use case for replacing the writable-tier document of a kind.
///
/// Payloads that are not JSON objects are normalized to the empty object
/// before storage, never rejected; write failures surface to the caller.
pub struct SaveConfigUseCase {
    store: Arc<dyn ConfigStore>,
}

impl SaveConfigUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, kind: ConfigKind, payload: Value) -> Result<(), ConfigStoreError> {
        let document = normalize_document(payload);
        self.store.save(kind, document).await?;
        info!(%kind, "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Map, json};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct CapturingStore {
        saved: Mutex<Option<Map<String, Value>>>,
    }

    #[async_trait]
    impl ConfigStore for CapturingStore {
        async fn resolve(&self, _kind: ConfigKind) -> Map<String, Value> {
            Map::new()
        }

        async fn save(
            &self,
            _kind: ConfigKind,
            document: Map<String, Value>,
        ) -> Result<(), ConfigStoreError> {
            *self.saved.lock().await = Some(document);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_object_payload_is_stored_as_is() {
        let store = Arc::new(CapturingStore::default());
        let use_case = SaveConfigUseCase::new(store.clone());
        use_case
            .execute(ConfigKind::Forms, json!({"headline": "Hi"}))
            .await
            .unwrap();
        let saved = store.saved.lock().await.clone().unwrap();
        assert_eq!(saved["headline"], json!("Hi"));
    }

    #[tokio::test]
    async fn test_non_object_payload_becomes_empty_document() {
        let store = Arc::new(CapturingStore::default());
        let use_case = SaveConfigUseCase::new(store.clone());
        use_case
            .execute(ConfigKind::Forms, json!([1, 2, 3]))
            .await
            .unwrap();
        let saved = store.saved.lock().await.clone().unwrap();
        assert!(saved.is_empty());
    }
}
