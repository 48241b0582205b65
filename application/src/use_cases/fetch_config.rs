//! Fetch config use case

use crate::ports::config_store::ConfigStore;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;
use vox_domain::ConfigKind;

/// Use case for reading the resolved configuration document of a kind.
///
/// Infallible: the store's tier chain guarantees a document for every
/// known kind.
pub struct FetchConfigUseCase {
    store: Arc<dyn ConfigStore>,
}

impl FetchConfigUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, kind: ConfigKind) -> Map<String, Value> {
        let document = self.store.resolve(kind).await;
        debug!(%kind, keys = document.len(), "config fetched");
        document
    }
}
