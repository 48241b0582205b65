//! Tiered configuration store.
//!
//! Resolution walks an ordered list of tier directories and returns the
//! first parseable JSON object found, falling back to the compiled-in
//! document for the kind. A missing file and a corrupt file are treated
//! identically: skip the tier and keep going. Writes go to the first
//! (writable) tier only.

use crate::fs::write_atomic;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vox_application::ports::config_store::{ConfigStore, ConfigStoreError};
use vox_domain::{ConfigKind, default_document};

/// File-backed [`ConfigStore`] with runtime-override and repository-default
/// tiers.
pub struct TieredConfigStore {
    /// Writable tier; `save` targets this directory.
    writable: PathBuf,
    /// Read-only tiers consulted after the writable one, in order.
    read_only: Vec<PathBuf>,
    /// One write lock per kind so saves to different kinds don't contend.
    locks: [Mutex<()>; 3],
}

impl TieredConfigStore {
    pub fn new(data_dir: impl Into<PathBuf>, src_dir: impl Into<PathBuf>) -> Self {
        Self {
            writable: data_dir.into(),
            read_only: vec![src_dir.into()],
            locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
        }
    }

    /// Tier directories in priority order.
    fn tiers(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.writable).chain(self.read_only.iter())
    }

    fn write_lock(&self, kind: ConfigKind) -> &Mutex<()> {
        match kind {
            ConfigKind::Widget => &self.locks[0],
            ConfigKind::Forms => &self.locks[1],
            ConfigKind::Images => &self.locks[2],
        }
    }

    /// Read one tier file; `None` means "try the next tier".
    fn read_tier(path: &Path) -> Option<Map<String, Value>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config tier unreadable, skipping");
                return None;
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                warn!(path = %path.display(), "config tier is not a JSON object, skipping");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config tier failed to parse, skipping");
                None
            }
        }
    }
}

#[async_trait]
impl ConfigStore for TieredConfigStore {
    async fn resolve(&self, kind: ConfigKind) -> Map<String, Value> {
        for tier in self.tiers() {
            let path = tier.join(kind.file_name());
            if let Some(document) = Self::read_tier(&path) {
                debug!(%kind, path = %path.display(), "config resolved from tier file");
                return document;
            }
        }
        debug!(%kind, "config resolved from compiled-in default");
        default_document(kind)
    }

    async fn save(
        &self,
        kind: ConfigKind,
        document: Map<String, Value>,
    ) -> Result<(), ConfigStoreError> {
        let _guard = self.write_lock(kind).lock().await;
        let path = self.writable.join(kind.file_name());
        let text = serde_json::to_string_pretty(&Value::Object(document))?;
        write_atomic(&path, &text)?;
        info!(%kind, path = %path.display(), "config written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store(dirs: &TempDir) -> TieredConfigStore {
        TieredConfigStore::new(dirs.path().join("data"), dirs.path().join("src"))
    }

    #[tokio::test]
    async fn test_empty_tiers_fall_back_to_default() {
        let dirs = TempDir::new().unwrap();
        let doc = store(&dirs).resolve(ConfigKind::Widget).await;
        assert_eq!(doc, default_document(ConfigKind::Widget));
    }

    #[tokio::test]
    async fn test_repository_tier_beats_default() {
        let dirs = TempDir::new().unwrap();
        let src = dirs.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("form.json"), r#"{"headline": "From repo"}"#).unwrap();

        let doc = store(&dirs).resolve(ConfigKind::Forms).await;
        assert_eq!(doc["headline"], json!("From repo"));
    }

    #[tokio::test]
    async fn test_writable_tier_beats_repository_tier() {
        let dirs = TempDir::new().unwrap();
        let src = dirs.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("form.json"), r#"{"headline": "From repo"}"#).unwrap();

        let store = store(&dirs);
        store
            .save(
                ConfigKind::Forms,
                vox_domain::normalize_document(json!({"headline": "From admin"})),
            )
            .await
            .unwrap();

        let doc = store.resolve(ConfigKind::Forms).await;
        assert_eq!(doc["headline"], json!("From admin"));
    }

    #[tokio::test]
    async fn test_corrupt_writable_tier_falls_through() {
        let dirs = TempDir::new().unwrap();
        let data = dirs.path().join("data");
        let src = dirs.path().join("src");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(&src).unwrap();
        fs::write(data.join("image.json"), "{not json").unwrap();
        fs::write(src.join("image.json"), r#"{"logoDataUrl": "data:ok"}"#).unwrap();

        let doc = store(&dirs).resolve(ConfigKind::Images).await;
        assert_eq!(doc["logoDataUrl"], json!("data:ok"));
    }

    #[tokio::test]
    async fn test_non_object_tier_falls_through_to_default() {
        let dirs = TempDir::new().unwrap();
        let data = dirs.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("config.json"), "[1, 2, 3]").unwrap();

        let doc = store(&dirs).resolve(ConfigKind::Widget).await;
        assert_eq!(doc, default_document(ConfigKind::Widget));
    }

    #[tokio::test]
    async fn test_save_then_resolve_round_trips() {
        let dirs = TempDir::new().unwrap();
        let store = store(&dirs);
        let document =
            vox_domain::normalize_document(json!({"theme": "slate", "audioMaxSeconds": 120}));

        store.save(ConfigKind::Widget, document.clone()).await.unwrap();
        assert_eq!(store.resolve(ConfigKind::Widget).await, document);

        // Written pretty-printed, object root
        let on_disk =
            fs::read_to_string(dirs.path().join("data").join("config.json")).unwrap();
        assert!(on_disk.starts_with("{\n"));
    }

    #[tokio::test]
    async fn test_save_creates_missing_data_dir() {
        let dirs = TempDir::new().unwrap();
        let store = store(&dirs);
        store
            .save(ConfigKind::Images, Map::new())
            .await
            .unwrap();
        assert!(dirs.path().join("data").join("image.json").exists());
    }
}
