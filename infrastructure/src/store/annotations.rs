//! Keyed annotation side-table.
//!
//! One JSON file mapping row-identity strings to annotations. Loaded in
//! full and rewritten in full (atomically) on each upsert; the store is
//! small and write volume is low, so no incremental format is needed.

use crate::fs::write_atomic;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;
use vox_application::ports::submission_store::SubmissionStoreError;
use vox_domain::Annotation;

pub(crate) struct AnnotationFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AnnotationFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// The full annotation map. Absent or corrupt files read as empty.
    pub async fn load(&self) -> BTreeMap<String, Annotation> {
        let _guard = self.lock.lock().await;
        Self::read_map(&self.path)
    }

    /// Replace the entry under `id`, stamping `updatedAt`.
    pub async fn upsert(
        &self,
        id: &str,
        note: &str,
        teacher: &str,
    ) -> Result<(), SubmissionStoreError> {
        let _guard = self.lock.lock().await;
        let mut map = Self::read_map(&self.path);
        map.insert(
            id.to_string(),
            Annotation {
                note: note.to_string(),
                teacher: teacher.to_string(),
                updated_at: chrono::Utc::now()
                    .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            },
        );
        let text = serde_json::to_string_pretty(&map)?;
        write_atomic(&self.path, &text)?;
        Ok(())
    }

    fn read_map(path: &Path) -> BTreeMap<String, Annotation> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "annotation store unreadable");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "annotation store corrupt, starting empty");
                BTreeMap::new()
            }
        }
    }
}
