//! List submissions use case

use crate::config::ListLimits;
use crate::ports::submission_store::{SubmissionPage, SubmissionStore, SubmissionStoreError};
use std::sync::Arc;
use tracing::debug;

/// Use case for reading back the most-recent rows of the log.
///
/// Applies the list bounds: a missing limit becomes the default, and no
/// caller can exceed the hard cap.
pub struct ListSubmissionsUseCase {
    store: Arc<dyn SubmissionStore>,
    limits: ListLimits,
}

impl ListSubmissionsUseCase {
    pub fn new(store: Arc<dyn SubmissionStore>, limits: ListLimits) -> Self {
        Self { store, limits }
    }

    pub async fn execute(
        &self,
        requested_limit: Option<usize>,
    ) -> Result<SubmissionPage, SubmissionStoreError> {
        let limit = self.limits.clamp(requested_limit);
        let page = self.store.list(limit).await?;
        debug!(limit, rows = page.rows.len(), "submissions listed");
        Ok(page)
    }
}

/// Use case for exporting the raw CSV file.
pub struct ExportLogUseCase {
    store: Arc<dyn SubmissionStore>,
}

impl ExportLogUseCase {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// The current file contents, or `None` while no submission has been
    /// logged yet.
    pub async fn execute(&self) -> Result<Option<String>, SubmissionStoreError> {
        self.store.raw_csv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct LimitRecordingStore {
        seen_limit: Mutex<Option<usize>>,
    }

    #[async_trait]
    impl SubmissionStore for LimitRecordingStore {
        async fn append(&self, _fields: &Map<String, Value>) -> Result<(), SubmissionStoreError> {
            Ok(())
        }

        async fn list(&self, limit: usize) -> Result<SubmissionPage, SubmissionStoreError> {
            *self.seen_limit.lock().await = Some(limit);
            Ok(SubmissionPage::default())
        }

        async fn update_row(
            &self,
            _id: usize,
            _updates: &Map<String, Value>,
        ) -> Result<(), SubmissionStoreError> {
            Ok(())
        }

        async fn upsert_annotation(
            &self,
            _id: &str,
            _note: &str,
            _teacher: &str,
        ) -> Result<(), SubmissionStoreError> {
            Ok(())
        }

        async fn raw_csv(&self) -> Result<Option<String>, SubmissionStoreError> {
            Ok(Some("timestamp\n".to_string()))
        }
    }

    #[tokio::test]
    async fn test_limit_is_clamped_before_the_store_sees_it() {
        let store = Arc::new(LimitRecordingStore::default());
        let use_case = ListSubmissionsUseCase::new(store.clone(), ListLimits::default());
        use_case.execute(Some(50_000)).await.unwrap();
        assert_eq!(*store.seen_limit.lock().await, Some(2000));
    }

    #[tokio::test]
    async fn test_default_limit_applies() {
        let store = Arc::new(LimitRecordingStore::default());
        let use_case = ListSubmissionsUseCase::new(store.clone(), ListLimits::default());
        use_case.execute(None).await.unwrap();
        assert_eq!(*store.seen_limit.lock().await, Some(200));
    }

    #[tokio::test]
    async fn test_export_passes_through() {
        let use_case = ExportLogUseCase::new(Arc::new(LimitRecordingStore::default()));
        assert_eq!(use_case.execute().await.unwrap().unwrap(), "timestamp\n");
    }
}
