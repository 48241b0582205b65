//! Amend submission use case

use crate::ports::submission_store::{SubmissionStore, SubmissionStoreError};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use vox_domain::normalize_document;

/// Use case for a partial update of one existing log row.
///
/// The only operation that rewrites log history. Field keys are matched
/// against the file's own header by the store; unknown keys are silently
/// ignored, so an amendment written against a newer schema cannot corrupt
/// an older file.
pub struct AmendSubmissionUseCase {
    store: Arc<dyn SubmissionStore>,
}

impl AmendSubmissionUseCase {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: usize, payload: Value) -> Result<(), SubmissionStoreError> {
        let updates = normalize_document(payload);
        self.store.update_row(id, &updates).await?;
        info!(id, fields = updates.len(), "submission row amended");
        Ok(())
    }
}
