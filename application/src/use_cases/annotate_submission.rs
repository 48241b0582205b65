//! Annotate submission use case

use crate::ports::submission_store::{SubmissionStore, SubmissionStoreError};
use std::sync::Arc;
use tracing::info;

/// Input for one annotation upsert.
#[derive(Debug, Clone)]
pub struct AnnotateSubmissionInput {
    /// Row identity string; must be non-empty.
    pub id: String,
    pub note: String,
    pub teacher: String,
}

/// Use case for attaching a reviewer note to a row identity.
///
/// The id does not have to address an existing row: annotating ahead of a
/// row is allowed, and the row picks the note up once it exists.
pub struct AnnotateSubmissionUseCase {
    store: Arc<dyn SubmissionStore>,
}

impl AnnotateSubmissionUseCase {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: AnnotateSubmissionInput) -> Result<(), SubmissionStoreError> {
        if input.id.is_empty() {
            return Err(SubmissionStoreError::EmptyAnnotationId);
        }
        self.store
            .upsert_annotation(&input.id, &input.note, &input.teacher)
            .await?;
        info!(id = %input.id, "annotation upserted");
        Ok(())
    }
}
