//! Submission log port
//!
//! Defines the append-only CSV log of widget submissions: append with
//! read-back, bounded pagination, row-level amendment, and the annotation
//! side-table merged into reads.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use vox_domain::MergedSubmission;

/// Errors from submission log operations.
#[derive(Error, Debug)]
pub enum SubmissionStoreError {
    /// The log file does not exist yet, so there is no row to address.
    #[error("submission log does not exist")]
    LogMissing,

    /// Row id past the end of the log.
    #[error("row {0} is out of range")]
    RowOutOfRange(usize),

    /// Annotation upserts require a non-empty id.
    #[error("annotation id must not be empty")]
    EmptyAnnotationId,

    #[error("log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("annotation store could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One page of decoded log rows.
#[derive(Debug, Clone, Default)]
pub struct SubmissionPage {
    /// The file's own header fields, in column order.
    pub header: Vec<String>,
    /// Decoded rows, oldest first, annotations merged in.
    pub rows: Vec<MergedSubmission>,
}

/// Durable append-only store of submission records.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Append one record, creating the file (header included) on first use.
    ///
    /// Unknown fields are dropped; missing fields are stored empty.
    async fn append(&self, fields: &Map<String, Value>) -> Result<(), SubmissionStoreError>;

    /// Read back at most `limit` most-recent rows with annotations merged.
    ///
    /// An absent file yields an empty page, not an error. Row ids reflect
    /// positions in the full file, not in the returned page.
    async fn list(&self, limit: usize) -> Result<SubmissionPage, SubmissionStoreError>;

    /// Overwrite the given fields on one existing row.
    ///
    /// Fields are matched against the file's own header; unknown keys are
    /// ignored. Every other row is preserved byte-for-byte.
    async fn update_row(
        &self,
        id: usize,
        updates: &Map<String, Value>,
    ) -> Result<(), SubmissionStoreError>;

    /// Create or replace the annotation stored under `id`.
    async fn upsert_annotation(
        &self,
        id: &str,
        note: &str,
        teacher: &str,
    ) -> Result<(), SubmissionStoreError>;

    /// Raw CSV contents for export; `None` while the log is absent.
    async fn raw_csv(&self) -> Result<Option<String>, SubmissionStoreError>;
}
