//! CSV-backed submission log.
//!
//! One header line plus one line per record. The file has two states:
//! absent (nothing logged yet) and present (header fixed, N rows). The
//! only absent-to-present transition is the first append, which writes
//! header and row in a single call so no reader can observe a headerless
//! file.
//!
//! Reads and updates map columns through the file's *own* header row, not
//! the compiled-in field list — a log written before a schema change keeps
//! its original column order and stays addressable.
//!
//! All three CSV operations (append, list, update) serialize through one
//! mutex; the annotation side-table has its own, so annotating never
//! blocks logging.

use super::annotations::AnnotationFile;
use crate::fs::write_atomic;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{debug, info};
use vox_application::ports::submission_store::{
    SubmissionPage, SubmissionStore, SubmissionStoreError,
};
use vox_domain::{
    Annotation, MergedSubmission, SUBMISSION_FIELDS, decode_record, encode_record,
    flatten_newlines, scalar_to_string,
};

const LOG_FILE: &str = "log.csv";
const ANNOTATION_FILE: &str = "annotations.json";

/// File-backed [`SubmissionStore`].
pub struct CsvSubmissionStore {
    path: PathBuf,
    csv_lock: Mutex<()>,
    annotations: AnnotationFile,
}

impl CsvSubmissionStore {
    /// Store rooted at `dir`, owning `log.csv` and `annotations.json`
    /// inside it.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            path: dir.join(LOG_FILE),
            csv_lock: Mutex::new(()),
            annotations: AnnotationFile::new(dir.join(ANNOTATION_FILE)),
        }
    }

    fn header_line() -> String {
        // Canonical field names never need quoting.
        SUBMISSION_FIELDS.join(",")
    }

    /// Build a full row in `header` order: unknown incoming fields are
    /// dropped, missing ones default to empty, and embedded line breaks
    /// are flattened so the file stays line-oriented.
    fn build_row(header: &[String], fields: &Map<String, Value>) -> Vec<String> {
        header
            .iter()
            .map(|name| {
                fields
                    .get(name.as_str())
                    .map(|v| flatten_newlines(&scalar_to_string(v)))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// The existing file's header row; `None` when the file is absent or
    /// still empty. Header order is fixed at file-creation time, so every
    /// append must honor it even when it predates the current field list.
    fn read_header(&self) -> Result<Option<Vec<String>>, io::Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let mut first_line = String::new();
        BufReader::new(file).read_line(&mut first_line)?;
        let first_line = first_line.trim_end_matches(['\r', '\n']);
        if first_line.is_empty() {
            return Ok(None);
        }
        Ok(Some(decode_record(first_line)))
    }

    fn read_log(&self) -> Result<Option<String>, io::Error> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn empty_page() -> SubmissionPage {
        SubmissionPage {
            header: SUBMISSION_FIELDS.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

#[async_trait]
impl SubmissionStore for CsvSubmissionStore {
    async fn append(&self, fields: &Map<String, Value>) -> Result<(), SubmissionStoreError> {
        let _guard = self.csv_lock.lock().await;

        match self.read_header()? {
            Some(header) => {
                let row = encode_record(&Self::build_row(&header, fields));
                let mut file = OpenOptions::new().append(true).open(&self.path)?;
                file.write_all(format!("{row}\n").as_bytes())?;
            }
            None => {
                let header: Vec<String> =
                    SUBMISSION_FIELDS.iter().map(|s| s.to_string()).collect();
                let row = encode_record(&Self::build_row(&header, fields));
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.path, format!("{}\n{row}\n", Self::header_line()))?;
            }
        }
        debug!(path = %self.path.display(), "submission row appended");
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<SubmissionPage, SubmissionStoreError> {
        let text = {
            let _guard = self.csv_lock.lock().await;
            match self.read_log()? {
                Some(text) => text,
                None => return Ok(Self::empty_page()),
            }
        };

        let mut lines = text.lines();
        let Some(header_line) = lines.next() else {
            return Ok(Self::empty_page());
        };
        let header = decode_record(header_line);
        let data: Vec<&str> = lines.collect();

        let start = data.len().saturating_sub(limit);
        let annotations = self.annotations.load().await;

        let rows = data[start..]
            .iter()
            .enumerate()
            .map(|(offset, line)| {
                let id = start + offset;
                let values = decode_record(line);
                let fields = header
                    .iter()
                    .enumerate()
                    .map(|(column, name)| {
                        (name.clone(), values.get(column).cloned().unwrap_or_default())
                    })
                    .collect();
                let annotation = annotations
                    .get(&id.to_string())
                    .cloned()
                    .unwrap_or_else(Annotation::default);
                MergedSubmission {
                    id,
                    fields,
                    annotation,
                }
            })
            .collect();

        Ok(SubmissionPage { header, rows })
    }

    async fn update_row(
        &self,
        id: usize,
        updates: &Map<String, Value>,
    ) -> Result<(), SubmissionStoreError> {
        let _guard = self.csv_lock.lock().await;
        let text = match self.read_log()? {
            Some(text) => text,
            None => return Err(SubmissionStoreError::LogMissing),
        };

        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            return Err(SubmissionStoreError::LogMissing);
        }
        let row_count = lines.len() - 1;
        if id >= row_count {
            return Err(SubmissionStoreError::RowOutOfRange(id));
        }

        let header = decode_record(&lines[0]);
        let line_index = id + 1;
        let mut values = decode_record(&lines[line_index]);
        // Pad short rows so positional writes cannot land out of bounds.
        if values.len() < header.len() {
            values.resize(header.len(), String::new());
        }

        for (key, value) in updates {
            if let Some(column) = header.iter().position(|name| name == key) {
                values[column] = flatten_newlines(&scalar_to_string(value));
            }
        }

        lines[line_index] = encode_record(&values);
        let mut contents = lines.join("\n");
        contents.push('\n');
        write_atomic(&self.path, &contents)?;
        info!(id, "submission row rewritten");
        Ok(())
    }

    async fn upsert_annotation(
        &self,
        id: &str,
        note: &str,
        teacher: &str,
    ) -> Result<(), SubmissionStoreError> {
        self.annotations.upsert(id, note, teacher).await
    }

    async fn raw_csv(&self) -> Result<Option<String>, SubmissionStoreError> {
        let _guard = self.csv_lock.lock().await;
        Ok(self.read_log()?)
    }
}
