//! Domain layer for vox-widget
//!
//! Core types for the speaking-practice widget service: configuration kinds
//! with their compiled-in fallback documents, the submission record model,
//! and the CSV codec used by the submission log.
//!
//! This crate performs no I/O and has no dependencies on the infrastructure
//! or presentation layers.

pub mod config;
pub mod csv;
pub mod submission;

// Re-export commonly used types
pub use config::{ConfigKind, UnknownKindError, default_document, normalize_document};
pub use csv::{decode_record, encode_field, encode_record, flatten_newlines};
pub use submission::{Annotation, MergedSubmission, SUBMISSION_FIELDS, scalar_to_string};
