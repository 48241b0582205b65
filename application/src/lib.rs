//! Application layer for vox-widget
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer; the file-backed
//! adapters implementing the ports live in the infrastructure crate.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ListLimits;
pub use ports::{
    config_store::{ConfigStore, ConfigStoreError},
    submission_store::{SubmissionPage, SubmissionStore, SubmissionStoreError},
};
pub use use_cases::{
    amend_submission::AmendSubmissionUseCase,
    annotate_submission::{AnnotateSubmissionInput, AnnotateSubmissionUseCase},
    fetch_config::FetchConfigUseCase,
    list_submissions::{ExportLogUseCase, ListSubmissionsUseCase},
    record_submission::{RecordSubmissionInput, RecordSubmissionUseCase},
    save_config::SaveConfigUseCase,
};
