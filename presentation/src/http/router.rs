//! Route table and shared handler state.

use super::handlers::{config, health, submissions};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use vox_application::{
    AmendSubmissionUseCase, AnnotateSubmissionUseCase, ConfigStore, ExportLogUseCase,
    FetchConfigUseCase, ListLimits, ListSubmissionsUseCase, RecordSubmissionUseCase,
    SaveConfigUseCase, SubmissionStore,
};

/// Use cases and settings shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub fetch_config: Arc<FetchConfigUseCase>,
    pub save_config: Arc<SaveConfigUseCase>,
    pub record_submission: Arc<RecordSubmissionUseCase>,
    pub list_submissions: Arc<ListSubmissionsUseCase>,
    pub export_log: Arc<ExportLogUseCase>,
    pub amend_submission: Arc<AmendSubmissionUseCase>,
    pub annotate_submission: Arc<AnnotateSubmissionUseCase>,
    /// Configured admin write key; `None` leaves the admin surface open.
    pub admin_write_key: Option<String>,
}

impl AppState {
    pub fn new(
        config_store: Arc<dyn ConfigStore>,
        submission_store: Arc<dyn SubmissionStore>,
        limits: ListLimits,
        admin_write_key: Option<String>,
    ) -> Self {
        Self {
            fetch_config: Arc::new(FetchConfigUseCase::new(config_store.clone())),
            save_config: Arc::new(SaveConfigUseCase::new(config_store)),
            record_submission: Arc::new(RecordSubmissionUseCase::new(submission_store.clone())),
            list_submissions: Arc::new(ListSubmissionsUseCase::new(
                submission_store.clone(),
                limits,
            )),
            export_log: Arc::new(ExportLogUseCase::new(submission_store.clone())),
            amend_submission: Arc::new(AmendSubmissionUseCase::new(submission_store.clone())),
            annotate_submission: Arc::new(AnnotateSubmissionUseCase::new(submission_store)),
            admin_write_key,
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/config/:kind",
            get(config::get_config).put(config::put_config),
        )
        .route("/log/submission", post(submissions::post_submission))
        .route("/log/submissions", get(submissions::list_submissions))
        .route("/log/submissions/:id", put(submissions::update_submission))
        .route("/log/annotation", post(submissions::post_annotation))
        .route("/log/export", get(submissions::export_log))
        .with_state(state)
}
