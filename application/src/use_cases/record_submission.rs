//! Record submission use case

use crate::ports::submission_store::{SubmissionStore, SubmissionStoreError};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use vox_domain::normalize_document;

/// Input for recording one submission event.
#[derive(Debug, Clone)]
pub struct RecordSubmissionInput {
    /// Raw request payload; anything that is not a JSON object is treated
    /// as an empty submission.
    pub payload: Value,
    /// Client address observed at the transport, used when the payload
    /// carries no `ip` of its own.
    pub client_ip: Option<String>,
}

/// Use case for appending one record to the submission log.
///
/// Fills in `timestamp` (now, UTC) and `ip` (transport address) when the
/// payload omits them, then hands the field map to the store, which drops
/// unknown fields and defaults the rest to empty.
pub struct RecordSubmissionUseCase {
    store: Arc<dyn SubmissionStore>,
}

impl RecordSubmissionUseCase {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: RecordSubmissionInput) -> Result<(), SubmissionStoreError> {
        let mut fields = normalize_document(input.payload);

        if field_is_empty(fields.get("timestamp")) {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            fields.insert("timestamp".to_string(), Value::String(now));
        }
        if field_is_empty(fields.get("ip"))
            && let Some(ip) = input.client_ip.filter(|ip| !ip.is_empty())
        {
            fields.insert("ip".to_string(), Value::String(ip));
        }

        self.store.append(&fields).await?;
        info!(
            file_name = fields.get("fileName").and_then(|v| v.as_str()).unwrap_or(""),
            "submission recorded"
        );
        Ok(())
    }
}

fn field_is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
