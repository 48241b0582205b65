//! Compiled-in fallback documents.
//!
//! These are the last tier of the configuration chain: a `GET` for a known
//! kind always succeeds, even on a fresh deployment with no files on disk.
//! The `api.key` / `api.secret` fields ship empty and are expected to be
//! filled in through the admin surface.

use super::{ConfigKind, normalize_document};
use serde_json::{Map, Value, json};

/// The fallback document for `kind`.
pub fn default_document(kind: ConfigKind) -> Map<String, Value> {
    let value = match kind {
        ConfigKind::Widget => json!({
            "editable": {
                "headline": true,
                "recordButton": true,
                "previousButton": true,
                "nextButton": true,
                "poweredByLabel": true,
                "uploadButton": true,
                "stopButton": true,
                "NotRecordingLabel": true,
                "SubmitForScoringButton": true
            },
            "theme": "apple",
            "api": {
                "enabled": true,
                "baseUrl": "https://app.myspeakingscore.com",
                "key": "",
                "secret": ""
            },
            "logger": {
                "enabled": true,
                "url": "/log/submission"
            },
            "audioMinSeconds": 20,
            "audioMaxSeconds": 90
        }),
        ConfigKind::Forms => json!({
            "headline": "Practice TOEFL Speaking Test",
            "poweredByLabel": "Powered by MSS Vox",
            "recordButton": "Record your response",
            "stopButton": "Stop",
            "uploadButton": "Choose an audio file",
            "SubmitForScoringButton": "Submit for scoring",
            "previousButton": "Previous",
            "nextButton": "Next",
            "NotRecordingLabel": "Not recording",
            "survey": ["Tell me about your hometown."]
        }),
        ConfigKind::Images => json!({
            "logoDataUrl": ""
        }),
    };
    normalize_document(value)
}
