//! Config store port
//!
//! Defines how the application layer reads and writes widget configuration
//! documents. The tiered fallback chain lives behind this interface:
//! `resolve` always produces *some* document for a known kind, so the read
//! path cannot fail.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use vox_domain::ConfigKind;

/// Errors that can occur when persisting a configuration document.
///
/// Reads never error: a missing or unparseable file falls through to the
/// next tier and ultimately to the compiled-in default.
#[derive(Error, Debug)]
pub enum ConfigStoreError {
    #[error("config write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config document could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Store for widget configuration documents.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Resolve the best-available document for `kind`.
    async fn resolve(&self, kind: ConfigKind) -> Map<String, Value>;

    /// Replace the stored document for `kind` in the writable tier.
    ///
    /// Whole-document semantics: callers wanting a field-level change must
    /// read-modify-write. Lower tiers are never touched.
    async fn save(
        &self,
        kind: ConfigKind,
        document: Map<String, Value>,
    ) -> Result<(), ConfigStoreError>;
}
