//! Configuration kinds and document handling.
//!
//! A configuration document is always a JSON object. The resolver in the
//! infrastructure layer walks its tiers and falls back to the compiled-in
//! document from [`default_document`] when no tier has a parseable file.

mod defaults;
mod kind;

pub use defaults::default_document;
pub use kind::{ConfigKind, UnknownKindError};

use serde_json::{Map, Value};

/// Normalize an arbitrary JSON value into a configuration document.
///
/// Null, arrays, and primitives become the empty object rather than being
/// rejected, so a bad admin payload can never make a kind unreadable.
pub fn normalize_document(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
