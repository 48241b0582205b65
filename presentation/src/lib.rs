//! Presentation layer for vox-widget
//!
//! The HTTP surface: an axum router over the application use cases, plus
//! the wire types and the admin write guard. Storage concerns stay behind
//! the application ports; this crate never touches the filesystem.

pub mod http;

// Re-export commonly used types
pub use http::{AppState, router};
