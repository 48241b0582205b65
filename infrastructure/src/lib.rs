//! Infrastructure layer for vox-widget
//!
//! This crate contains the adapters implementing the ports defined in the
//! application layer: the tiered JSON config store, the CSV submission log
//! with its annotation side-table, and the service settings loader.

pub mod fs;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use fs::write_atomic;
pub use settings::{
    AdminSettings, ServerSettings, ServiceSettings, SettingsLoader, StorageSettings,
};
pub use store::{CsvSubmissionStore, TieredConfigStore};
