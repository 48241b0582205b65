//! Service settings.
//!
//! These configure the *process* (bind address, storage directories, admin
//! key) and are distinct from the widget configuration documents the
//! service serves to its clients.

mod file_settings;
mod loader;

pub use file_settings::{AdminSettings, ServerSettings, ServiceSettings, StorageSettings};
pub use loader::SettingsLoader;
