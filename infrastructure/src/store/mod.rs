//! File-backed store adapters.
//!
//! Each store owns its files exclusively and serializes operations on each
//! file through its own async mutex, so config writes and log writes never
//! block each other.

mod annotations;
mod csv_log;
mod tiered_config;

pub use csv_log::CsvSubmissionStore;
pub use tiered_config::TieredConfigStore;
