//! Raw service settings data types
//!
//! These structs represent the exact structure of the TOML settings file
//! and the `VOX_`-prefixed environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Full service settings, merged from all sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub admin: AdminSettings,
}

impl ServiceSettings {
    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

/// Storage tier directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Runtime-writable tier: saved configs, the submission log, and the
    /// annotation store all live here.
    pub data_dir: PathBuf,
    /// Read-only repository-default tier for config documents.
    pub src_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            src_dir: PathBuf::from("src"),
        }
    }
}

/// Admin surface settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// When set, `PUT /config/*` requires a matching `X-ADMIN-KEY` header.
    /// When unset the admin surface is open.
    pub write_key: Option<String>,
}
