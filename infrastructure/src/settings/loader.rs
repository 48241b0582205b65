//! Settings loader with multi-source merging

use super::file_settings::ServiceSettings;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Settings loader that handles file discovery and merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit settings path (if provided)
    /// 2. Working directory: `./vox-widget.toml` or `./.vox-widget.toml`
    /// 3. Environment: `VOX_`-prefixed variables (`VOX_SERVER__PORT`, ...)
    /// 4. Default values
    pub fn load(settings_path: Option<&PathBuf>) -> Result<ServiceSettings, Box<figment::Error>> {
        let mut figment =
            Figment::new().merge(Serialized::defaults(ServiceSettings::default()));

        figment = figment.merge(Env::prefixed("VOX_").split("__"));

        // Working-directory settings files (check both names)
        for filename in &["vox-widget.toml", ".vox-widget.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit settings path (highest priority)
        if let Some(path) = settings_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default settings (for --no-config)
    pub fn load_defaults() -> ServiceSettings {
        ServiceSettings::default()
    }
}
