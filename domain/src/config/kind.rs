//! Logical configuration categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logical configuration category served by the widget API.
///
/// Each kind maps to one JSON file per storage tier and carries its own
/// compiled-in fallback document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    /// Widget behavior: editable flags, theme, scoring API and logger wiring.
    Widget,
    /// Form text: headline, button labels, survey questions.
    Forms,
    /// Image assets (logo data URL).
    Images,
}

/// Error returned when a route segment names no known kind.
#[derive(Debug, Error)]
#[error("unknown config kind: {0}")]
pub struct UnknownKindError(pub String);

impl ConfigKind {
    /// Every kind, in route order.
    pub const ALL: [ConfigKind; 3] = [ConfigKind::Widget, ConfigKind::Forms, ConfigKind::Images];

    /// Route segment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKind::Widget => "widget",
            ConfigKind::Forms => "forms",
            ConfigKind::Images => "images",
        }
    }

    /// On-disk file name within a storage tier.
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigKind::Widget => "config.json",
            ConfigKind::Forms => "form.json",
            ConfigKind::Images => "image.json",
        }
    }
}

impl FromStr for ConfigKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "widget" => Ok(ConfigKind::Widget),
            "forms" => Ok(ConfigKind::Forms),
            "images" => Ok(ConfigKind::Images),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_route_segment() {
        for kind in ConfigKind::ALL {
            assert_eq!(kind.as_str().parse::<ConfigKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_segment_is_rejected() {
        let err = "theme".parse::<ConfigKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown config kind: theme");
    }

    #[test]
    fn test_file_names_are_distinct() {
        let names: Vec<_> = ConfigKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names, vec!["config.json", "form.json", "image.json"]);
    }
}
