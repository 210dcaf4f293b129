//! Configuration structures for generator settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::defaults;

/// Generator configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Which product to build
    #[serde(default)]
    pub general: GeneralSettings,

    /// Where artifacts go
    #[serde(default)]
    pub output: OutputSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Product selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Built-in variant name (max, lite)
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Custom variant definition; takes precedence over `variant`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_file: Option<PathBuf>,
}

/// Output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory receiving theme files and the manifest
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Directory holding icons and readme copied into the output
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Minimum log level (debug, info, warn)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_variant() -> String {
    defaults::VARIANT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(defaults::ASSETS_DIR)
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            variant_file: None,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
