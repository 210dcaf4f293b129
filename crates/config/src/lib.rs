//! Configuration management for themed-themes.
//!
//! The generator reads an optional TOML file selecting the product variant,
//! the output and asset directories and the logging setup. Missing sections
//! and keys fall back to defaults.

mod settings;

pub use settings::{Config, GeneralSettings, LoggingSettings, OutputSettings};

use anyhow::{Context, Result};
use std::path::Path;

/// Default values as constants
pub mod defaults {
    pub const CONFIG_FILE: &str = "themed-themes.toml";
    pub const VARIANT: &str = "max";
    pub const OUTPUT_DIR: &str = "dist";
    pub const ASSETS_DIR: &str = "assets";
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load the implicit configuration file.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Load a configuration file the user named explicitly; it must exist.
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::validate_content(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.variant, "max");
        assert_eq!(config.general.variant_file, None);
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.logging.min_level, "info");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(defaults::CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::validate_content(
            r#"
[general]
variant = "lite"

[logging]
min_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.general.variant, "lite");
        assert_eq!(config.logging.min_level, "debug");
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        assert!(Config::validate_content("[output]\ndir = 5\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo-config.toml");
        let err = Config::load_required(&path).unwrap_err();
        assert!(err.to_string().contains("typo-config.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(defaults::CONFIG_FILE);
        std::fs::write(
            &path,
            "[general]\nvariant_file = \"variants/custom.toml\"\n\n[output]\ndir = \"out\"\n",
        )
        .unwrap();

        for config in [Config::load(&path).unwrap(), Config::load_required(&path).unwrap()] {
            assert_eq!(
                config.general.variant_file,
                Some(PathBuf::from("variants/custom.toml"))
            );
            assert_eq!(config.output.dir, PathBuf::from("out"));
            assert_eq!(config.logging, LoggingSettings::default());
        }
    }
}
