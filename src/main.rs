mod output;

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use themed_config::{defaults, Config};
use themed_logger::LogLevel;
use themed_palette::{load_variant, Variant, VariantKind};
use themed_theme::generate;

/// Load the config named on the command line, or the optional default file.
fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_required(&path),
        None => Config::load(Path::new(defaults::CONFIG_FILE)),
    }
}

/// Pick the variant named by the config, preferring a custom file.
fn resolve_variant(config: &Config) -> Result<Variant> {
    if let Some(path) = &config.general.variant_file {
        return load_variant(path)
            .with_context(|| format!("Failed to load variant from {}", path.display()));
    }

    let kind: VariantKind = config.general.variant.parse().map_err(|e: String| anyhow!(e))?;
    Variant::builtin(kind).with_context(|| format!("Built-in variant '{}' is invalid", kind.as_str()))
}

fn main() -> Result<()> {
    // First argument overrides the config file location
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;

    let min_level: LogLevel = config
        .logging
        .min_level
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    themed_logger::init(config.logging.file_path.clone(), min_level);

    let variant = resolve_variant(&config)?;
    themed_logger::info(format!(
        "Generating '{}' ({} palettes) into {}",
        variant.name,
        variant.registry.len(),
        config.output.dir.display()
    ));

    let generated = generate(&variant).context("Theme generation failed")?;
    for theme in &generated.themes {
        themed_logger::debug(format!("Expanded {} -> {}", theme.document.name, theme.file_name));
    }

    let report = output::write_all(&generated, &variant.assets, &config.output)?;
    themed_logger::info(format!(
        "Wrote {} themes, {} and {} assets ({} stale files, {} warnings)",
        report.themes_written,
        output::MANIFEST_FILE,
        report.assets_copied,
        report.stale_files.len(),
        themed_logger::warning_count()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my.toml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("my.toml"));
    }

    #[test]
    fn test_explicit_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my.toml");
        std::fs::write(&path, "[general]\nvariant = \"lite\"\n").unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.general.variant, "lite");
    }

    #[test]
    fn test_resolve_builtin_variant() {
        let mut config = Config::default();
        config.general.variant = "lite".to_string();
        let variant = resolve_variant(&config).unwrap();
        assert_eq!(variant.name, "lite");
        assert_eq!(variant.registry.len(), 3);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let mut config = Config::default();
        config.general.variant = "ultra".to_string();
        let err = resolve_variant(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown variant"));
    }

    #[test]
    fn test_variant_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(
            &path,
            r##"
[variant]
label_prefix = "B "

[package]
name = "b"
display_name = "B"
publisher = "b"
description = "b"
version = "0.0.1"
license = "MIT"
vscode_engine = "^1.0.0"

[[palettes]]
name = "Broken"
rich = "#12345"
dull = "#222222"
dark = "#333333"
light = "#444444"
mid = "#555555"
deep_accent = "#666666"
"##,
        )
        .unwrap();

        let mut config = Config::default();
        config.general.variant_file = Some(path);
        let err = resolve_variant(&config).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to load variant"));
        assert!(chain.contains("'#12345' is not a #rrggbb hex color"));
    }
}
