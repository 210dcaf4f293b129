//! Persisting generated artifacts to the output directory.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use themed_config::OutputSettings;
use themed_theme::Generated;

/// File name of the extension manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// What a write pass produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub themes_written: usize,
    pub assets_copied: usize,
    /// JSON files in the output directory that this run did not produce
    pub stale_files: Vec<String>,
}

/// Write every theme, the manifest and the assets.
///
/// All JSON is serialized and every asset located before the output
/// directory is touched, so a missing asset leaves no partial output.
pub fn write_all(
    generated: &Generated,
    assets: &[String],
    settings: &OutputSettings,
) -> Result<WriteReport> {
    let themes = generated
        .themes
        .iter()
        .map(|theme| {
            serde_json::to_string_pretty(&theme.rendered)
                .map(|json| (theme.file_name.as_str(), json))
                .with_context(|| format!("Failed to serialize theme {}", theme.document.name))
        })
        .collect::<Result<Vec<_>>>()?;
    let manifest = generated
        .manifest
        .to_json()
        .context("Failed to serialize manifest")?;

    let sources: Vec<PathBuf> = assets
        .iter()
        .map(|asset| settings.assets_dir.join(asset))
        .collect();
    let missing: Vec<String> = sources
        .iter()
        .filter(|source| !source.is_file())
        .map(|source| source.display().to_string())
        .collect();
    if !missing.is_empty() {
        bail!("Missing assets: {}", missing.join(", "));
    }

    fs::create_dir_all(&settings.dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.dir.display()
        )
    })?;

    let mut report = WriteReport::default();

    let mut written: HashSet<&str> = HashSet::new();

    for (file_name, json) in themes {
        write_file(&settings.dir.join(file_name), &json)?;
        themed_logger::debug(format!("Wrote {}", file_name));
        written.insert(file_name);
        report.themes_written += 1;
    }
    write_file(&settings.dir.join(MANIFEST_FILE), &manifest)?;
    written.insert(MANIFEST_FILE);

    for (asset, source) in assets.iter().zip(&sources) {
        fs::copy(source, settings.dir.join(asset))
            .with_context(|| format!("Failed to copy asset {}", source.display()))?;
        written.insert(asset.as_str());
        report.assets_copied += 1;
    }

    report.stale_files = stale_json_files(&settings.dir, &written)?;
    for stale in &report.stale_files {
        themed_logger::warn(format!(
            "{} is not part of this build; remove it before packaging",
            settings.dir.join(stale).display()
        ));
    }

    Ok(report)
}

/// JSON files left in `dir` by earlier runs, sorted by name.
fn stale_json_files(dir: &Path, written: &HashSet<&str>) -> Result<Vec<String>> {
    let mut stale = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if !written.contains(name) {
                stale.push(name.to_string());
            }
        }
    }
    stale.sort();
    Ok(stale)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
