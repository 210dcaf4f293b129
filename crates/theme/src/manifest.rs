//! Extension manifest assembly.

use serde::Serialize;

use themed_palette::{PackageMetadata, Registry};

use crate::error::Result;
use crate::naming;

/// UI theme every entry is contributed as.
pub const UI_THEME: &str = "vs-dark";

/// Marketplace category of the extension.
pub const CATEGORY: &str = "Themes";

/// One contributed theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub label: String,
    pub ui_theme: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engines {
    pub vscode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributes {
    pub themes: Vec<ManifestEntry>,
}

/// The extension's `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub publisher: String,
    pub description: String,
    pub version: String,
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub engines: Engines,
    pub categories: Vec<String>,
    pub contributes: Contributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Manifest {
    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the manifest for a registry, one entry per palette in order.
pub fn assemble(
    registry: &Registry,
    metadata: &PackageMetadata,
    label_prefix: &str,
    file_prefix: Option<&str>,
) -> Result<Manifest> {
    let paths = naming::file_names(registry, file_prefix)?;

    let themes = registry
        .iter()
        .zip(paths)
        .map(|(palette, path)| ManifestEntry {
            label: naming::label(label_prefix, &palette.name),
            ui_theme: UI_THEME,
            path,
        })
        .collect();

    Ok(Manifest {
        name: metadata.name.clone(),
        display_name: metadata.display_name.clone(),
        author: metadata.author.clone(),
        publisher: metadata.publisher.clone(),
        description: metadata.description.clone(),
        version: metadata.version.clone(),
        license: metadata.license.clone(),
        repository: metadata.repository.clone(),
        engines: Engines {
            vscode: metadata.vscode_engine.clone(),
        },
        categories: vec![CATEGORY.to_string()],
        contributes: Contributes { themes },
        icon: metadata.icon.clone(),
    })
}
