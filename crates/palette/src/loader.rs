//! Variant loading from TOML definitions.

use serde::Deserialize;
use std::path::Path;

use crate::error::{PaletteError, Result};
use crate::{Color, PackageMetadata, Palette, Registry, Role, Variant};

/// Palette as written in TOML, before color validation.
#[derive(Debug, Clone, Deserialize)]
struct TomlPalette {
    name: String,
    rich: String,
    dull: String,
    dark: String,
    light: String,
    mid: String,
    deep_accent: String,
}

impl TomlPalette {
    fn raw(&self, role: Role) -> &str {
        match role {
            Role::Rich => &self.rich,
            Role::Dull => &self.dull,
            Role::Dark => &self.dark,
            Role::Light => &self.light,
            Role::Mid => &self.mid,
            Role::DeepAccent => &self.deep_accent,
        }
    }

    fn color(&self, role: Role) -> Result<Color> {
        let value = self.raw(role);
        Color::parse(value).ok_or_else(|| PaletteError::InvalidColorFormat {
            palette: self.name.clone(),
            field: role.field_name(),
            value: value.to_string(),
        })
    }

    fn into_palette(self) -> Result<Palette> {
        check_file_name_part("palette name", &self.name)?;
        // Fields are checked in declaration order; the first bad one is reported
        Ok(Palette {
            rich: self.color(Role::Rich)?,
            dull: self.color(Role::Dull)?,
            dark: self.color(Role::Dark)?,
            light: self.color(Role::Light)?,
            mid: self.color(Role::Mid)?,
            deep_accent: self.color(Role::DeepAccent)?,
            name: self.name,
        })
    }
}

/// Naming and packaging settings of a variant.
#[derive(Debug, Clone, Deserialize)]
struct TomlVariantSettings {
    label_prefix: String,
    #[serde(default)]
    file_prefix: Option<String>,
    #[serde(default)]
    assets: Vec<String>,
}

/// Registry-only document: just `[[palettes]]`.
#[derive(Debug, Clone, Deserialize)]
struct TomlRegistry {
    #[serde(default)]
    palettes: Vec<TomlPalette>,
}

/// Full variant document.
#[derive(Debug, Clone, Deserialize)]
struct TomlVariant {
    variant: TomlVariantSettings,
    package: PackageMetadata,
    #[serde(default)]
    palettes: Vec<TomlPalette>,
}

/// Names end up in theme file names, so they must stay a single plain path
/// component once lowercased.
fn check_file_name_part(what: &'static str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        Some("it is empty")
    } else if value.starts_with('.') {
        Some("it starts with '.'")
    } else if value.contains(['/', '\\', ':']) {
        Some("it contains a path separator")
    } else if value.chars().any(char::is_control) {
        Some("it contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PaletteError::InvalidName {
            what,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn build_registry(palettes: Vec<TomlPalette>) -> Result<Registry> {
    let palettes = palettes
        .into_iter()
        .map(TomlPalette::into_palette)
        .collect::<Result<Vec<_>>>()?;
    Registry::new(palettes)
}

/// Parse a registry from a TOML string containing `[[palettes]]` tables.
pub fn load_registry_from_str(content: &str) -> Result<Registry> {
    let toml_registry: TomlRegistry = toml::from_str(content)?;
    build_registry(toml_registry.palettes)
}

/// Parse a complete variant from a TOML string.
pub fn load_variant_from_str(content: &str, name: &str) -> Result<Variant> {
    let toml_variant: TomlVariant = toml::from_str(content)?;
    if let Some(prefix) = &toml_variant.variant.file_prefix {
        check_file_name_part("file prefix", prefix)?;
    }

    Ok(Variant {
        name: name.to_string(),
        label_prefix: toml_variant.variant.label_prefix,
        file_prefix: toml_variant.variant.file_prefix,
        assets: toml_variant.variant.assets,
        package: toml_variant.package,
        registry: build_registry(toml_variant.palettes)?,
    })
}

/// Load a variant from a TOML file. The file stem becomes the variant name.
pub fn load_variant(path: &Path) -> Result<Variant> {
    let content = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "custom".to_string());

    load_variant_from_str(&content, &name)
}
