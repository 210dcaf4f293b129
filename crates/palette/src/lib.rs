//! Palette registry for themed-themes.
//!
//! Holds the hand-authored palettes and the product variants that bundle a
//! registry with its package metadata. Built-in variants are embedded TOML
//! documents; custom ones can be loaded from disk with the same schema.

mod colors;
mod error;
mod loader;

pub use colors::{Color, Ramp, Role, BLACK, WHITE};
pub use error::{PaletteError, Result};
pub use loader::{load_registry_from_str, load_variant, load_variant_from_str};

use serde::Deserialize;

// Embed variant files at compile time
const VARIANT_MAX_TOML: &str = include_str!("../variants/max.toml");
const VARIANT_LITE_TOML: &str = include_str!("../variants/lite.toml");

/// A named set of six semantic colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Display name, unique within a registry
    pub name: String,
    /// Strong accent: numbers, storage
    pub rich: Color,
    /// Muted accent: identifiers
    pub dull: Color,
    /// Comments, types
    pub dark: Color,
    /// Strings
    pub light: Color,
    /// Keywords, functions, CSS selectors
    pub mid: Color,
    /// Title bar and status bar background
    pub deep_accent: Color,
}

impl Palette {
    /// Color supplied for a role.
    pub fn color(&self, role: Role) -> &Color {
        match role {
            Role::Rich => &self.rich,
            Role::Dull => &self.dull,
            Role::Dark => &self.dark,
            Role::Light => &self.light,
            Role::Mid => &self.mid,
            Role::DeepAccent => &self.deep_accent,
        }
    }
}

/// Ordered, validated, read-only list of palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    palettes: Vec<Palette>,
}

impl Registry {
    /// Build a registry from already-validated palettes.
    pub fn new(palettes: Vec<Palette>) -> Result<Self> {
        if palettes.is_empty() {
            return Err(PaletteError::EmptyRegistry);
        }
        Ok(Self { palettes })
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Package identity written into the extension manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub publisher: String,
    pub description: String,
    pub version: String,
    pub license: String,
    #[serde(default)]
    pub repository: Option<String>,
    /// Editor compatibility constraint, e.g. `^1.11.0`
    pub vscode_engine: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A product configuration: registry plus naming and packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    /// Prepended to each palette name to form the theme label
    pub label_prefix: String,
    /// Token distinguishing this product's theme file names
    pub file_prefix: Option<String>,
    /// Static files copied next to the generated themes
    pub assets: Vec<String>,
    pub package: PackageMetadata,
    pub registry: Registry,
}

/// Built-in product variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Five palettes with full marketplace metadata
    Max,
    /// Three palettes with minimal metadata
    Lite,
}

impl VariantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Max => "max",
            VariantKind::Lite => "lite",
        }
    }

    pub fn all() -> &'static [VariantKind] {
        &[VariantKind::Max, VariantKind::Lite]
    }

    fn source(self) -> &'static str {
        match self {
            VariantKind::Max => VARIANT_MAX_TOML,
            VariantKind::Lite => VARIANT_LITE_TOML,
        }
    }
}

impl std::str::FromStr for VariantKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" => Ok(VariantKind::Max),
            "lite" => Ok(VariantKind::Lite),
            _ => Err(format!("Unknown variant: {}", s)),
        }
    }
}

impl Variant {
    /// Parse and validate one of the embedded variants.
    pub fn builtin(kind: VariantKind) -> Result<Self> {
        load_variant_from_str(kind.source(), kind.as_str())
    }
}
