//! Theme generation for themed-themes.
//!
//! Expands each palette of a variant into a theme document, renders it to the
//! editor's theme format and assembles the extension manifest. Everything in
//! this crate is pure; writing the results is left to the caller.

mod error;
pub mod expand;
pub mod manifest;
pub mod naming;
pub mod render;

pub use error::{Result, ThemeError};
pub use expand::{expand, ThemeDocument};
pub use manifest::{assemble, Manifest, ManifestEntry};
pub use naming::{file_name, file_names, label};
pub use render::{render, EditorTheme};

use themed_palette::Variant;

/// One generated theme, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTheme {
    /// File name relative to the output directory
    pub file_name: String,
    pub document: ThemeDocument,
    pub rendered: EditorTheme,
}

/// All artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub themes: Vec<GeneratedTheme>,
    pub manifest: Manifest,
}

/// Expand every palette of a variant and assemble its manifest.
///
/// File names are checked before anything is expanded, so a collision yields
/// no artifacts at all.
pub fn generate(variant: &Variant) -> Result<Generated> {
    let file_prefix = variant.file_prefix.as_deref();
    let paths = file_names(&variant.registry, file_prefix)?;

    let themes = variant
        .registry
        .iter()
        .zip(paths)
        .map(|(palette, file_name)| {
            let document = expand(palette, &variant.label_prefix);
            let rendered = render(&document);
            GeneratedTheme {
                file_name,
                document,
                rendered,
            }
        })
        .collect();

    let manifest = assemble(
        &variant.registry,
        &variant.package,
        &variant.label_prefix,
        file_prefix,
    )?;

    Ok(Generated { themes, manifest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use themed_palette::{load_variant_from_str, VariantKind};

    #[test]
    fn test_generate_max() {
        let variant = Variant::builtin(VariantKind::Max).unwrap();
        let generated = generate(&variant).unwrap();
        assert_eq!(generated.themes.len(), 5);

        for (theme, entry) in generated
            .themes
            .iter()
            .zip(&generated.manifest.contributes.themes)
        {
            assert_eq!(theme.file_name, entry.path);
            assert_eq!(theme.document.name, entry.label);
            assert_eq!(theme.rendered.name, entry.label);
        }
    }

    #[test]
    fn test_generate_lite_prefixes_files() {
        let variant = Variant::builtin(VariantKind::Lite).unwrap();
        let generated = generate(&variant).unwrap();
        let files: Vec<_> = generated.themes.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(
            files,
            ["lite-marine.json", "lite-meadow.json", "lite-molten.json"]
        );
    }

    #[test]
    fn test_generate_is_all_or_nothing() {
        let content = r##"
[variant]
label_prefix = "X "

[package]
name = "x"
display_name = "X"
publisher = "x"
description = "x"
version = "0.0.1"
license = "MIT"
vscode_engine = "^1.0.0"

[[palettes]]
name = "Dusk"
rich = "#111111"
dull = "#222222"
dark = "#333333"
light = "#444444"
mid = "#555555"
deep_accent = "#666666"

[[palettes]]
name = "DUSK"
rich = "#111111"
dull = "#222222"
dark = "#333333"
light = "#444444"
mid = "#555555"
deep_accent = "#666666"
"##;
        let variant = load_variant_from_str(content, "x").unwrap();
        let err = generate(&variant).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateThemeFilename { .. }));
        assert!(err.to_string().contains("dusk.json"));
    }
}
