//! Theme labels and output file names.

use std::collections::HashMap;

use themed_palette::Registry;

use crate::error::{Result, ThemeError};

/// Extension of every generated theme file.
pub const THEME_EXTENSION: &str = "json";

/// Display label of a theme, e.g. `TT Max Marine`.
pub fn label(prefix: &str, palette_name: &str) -> String {
    format!("{}{}", prefix, palette_name)
}

/// Output file name for a palette: lower-cased name, optional variant token.
pub fn file_name(palette_name: &str, prefix: Option<&str>) -> String {
    let stem = palette_name.to_lowercase();
    match prefix {
        Some(prefix) => format!("{}-{}.{}", prefix, stem, THEME_EXTENSION),
        None => format!("{}.{}", stem, THEME_EXTENSION),
    }
}

/// File names for every palette in registry order.
///
/// Fails if two palettes collide after lower-casing.
pub fn file_names(registry: &Registry, prefix: Option<&str>) -> Result<Vec<String>> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(registry.len());
    let mut names = Vec::with_capacity(registry.len());

    for palette in registry {
        let name = file_name(&palette.name, prefix);
        if let Some(first) = seen.insert(name.clone(), &palette.name) {
            return Err(ThemeError::DuplicateThemeFilename {
                file: name,
                first: first.to_string(),
                second: palette.name.clone(),
            });
        }
        names.push(name);
    }

    Ok(names)
}
