use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a palette registry or variant.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A palette color is not `#` followed by six hex digits
    #[error("palette '{palette}': {field} color '{value}' is not a #rrggbb hex color")]
    InvalidColorFormat {
        palette: String,
        field: &'static str,
        value: String,
    },

    /// A palette name or file prefix cannot be used as part of a file name
    #[error("{what} '{value}' cannot be used in a file name: {reason}")]
    InvalidName {
        what: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Registry has no palettes
    #[error("palette registry is empty")]
    EmptyRegistry,

    /// Malformed variant definition
    #[error("failed to parse variant definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// Variant file could not be read
    #[error("failed to read variant file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;
