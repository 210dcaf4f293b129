use thiserror::Error;

/// Errors raised while expanding a registry into theme files.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Two palettes map to the same output file
    #[error("palettes '{first}' and '{second}' both produce theme file '{file}'")]
    DuplicateThemeFilename {
        file: String,
        first: String,
        second: String,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
