use std::io;
use thiserror::Error;

/// Result type for wadkit operations
pub type Result<T> = std::result::Result<T, WadError>;

/// Unified error type for all wadkit operations
#[derive(Debug, Error)]
pub enum WadError {
    // Archive format errors
    #[error("Invalid magic in WAD header: {0:?}")]
    InvalidMagic([u8; 4]),

    #[error("Invalid WAD format: {0}")]
    InvalidFormat(String),

    #[error("Directory of {count} entries at offset {offset} exceeds file length {file_len}")]
    DirectoryOutOfBounds {
        offset: u64,
        count: u64,
        file_len: u64,
    },

    #[error("Lump {index} ({name:?}): {size} bytes at {position} exceed file length {file_len}")]
    LumpOutOfBounds {
        index: usize,
        name: String,
        position: i64,
        size: i64,
        file_len: u64,
    },

    #[error("Lump name cannot be encoded as a single-byte name: {0:?}")]
    UnencodableName(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Dependency pruning errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl WadError {
    /// Whether the error describes a malformed or unrepresentable archive
    /// rather than a failed read or write.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            WadError::InvalidMagic(_)
                | WadError::InvalidFormat(_)
                | WadError::DirectoryOutOfBounds { .. }
                | WadError::LumpOutOfBounds { .. }
                | WadError::UnencodableName(_)
        )
    }
}

impl From<toml::de::Error> for WadError {
    fn from(err: toml::de::Error) -> Self {
        WadError::Config(err.to_string())
    }
}
