//! Error type for the encoding pipeline.

use std::path::PathBuf;

/// Everything that can stop a run. All variants are terminal: there is no
/// retry or partial output.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Voice pack {pack} does not exist ({})", path.display())]
    SourceNotFound { pack: String, path: PathBuf },

    #[error("Missing {name} audio file! ({})", path.display())]
    MissingAsset { name: String, path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid encoder config: {0}")]
    InvalidConfig(String),

    #[error("Failed to format header")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
