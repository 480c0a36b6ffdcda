//! Error types for mod.ini generation.

use camino::Utf8PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The ini tree rejected a section or clause.
    #[error("INI error: {0}")]
    Ini(#[from] migoto_ini::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The export description has an extension other than `.json` or `.toml`.
    #[error("Unsupported export description format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    /// The export description is internally inconsistent.
    #[error("Invalid export metadata: {0}")]
    InvalidMetadata(String),
}
