use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the catalog, exclusion and task file layers.
///
/// Content problems inside a catalog are never errors: the parser degrades to
/// partially filled entries instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{what} not found: {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Invalid translation payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to create backup {}: {source}", path.display())]
    BackupFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Map an I/O error on `path` to `NotFound` when the file is missing.
    pub fn from_io(what: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound { what, path }
        } else {
            CatalogError::Io { path, source }
        }
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
