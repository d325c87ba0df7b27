use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Local file not found: {}", .0.display())]
    LocalFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Presign error: {0}")]
    Presign(String),
}

/// Coarse classification of a [`StorageError`], for callers that branch on
/// the failure without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    LocalFileNotFound,
    Io,
    NotFound,
    AccessDenied,
    Remote,
    Presign,
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Configuration(_) => ErrorKind::Configuration,
            StorageError::LocalFileNotFound(_) => ErrorKind::LocalFileNotFound,
            StorageError::Io(_) => ErrorKind::Io,
            StorageError::NotFound(_) => ErrorKind::NotFound,
            StorageError::AccessDenied(_) => ErrorKind::AccessDenied,
            StorageError::Remote(_) => ErrorKind::Remote,
            StorageError::Presign(_) => ErrorKind::Presign,
        }
    }

    /// Failures that happened on the local side (filesystem), as opposed to
    /// the storage service. These are never collapsed into sentinel values.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            StorageError::LocalFileNotFound(_) | StorageError::Io(_)
        )
    }

    /// Map a non-success HTTP status returned by the storage service.
    pub fn from_status(status: u16, context: impl Into<String>) -> Self {
        let context = context.into();
        match status {
            404 => StorageError::NotFound(context),
            401 | 403 => StorageError::AccessDenied(context),
            _ => StorageError::Remote(format!("{} (HTTP {})", context, status)),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
