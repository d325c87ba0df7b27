//! Convenience client for a single S3 (or S3-compatible) bucket.
//!
//! ```no_run
//! # async fn run() -> databucket::Result<()> {
//! let client = databucket::StorageClient::from_env(None)?;
//! let uploaded = client.upload("report.pdf", None).await?;
//! let keys = client.list("report").await?;
//! assert_eq!(keys, vec![uploaded.key.clone()]);
//! let url = client.presigned_url(&uploaded.key, 600).await?;
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::config::StorageConfig;
pub use crate::core::error::{ErrorKind, Result, StorageError};
pub use crate::features::bucket::{
    DownloadedObject, LegacyStorageClient, StorageClient, UploadedObject,
};
pub use crate::modules::storage::{ListPage, MemoryBackend, ObjectBackend, S3Backend, StoredObject};
pub use crate::shared::constants::DEFAULT_PRESIGNED_URL_EXPIRY_SECS;
