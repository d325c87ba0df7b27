use std::path::Path;

use tracing::error;

use crate::core::error::Result;
use crate::features::bucket::services::StorageClient;

/// Sentinel-valued view over [`StorageClient`]
///
/// Storage service failures are logged and collapsed into `false`, an empty
/// list or an empty string. Local filesystem failures are still returned as
/// errors.
#[derive(Clone)]
pub struct LegacyStorageClient {
    inner: StorageClient,
}

impl LegacyStorageClient {
    pub fn new(inner: StorageClient) -> Self {
        Self { inner }
    }

    pub fn from_env(bucket: Option<&str>) -> Result<Self> {
        Ok(Self::new(StorageClient::from_env(bucket)?))
    }

    pub fn inner(&self) -> &StorageClient {
        &self.inner
    }

    pub fn bucket_name(&self) -> &str {
        self.inner.bucket_name()
    }

    /// `Ok(false)` on service errors, `Err` when the local file is missing
    pub async fn upload(
        &self,
        local_path: impl AsRef<Path>,
        remote_key: Option<&str>,
    ) -> Result<bool> {
        let result = self.inner.upload(local_path, remote_key).await;
        Ok(swallow_remote(result, "uploading file")?.is_some())
    }

    /// `Ok(false)` on service errors, `Err` when the local file cannot be written
    pub async fn download(
        &self,
        remote_key: &str,
        local_path: impl AsRef<Path>,
    ) -> Result<bool> {
        let result = self.inner.download(remote_key, local_path).await;
        Ok(swallow_remote(result, "downloading file")?.is_some())
    }

    pub async fn list(&self, prefix: &str) -> Vec<String> {
        swallow(self.inner.list(prefix).await, "listing files").unwrap_or_default()
    }

    pub async fn delete(&self, remote_key: &str) -> bool {
        swallow(self.inner.delete(remote_key).await, "deleting file").is_some()
    }

    pub async fn create_folder(&self, folder_path: &str) -> bool {
        swallow(self.inner.create_folder(folder_path).await, "creating folder").is_some()
    }

    /// Empty string when the URL cannot be generated
    pub async fn presigned_url(&self, remote_key: &str, expiration_secs: u32) -> String {
        swallow(
            self.inner.presigned_url(remote_key, expiration_secs).await,
            "generating URL",
        )
        .unwrap_or_default()
    }
}

impl From<StorageClient> for LegacyStorageClient {
    fn from(inner: StorageClient) -> Self {
        Self::new(inner)
    }
}

fn swallow<T>(result: Result<T>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(kind = ?e.kind(), "Error {}: {}", action, e);
            None
        }
    }
}

fn swallow_remote<T>(result: Result<T>, action: &str) -> Result<Option<T>> {
    match result {
        Err(e) if e.is_local() => Err(e),
        other => Ok(swallow(other, action)),
    }
}
