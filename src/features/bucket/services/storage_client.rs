use std::io;
use std::path::Path;
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::core::config::StorageConfig;
use crate::core::error::{Result, StorageError};
use crate::features::bucket::dtos::{DownloadedObject, UploadedObject};
use crate::modules::storage::{ListPage, ObjectBackend, S3Backend};
use crate::shared::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_PRESIGNED_URL_EXPIRY_SECS};
use crate::shared::content_type::content_type_for_path;
use crate::shared::keys::{default_key_for_path, folder_key};

/// Client for one bucket
///
/// Each operation issues a single request to the storage service (except
/// [`list_all`](Self::list_all), which issues one per page) and never retries.
#[derive(Clone)]
pub struct StorageClient {
    backend: Arc<dyn ObjectBackend>,
}

impl StorageClient {
    /// Create a client backed by S3 (or an S3-compatible endpoint)
    ///
    /// Fails with a configuration error when credentials or the bucket name
    /// are missing. The service is not contacted.
    pub fn new(config: StorageConfig) -> Result<Self> {
        let backend = S3Backend::new(&config)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Create a client from `S3_*` environment variables (and `.env`)
    ///
    /// # Arguments
    /// * `bucket` - Bucket to use instead of `S3_BUCKET_NAME`
    pub fn from_env(bucket: Option<&str>) -> Result<Self> {
        Self::new(StorageConfig::from_env(bucket)?)
    }

    pub fn with_backend(backend: Arc<dyn ObjectBackend>) -> Self {
        info!("Storage client ready for bucket: {}", backend.bucket_name());
        Self { backend }
    }

    pub fn bucket_name(&self) -> &str {
        self.backend.bucket_name()
    }

    /// Upload a local file
    ///
    /// The content type is inferred from the file extension.
    ///
    /// # Arguments
    /// * `local_path` - File to upload, must exist
    /// * `remote_key` - Destination key, defaults to the file's base name
    ///
    /// # Returns
    /// The key and content type the object was stored with. A missing local
    /// file fails with `LocalFileNotFound` before the service is contacted.
    pub async fn upload(
        &self,
        local_path: impl AsRef<Path>,
        remote_key: Option<&str>,
    ) -> Result<UploadedObject> {
        let local_path = local_path.as_ref();

        let data = match fs::read(local_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::LocalFileNotFound(local_path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        let key = match remote_key.filter(|key| !key.is_empty()) {
            Some(key) => key.to_string(),
            None => default_key_for_path(local_path).ok_or_else(|| {
                StorageError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Cannot derive a key from '{}'", local_path.display()),
                ))
            })?,
        };

        let content_type = content_type_for_path(local_path);
        self.backend.put_object(&key, &data, &content_type).await?;

        info!(
            "Uploaded '{}' to {}/{} ({} bytes, {})",
            local_path.display(),
            self.bucket_name(),
            key,
            data.len(),
            content_type
        );

        Ok(UploadedObject {
            key,
            content_type,
            size: data.len() as u64,
        })
    }

    /// Download an object to a local file
    ///
    /// Missing parent directories are created first. An existing file at
    /// `local_path` is overwritten.
    pub async fn download(
        &self,
        remote_key: &str,
        local_path: impl AsRef<Path>,
    ) -> Result<DownloadedObject> {
        let local_path = local_path.as_ref();

        if let Some(parent) = local_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let object = self.backend.get_object(remote_key).await?;
        fs::write(local_path, &object.data).await?;

        info!(
            "Downloaded {}/{} to '{}' ({} bytes)",
            self.bucket_name(),
            remote_key,
            local_path.display(),
            object.data.len()
        );

        Ok(DownloadedObject {
            key: remote_key.to_string(),
            path: local_path.to_path_buf(),
            content_type: object.content_type,
            size: object.data.len() as u64,
        })
    }

    /// List keys starting with `prefix` using a single request
    ///
    /// Only the first page is returned (up to 1000 keys on S3). A warning is
    /// logged when more keys exist; use [`list_all`](Self::list_all) to get
    /// every key.
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let page = self.backend.list_page(prefix, None).await?;

        if page.is_truncated {
            warn!(
                "Listing of '{}' in bucket '{}' was truncated after {} keys",
                prefix,
                self.bucket_name(),
                page.keys.len()
            );
        }

        Ok(page.keys)
    }

    /// Fetch one listing page, exposing truncation and the continuation token
    pub async fn list_page(
        &self,
        prefix: &str,
        continuation_token: Option<&str>,
    ) -> Result<ListPage> {
        self.backend.list_page(prefix, continuation_token).await
    }

    /// List every key starting with `prefix`, following continuation tokens
    pub async fn list_all(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.backend.list_page(prefix, token.as_deref()).await?;
            pages += 1;
            keys.extend(page.keys);

            match page.next_continuation_token {
                Some(next) if page.is_truncated && token.as_deref() != Some(next.as_str()) => {
                    token = Some(next);
                }
                _ => break,
            }
        }

        debug!(
            "Listed {} keys under '{}' in {} pages",
            keys.len(),
            prefix,
            pages
        );
        Ok(keys)
    }

    /// Delete an object. Deleting a key that does not exist succeeds.
    pub async fn delete(&self, remote_key: &str) -> Result<()> {
        self.backend.delete_object(remote_key).await?;
        info!("Deleted {}/{}", self.bucket_name(), remote_key);
        Ok(())
    }

    /// Create a folder marker: a zero-byte object whose key ends in `/`
    ///
    /// # Returns
    /// The marker key, e.g. `a/b/` for `a/b`
    pub async fn create_folder(&self, folder_path: &str) -> Result<String> {
        let key = folder_key(folder_path);
        self.backend
            .put_object(&key, &[], DEFAULT_CONTENT_TYPE)
            .await?;

        info!("Created folder {}/{}", self.bucket_name(), key);
        Ok(key)
    }

    /// Generate a signed GET URL valid for `expiration_secs` seconds
    pub async fn presigned_url(&self, remote_key: &str, expiration_secs: u32) -> Result<String> {
        let url = self.backend.presign_get(remote_key, expiration_secs).await?;
        debug!(
            "Presigned URL for {}/{} expires in {}s",
            self.bucket_name(),
            remote_key,
            expiration_secs
        );
        Ok(url)
    }

    /// [`presigned_url`](Self::presigned_url) with the default one hour lifetime
    pub async fn presigned_url_default(&self, remote_key: &str) -> Result<String> {
        self.presigned_url(remote_key, DEFAULT_PRESIGNED_URL_EXPIRY_SECS)
            .await
    }
}
