//! S3/S3-compatible storage client
//!
//! Implements [`ObjectBackend`] on top of the rust-s3 crate. Works against
//! AWS S3 or any S3-compatible service (MinIO, R2, ...) when a custom
//! endpoint is configured.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::{Bucket, Region};
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::{Result, StorageError};
use crate::modules::storage::backend::{ListPage, ObjectBackend, StoredObject};

/// rust-s3 backed storage client
///
/// rust-s3 is built with `fail-on-err`: every non-2xx response, listings
/// included, comes back as `S3Error::HttpFailWithBody` before any XML is
/// parsed. [`S3Backend::map_error`] turns that status into an error kind and
/// keeps the service's error body as the cause.
pub struct S3Backend {
    bucket: Box<Bucket>,
    bucket_name: String,
    endpoint: Option<String>,
}

impl S3Backend {
    /// Create a new client from configuration
    ///
    /// Does not contact the service: neither credentials nor the bucket's
    /// existence are verified here.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        config.validate()?;

        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| {
            StorageError::Configuration(format!("Failed to create S3 credentials: {}", e))
        })?;

        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config.region.parse::<Region>().map_err(|e| {
                StorageError::Configuration(format!("Invalid region '{}': {}", config.region, e))
            })?,
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials).map_err(|e| {
            StorageError::Configuration(format!(
                "Failed to create bucket handle '{}': {}",
                config.bucket, e
            ))
        })?;

        // Path-style URLs (http://endpoint/bucket instead of http://bucket.endpoint)
        if config.path_style {
            bucket.set_path_style();
        }

        info!(
            "S3 client initialized for bucket: {}, region: {}, endpoint: {}",
            config.bucket,
            config.region,
            config.endpoint.as_deref().unwrap_or("default")
        );

        Ok(Self {
            bucket,
            bucket_name: config.bucket.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Custom endpoint, if one was configured
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn map_error(err: S3Error, action: &str, key: &str) -> StorageError {
        match err {
            S3Error::HttpFailWithBody(status, body) => StorageError::from_status(
                status,
                format!("Failed to {} '{}': {}", action, key, body.trim()),
            ),
            other => StorageError::Remote(format!("Failed to {} '{}': {}", action, key, other)),
        }
    }
}

#[async_trait]
impl ObjectBackend for S3Backend {
    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn put_object(&self, key: &str, data: &[u8], content_type: &str) -> Result<()> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| Self::map_error(e, "upload", key))?;

        debug!(
            "Uploaded '{}' ({} bytes, {}) to bucket '{}'",
            key,
            data.len(),
            content_type,
            self.bucket_name
        );
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<StoredObject> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| Self::map_error(e, "download", key))?;

        let headers = response.headers();
        let content_type = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.clone());

        debug!("Downloaded '{}' from bucket '{}'", key, self.bucket_name);
        Ok(StoredObject {
            data: response.bytes().to_vec(),
            content_type,
        })
    }

    async fn list_page(&self, prefix: &str, continuation_token: Option<&str>) -> Result<ListPage> {
        let (result, _status) = self
            .bucket
            .list_page(
                prefix.to_string(),
                None,
                continuation_token.map(str::to_string),
                None,
                None,
            )
            .await
            .map_err(|e| Self::map_error(e, "list prefix", prefix))?;

        let keys: Vec<String> = result.contents.into_iter().map(|obj| obj.key).collect();
        debug!(
            "Listed {} keys under '{}' in bucket '{}' (truncated: {})",
            keys.len(),
            prefix,
            self.bucket_name,
            result.is_truncated
        );

        Ok(ListPage {
            keys,
            is_truncated: result.is_truncated,
            next_continuation_token: result.next_continuation_token,
        })
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|e| Self::map_error(e, "delete", key))?;

        debug!("Deleted '{}' from bucket '{}'", key, self.bucket_name);
        Ok(())
    }

    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String> {
        self.bucket
            .presign_get(key, expiry_secs, None)
            .await
            .map_err(|e| {
                StorageError::Presign(format!(
                    "Failed to generate presigned URL for '{}': {}",
                    key, e
                ))
            })
    }
}
