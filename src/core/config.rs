use std::env;
use std::fmt;

use tracing::warn;

use crate::core::error::{Result, StorageError};
use crate::shared::constants::{
    DEFAULT_REGION, ENV_ACCESS_KEY_ID, ENV_ACCESS_KEY_SECRET, ENV_BUCKET_NAME, ENV_ENDPOINT,
    ENV_PATH_STYLE, ENV_REGION,
};

/// S3/S3-compatible storage configuration
#[derive(Clone)]
pub struct StorageConfig {
    /// Access key id for authentication
    pub access_key: String,
    /// Secret access key for authentication
    pub secret_key: String,
    /// Bucket all operations run against
    pub bucket: String,
    /// AWS region (also used for signing against custom endpoints)
    pub region: String,
    /// Custom endpoint URL, e.g. `http://localhost:9000` for MinIO
    pub endpoint: Option<String>,
    /// Use path-style URLs (`http://endpoint/bucket`) instead of virtual hosts
    pub path_style: bool,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("path_style", &self.path_style)
            .finish()
    }
}

impl StorageConfig {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            path_style: false,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Point the client at a custom endpoint. Enables path-style addressing,
    /// which MinIO and most self-hosted services expect.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self.path_style = true;
        self
    }

    pub fn with_path_style(mut self, path_style: bool) -> Self {
        self.path_style = path_style;
        self
    }

    /// Check the invariants a client relies on for its whole lifetime.
    pub fn validate(&self) -> Result<()> {
        if self.access_key.trim().is_empty() || self.secret_key.trim().is_empty() {
            return Err(StorageError::Configuration(
                "S3 credentials are required (access key and secret key)".to_string(),
            ));
        }
        if self.bucket.trim().is_empty() {
            return Err(StorageError::Configuration(
                "Bucket name is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file is read first if present. `bucket` overrides
    /// `S3_BUCKET_NAME` when given.
    pub fn from_env(bucket: Option<&str>) -> Result<Self> {
        // Missing .env is fine, anything else is worth a warning
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Error loading .env file: {}", e);
            }
        }

        Self::from_lookup(bucket, |name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(bucket: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let (access_key, secret_key) = match (read(ENV_ACCESS_KEY_ID), read(ENV_ACCESS_KEY_SECRET))
        {
            (Some(access_key), Some(secret_key)) => (access_key, secret_key),
            _ => {
                return Err(StorageError::Configuration(format!(
                    "S3 credentials not found: {} and {} must be set",
                    ENV_ACCESS_KEY_ID, ENV_ACCESS_KEY_SECRET
                )))
            }
        };

        let bucket = match bucket.map(str::trim).filter(|b| !b.is_empty()) {
            Some(bucket) => bucket.to_string(),
            None => read(ENV_BUCKET_NAME).ok_or_else(|| {
                StorageError::Configuration(format!(
                    "No bucket given and {} is not set",
                    ENV_BUCKET_NAME
                ))
            })?,
        };

        let region = read(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint = read(ENV_ENDPOINT);

        let path_style = match read(ENV_PATH_STYLE) {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                StorageError::Configuration(format!(
                    "{} must be true or false, got '{}'",
                    ENV_PATH_STYLE, value
                ))
            })?,
            None => endpoint.is_some(),
        };

        Ok(Self {
            access_key,
            secret_key,
            bucket,
            region,
            endpoint,
            path_style,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
