//! In-process storage backend
//!
//! Keeps objects in a sorted map and mimics the S3 semantics the client
//! depends on: lexicographic listing in pages, idempotent deletes and
//! `NotFound` for missing keys. Useful for tests and offline runs.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::{Result, StorageError};
use crate::modules::storage::backend::{ListPage, ObjectBackend, StoredObject};
use crate::shared::constants::DEFAULT_LIST_PAGE_SIZE;

pub struct MemoryBackend {
    bucket_name: String,
    objects: RwLock<BTreeMap<String, StoredObject>>,
    page_size: usize,
}

impl MemoryBackend {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            objects: RwLock::new(BTreeMap::new()),
            page_size: DEFAULT_LIST_PAGE_SIZE,
        }
    }

    /// Limit the number of keys returned per listing request (minimum 1)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Snapshot of a stored object
    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, StoredObject>> {
        self.objects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, StoredObject>> {
        self.objects.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ObjectBackend for MemoryBackend {
    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn put_object(&self, key: &str, data: &[u8], content_type: &str) -> Result<()> {
        self.write().insert(
            key.to_string(),
            StoredObject {
                data: data.to_vec(),
                content_type: Some(content_type.to_string()),
            },
        );
        debug!("Stored '{}' ({} bytes) in memory", key, data.len());
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<StoredObject> {
        self.object(key).ok_or_else(|| {
            StorageError::NotFound(format!(
                "Object '{}' does not exist in bucket '{}'",
                key, self.bucket_name
            ))
        })
    }

    async fn list_page(&self, prefix: &str, continuation_token: Option<&str>) -> Result<ListPage> {
        let objects = self.read();

        // The token is the last key of the previous page
        let start = match continuation_token {
            Some(token) => Bound::Excluded(token.to_string()),
            None => Bound::Included(prefix.to_string()),
        };

        let mut matching = objects
            .range::<String, _>((start, Bound::Unbounded))
            .map(|(key, _)| key)
            .skip_while(|key| key.as_str() < prefix)
            .take_while(|key| key.starts_with(prefix));

        let keys: Vec<String> = matching.by_ref().take(self.page_size).cloned().collect();
        let is_truncated = matching.next().is_some();
        let next_continuation_token = if is_truncated {
            keys.last().cloned()
        } else {
            None
        };

        Ok(ListPage {
            keys,
            is_truncated,
            next_continuation_token,
        })
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.write().remove(key);
        Ok(())
    }

    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String> {
        Ok(format!(
            "memory://{}/{}?X-Amz-Expires={}",
            self.bucket_name, key, expiry_secs
        ))
    }
}
