use async_trait::async_trait;

use crate::core::error::Result;

/// Object body and the content type it was stored with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// One page of a prefix listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Keys in lexicographic order
    pub keys: Vec<String>,
    /// More keys match the prefix than were returned
    pub is_truncated: bool,
    /// Token to pass back to fetch the next page
    pub next_continuation_token: Option<String>,
}

/// Single-request operations against one bucket.
///
/// Every method maps onto exactly one call to the storage service.
/// Implementations translate service failures into [`StorageError`]
/// variants and must not retry.
///
/// [`StorageError`]: crate::core::error::StorageError
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    fn bucket_name(&self) -> &str;

    async fn put_object(&self, key: &str, data: &[u8], content_type: &str) -> Result<()>;

    /// Fails with `NotFound` when the key does not exist.
    async fn get_object(&self, key: &str) -> Result<StoredObject>;

    async fn list_page(&self, prefix: &str, continuation_token: Option<&str>) -> Result<ListPage>;

    /// Deleting a missing key succeeds.
    async fn delete_object(&self, key: &str) -> Result<()>;

    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String>;
}
