mod legacy_client;
mod storage_client;

pub use legacy_client::LegacyStorageClient;
pub use storage_client::StorageClient;
