//! Bucket feature: the public client operations
//!
//! [`StorageClient`] returns structured errors. [`LegacyStorageClient`]
//! wraps it for callers that expect boolean / empty-value results.

pub mod dtos;
pub mod services;

pub use dtos::{DownloadedObject, UploadedObject};
pub use services::{LegacyStorageClient, StorageClient};
