//! Storage module for object access
//!
//! Provides the [`ObjectBackend`] seam with an S3/S3-compatible
//! implementation and an in-memory one.

mod backend;
mod memory_client;
mod s3_client;

pub use backend::{ListPage, ObjectBackend, StoredObject};
pub use memory_client::MemoryBackend;
pub use s3_client::S3Backend;
