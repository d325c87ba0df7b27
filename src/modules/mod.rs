//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the clients that talk to the object storage service.

pub mod storage;
