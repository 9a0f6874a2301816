use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

pub mod s3;

/// Transport or service error while writing an object. Opaque on purpose:
/// callers only log it, they never branch on it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Capability interface over object storage, so the archive writer is
/// testable without credentials or network access.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    /// Create one object under `key` with the given body and content type.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;
}
