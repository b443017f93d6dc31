//! Storage-client abstraction.
//!
//! The service never talks to the document store directly; handlers and
//! integrity checks receive a `DocumentStore` handle constructed once at
//! process start. Production uses [`MongoStore`]; the test suite substitutes
//! [`MemoryStore`].

use async_trait::async_trait;
use bson::Document;
use thiserror::Error;

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// The operations the service issues against named collections. Deletion has
/// no HTTP surface; it exists for test cleanup.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError>;

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, StoreError>;

    async fn delete_many(&self, collection: &str, filter: Document) -> Result<u64, StoreError>;

    /// Liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
