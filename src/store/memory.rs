use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::{Bson, Document};

use super::{DocumentStore, StoreError};

/// In-memory document store, used by the test suite in place of MongoDB.
///
/// Filters are interpreted as equality on every named field, which is the
/// only filter shape this service issues. Updates understand `$set` only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| document.get(key) == Some(expected))
}

fn apply_update(document: &mut Document, update: &Document) {
    if let Some(Bson::Document(set)) = update.get("$set") {
        for (key, value) in set.iter() {
            document.insert(key.clone(), value.clone());
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError> {
        let collections = self
            .collections
            .lock()
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        collections.entry(collection.to_string()).or_default().push(document);
        Ok(())
    }

    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        if let Some(documents) = collections.get_mut(collection) {
            if let Some(document) = documents.iter_mut().find(|d| matches(d, &filter)) {
                // Mongo's default returns the pre-update document.
                let before = document.clone();
                apply_update(document, &update);
                return Ok(Some(before));
            }
        }
        Ok(None)
    }

    async fn delete_many(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|e| StoreError::Operation(e.to_string()))?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = documents.len();
        documents.retain(|d| !matches(d, &filter));
        Ok((before - documents.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
