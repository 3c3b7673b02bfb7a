//! In-process [`DocumentStore`] used for dry runs and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use creative_core::types::DocId;

use crate::error::DbError;
use crate::store::{DocumentStore, IndexKind, IndexSpec, InsertOutcome};

#[derive(Debug, Default)]
struct Collection {
    docs: Vec<(DocId, serde_json::Value)>,
    indexes: Vec<IndexSpec>,
}

impl Collection {
    fn conflicts(&self, id: DocId, doc: &serde_json::Value) -> bool {
        self.docs.iter().any(|(existing_id, existing)| {
            *existing_id == id
                || self
                    .indexes
                    .iter()
                    .filter(|idx| idx.kind == IndexKind::Unique)
                    .any(|idx| {
                        idx.fields.iter().all(|f| match (doc.get(f), existing.get(f)) {
                            (Some(a), Some(b)) => !a.is_null() && a == b,
                            _ => false,
                        })
                    })
        })
    }
}

/// A [`DocumentStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection, or `None` if it does not exist.
    pub fn count(&self, collection: &str) -> Option<usize> {
        self.lock().get(collection).map(|c| c.docs.len())
    }

    /// Names of the indexes defined on a collection.
    pub fn index_names(&self, collection: &str) -> Vec<&'static str> {
        self.lock()
            .get(collection)
            .map(|c| c.indexes.iter().map(|i| i.name).collect())
            .unwrap_or_default()
    }

    /// All documents of a collection, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<serde_json::Value> {
        self.lock()
            .get(collection)
            .map(|c| c.docs.iter().map(|(_, d)| d.clone()).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Collection>> {
        // Every write completes before the guard drops, so a poisoned map
        // is still consistent.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        self.lock().entry(name.to_string()).or_default();
        Ok(())
    }

    async fn create_index(&self, index: &IndexSpec) -> Result<(), DbError> {
        let mut collections = self.lock();
        let collection = collections
            .get_mut(index.collection)
            .ok_or_else(|| DbError::UnknownCollection(index.collection.to_string()))?;

        if !collection.indexes.iter().any(|i| i.name == index.name) {
            collection.indexes.push(index.clone());
        }
        Ok(())
    }

    async fn insert_document(
        &self,
        collection: &str,
        id: DocId,
        doc: &serde_json::Value,
    ) -> Result<InsertOutcome, DbError> {
        let mut collections = self.lock();
        let target = collections
            .get_mut(collection)
            .ok_or_else(|| DbError::UnknownCollection(collection.to_string()))?;

        if target.conflicts(id, doc) {
            return Ok(InsertOutcome::Duplicate);
        }
        target.docs.push((id, doc.clone()));
        Ok(InsertOutcome::Inserted)
    }
}
