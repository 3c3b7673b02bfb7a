//! The [`DocumentStore`] abstraction and index descriptions.

use async_trait::async_trait;
use creative_core::types::DocId;

use crate::error::DbError;

/// Kind of index to build over one or more document fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Full-text index over the concatenated fields.
    Text,
    /// Plain ascending lookup index.
    Ascending,
    /// Ascending index that rejects duplicate values.
    Unique,
}

/// An index to create on a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub collection: &'static str,
    pub kind: IndexKind,
    pub fields: Vec<&'static str>,
}

/// Result of inserting a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The id or a unique-indexed field already exists; nothing was written.
    Duplicate,
}

/// Minimal document store surface needed to provision the schema.
///
/// Every operation is idempotent: creating an existing collection or index
/// is a no-op, and inserting a duplicate reports [`InsertOutcome::Duplicate`]
/// instead of failing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_collection(&self, name: &str) -> Result<(), DbError>;

    async fn create_index(&self, index: &IndexSpec) -> Result<(), DbError>;

    async fn insert_document(
        &self,
        collection: &str,
        id: DocId,
        doc: &serde_json::Value,
    ) -> Result<InsertOutcome, DbError>;
}
