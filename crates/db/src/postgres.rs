//! PostgreSQL realization of the [`DocumentStore`].
//!
//! Each collection is a table holding one JSONB document per row. Indexes
//! are expression indexes over `doc->>'field'`; text indexes use a GIN
//! index over `to_tsvector('simple', ...)`.
//!
//! Collection, index and field names are interpolated into DDL, so they are
//! restricted to `[a-z_]+`.

use async_trait::async_trait;
use creative_core::types::DocId;
use sqlx::types::Json;

use crate::error::DbError;
use crate::store::{DocumentStore, IndexKind, IndexSpec, InsertOutcome};
use crate::DbPool;

/// [`DocumentStore`] backed by a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create_collection(&self, name: &str) -> Result<(), DbError> {
        let ddl = collection_ddl(name)?;
        sqlx::query(&ddl).execute(&self.pool).await?;
        tracing::debug!(collection = name, "Collection ensured");
        Ok(())
    }

    async fn create_index(&self, index: &IndexSpec) -> Result<(), DbError> {
        let ddl = index_ddl(index)?;
        sqlx::query(&ddl).execute(&self.pool).await?;
        tracing::debug!(index = index.name, collection = index.collection, "Index ensured");
        Ok(())
    }

    async fn insert_document(
        &self,
        collection: &str,
        id: DocId,
        doc: &serde_json::Value,
    ) -> Result<InsertOutcome, DbError> {
        let sql = insert_sql(collection)?;
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(Json(doc))
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() == 0 {
            InsertOutcome::Duplicate
        } else {
            InsertOutcome::Inserted
        })
    }
}

/// Reject anything that is not a plain lowercase identifier.
pub fn validate_identifier(name: &str) -> Result<&str, DbError> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        Ok(name)
    } else {
        Err(DbError::InvalidIdentifier(name.to_string()))
    }
}

/// `CREATE TABLE` statement for a collection.
pub fn collection_ddl(name: &str) -> Result<String, DbError> {
    let name = validate_identifier(name)?;
    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {name} (\
         id UUID PRIMARY KEY, \
         doc JSONB NOT NULL, \
         created_at TIMESTAMPTZ NOT NULL DEFAULT now())"
    ))
}

/// `CREATE INDEX` statement for an index spec.
pub fn index_ddl(index: &IndexSpec) -> Result<String, DbError> {
    let name = validate_identifier(index.name)?;
    let collection = validate_identifier(index.collection)?;
    let fields = index
        .fields
        .iter()
        .map(|f| validate_identifier(f))
        .collect::<Result<Vec<_>, _>>()?;

    if fields.is_empty() {
        return Err(DbError::InvalidIdentifier(format!("{name} (no fields)")));
    }

    let ddl = match index.kind {
        IndexKind::Text => {
            let document = fields
                .iter()
                .map(|f| format!("coalesce(doc->>'{f}', '')"))
                .collect::<Vec<_>>()
                .join(" || ' ' || ");
            format!(
                "CREATE INDEX IF NOT EXISTS {name} ON {collection} \
                 USING GIN (to_tsvector('simple', {document}))"
            )
        }
        IndexKind::Ascending | IndexKind::Unique => {
            let unique = if index.kind == IndexKind::Unique {
                "UNIQUE "
            } else {
                ""
            };
            let columns = fields
                .iter()
                .map(|f| format!("(doc->>'{f}')"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("CREATE {unique}INDEX IF NOT EXISTS {name} ON {collection} ({columns})")
        }
    };
    Ok(ddl)
}

/// Parameterized insert that skips rows violating the primary key or any
/// unique index.
pub fn insert_sql(collection: &str) -> Result<String, DbError> {
    let collection = validate_identifier(collection)?;
    Ok(format!(
        "INSERT INTO {collection} (id, doc) VALUES ($1, $2) ON CONFLICT DO NOTHING"
    ))
}
