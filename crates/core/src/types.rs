/// Document identifiers are time-ordered UUIDs (v7).
pub type DocId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document identifier.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::now_v7()
}
