//! One-time store seed: collections, indexes and the administrator user.

use creative_core::roles::ROLE_ADMIN;
use creative_core::types::{new_doc_id, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::store::{DocumentStore, IndexKind, IndexSpec, InsertOutcome};

pub const COLLECTION_CREATIVES: &str = "creatives";
pub const COLLECTION_SCRIPTS: &str = "scripts";
pub const COLLECTION_USERS: &str = "users";

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_NAME: &str = "System Administrator";

/// Bcrypt hash shipped for development installs. Override it with
/// `SEED_ADMIN_PASSWORD_HASH` anywhere the store is reachable by others.
pub const DEV_ADMIN_PASSWORD_HASH: &str =
    "$2b$10$zG5KJJMQtdxPBOpZ9Py42OcgmJc8Eo2y3LZ.OzlUfvMgmyVmvTX9m";

/// Shape of a document in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDoc {
    pub email: String,
    /// Pre-hashed credential; plain passwords never reach the store.
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Everything the seed creates.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub collections: Vec<&'static str>,
    pub indexes: Vec<IndexSpec>,
    pub admin: UserDoc,
}

impl SeedPlan {
    /// The standard plan: `creatives`, `scripts`, `users`, their indexes,
    /// and one administrator with the given password hash.
    pub fn standard(admin_password_hash: impl Into<String>) -> Self {
        Self {
            collections: vec![COLLECTION_CREATIVES, COLLECTION_SCRIPTS, COLLECTION_USERS],
            indexes: vec![
                IndexSpec {
                    name: "idx_creatives_text",
                    collection: COLLECTION_CREATIVES,
                    kind: IndexKind::Text,
                    fields: vec!["title", "overview"],
                },
                IndexSpec {
                    name: "idx_scripts_creative_id",
                    collection: COLLECTION_SCRIPTS,
                    kind: IndexKind::Ascending,
                    fields: vec!["creative_id"],
                },
                IndexSpec {
                    name: "uq_users_email",
                    collection: COLLECTION_USERS,
                    kind: IndexKind::Unique,
                    fields: vec!["email"],
                },
            ],
            admin: UserDoc {
                email: DEFAULT_ADMIN_EMAIL.to_string(),
                password_hash: admin_password_hash.into(),
                name: DEFAULT_ADMIN_NAME.to_string(),
                role: ROLE_ADMIN.to_string(),
                created_at: chrono::Utc::now(),
            },
        }
    }
}

/// Summary of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub collections: usize,
    pub indexes: usize,
    /// `false` when a user with the admin email already existed.
    pub admin_created: bool,
}

/// Apply a seed plan. Safe to run repeatedly.
pub async fn apply_seed(
    store: &dyn DocumentStore,
    plan: &SeedPlan,
) -> Result<SeedReport, DbError> {
    for collection in &plan.collections {
        store.create_collection(collection).await?;
    }

    for index in &plan.indexes {
        store.create_index(index).await?;
    }

    let admin = serde_json::to_value(&plan.admin)?;
    let outcome = store
        .insert_document(COLLECTION_USERS, new_doc_id(), &admin)
        .await?;

    let admin_created = outcome == InsertOutcome::Inserted;
    if admin_created {
        tracing::info!(email = %plan.admin.email, "Administrator user created");
    } else {
        tracing::info!(email = %plan.admin.email, "Administrator user already present");
    }

    Ok(SeedReport {
        collections: plan.collections.len(),
        indexes: plan.indexes.len(),
        admin_created,
    })
}
