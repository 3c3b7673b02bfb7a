//! Document store provisioning for the creative workbench.
//!
//! The services never touch the store at runtime; this crate only owns the
//! one-time seed that creates collections, indexes and the administrator
//! user.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
