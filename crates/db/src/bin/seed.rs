use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creative_db::postgres::PgDocumentStore;
use creative_db::seed::{apply_seed, SeedPlan, DEV_ADMIN_PASSWORD_HASH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creative_db=debug,creative_seed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = creative_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    creative_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database connection established");

    let password_hash = match std::env::var("SEED_ADMIN_PASSWORD_HASH") {
        Ok(hash) if !hash.trim().is_empty() => hash,
        _ => {
            tracing::warn!(
                "SEED_ADMIN_PASSWORD_HASH not set, seeding administrator with the development password hash"
            );
            DEV_ADMIN_PASSWORD_HASH.to_string()
        }
    };

    let store = PgDocumentStore::new(pool);
    let report = apply_seed(&store, &SeedPlan::standard(password_hash))
        .await
        .context("Seed failed")?;

    tracing::info!(
        collections = report.collections,
        indexes = report.indexes,
        admin_created = report.admin_created,
        "Database seed complete"
    );
    Ok(())
}
