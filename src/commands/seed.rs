//! Seed command - Populates the database with demo data.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{seed, Database};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding database...");

    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    // Seed data depends on the schema being current
    db.run_migrations()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    seed::seed(db.connection()).await?;

    tracing::info!("Seeding completed successfully");
    Ok(())
}
