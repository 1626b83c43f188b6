// Migrate command implementation

use crate::config::{BootstrapSettings, DatabaseConnections};

/// Run database migrations for the records database
///
/// Connects and migrates without building the full AppData.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(...)` - Connection or migration failed
pub async fn run_migrations(
    bootstrap_settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let connections = DatabaseConnections::init(bootstrap_settings).await?;
    connections.migrate().await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
