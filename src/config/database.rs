use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::config::BootstrapSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Shared database handle
///
/// Read operations use `records` directly; every write goes through
/// `begin_transaction` so it either fully applies or is rolled back.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub records: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the records database
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let database_url = bootstrap_settings.database_url();

        let records = Database::connect(database_url)
            .await
            .map_err(|source| DatabaseError::Connect { source })?;

        tracing::debug!("Connected to records database: {}", database_url);

        Ok(Self { records })
    }

    /// Wrap an existing connection
    pub fn from_connection(records: DatabaseConnection) -> Self {
        Self { records }
    }

    /// Run all pending migrations
    pub async fn migrate(&self) -> Result<(), InternalError> {
        Migrator::up(&self.records, None)
            .await
            .map_err(|source| DatabaseError::Migration { source })?;

        tracing::debug!("Records database migrations completed");

        Ok(())
    }

    pub async fn begin_transaction(&self) -> Result<DatabaseTransaction, InternalError> {
        let txn = self
            .records
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source })?;
        Ok(txn)
    }

    pub async fn commit_transaction(txn: DatabaseTransaction) -> Result<(), InternalError> {
        txn.commit()
            .await
            .map_err(|source| DatabaseError::TransactionCommit { source })?;
        Ok(())
    }
}

impl std::fmt::Debug for DatabaseConnections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConnections")
            .field("records", &"<connection>")
            .finish()
    }
}
