use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::InternalError;
use crate::stores::AnalyticsStore;
use crate::types::internal::analytics::AnalyticsSnapshot;
use crate::types::internal::context::RequestContext;

/// Dashboard figures, computed live on every call
pub struct AnalyticsCoordinator {
    connections: DatabaseConnections,
    analytics_store: Arc<AnalyticsStore>,
}

impl AnalyticsCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            analytics_store: Arc::clone(&app_data.analytics_store),
        }
    }

    /// All counts are read inside one transaction so they agree with each other
    pub async fn snapshot(&self, ctx: &RequestContext) -> Result<AnalyticsSnapshot, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, source = ?ctx.source, "Computing analytics snapshot");

        let txn = self.connections.begin_transaction().await?;
        let snapshot = self.analytics_store.snapshot(&txn).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        Ok(snapshot)
    }
}
