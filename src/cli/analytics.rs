// Analytics summary command

use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::AnalyticsCoordinator;
use crate::types::internal::analytics::AnalyticsSnapshot;
use crate::types::internal::context::RequestContext;

/// Compute the analytics snapshot from the command line
pub async fn snapshot(app_data: Arc<AppData>) -> Result<AnalyticsSnapshot, Box<dyn std::error::Error>> {
    let ctx = RequestContext::for_cli();
    let snapshot = AnalyticsCoordinator::new(app_data).snapshot(&ctx).await?;
    Ok(snapshot)
}

/// Print the snapshot as pretty JSON on stdout
pub async fn print_analytics(app_data: Arc<AppData>) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = snapshot(app_data).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{seed_owner, setup_test_app_data};

    #[tokio::test]
    async fn test_cli_snapshot_counts_owners() {
        let (app_data, _media) = setup_test_app_data().await;
        seed_owner(&app_data.connections.records, "Asha", "asha@example.com").await;

        let snapshot = snapshot(app_data).await.unwrap();

        assert_eq!(snapshot.total_users, 1);
        assert_eq!(snapshot.user_contributions[0].total_items, 0);
    }
}
