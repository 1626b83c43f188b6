use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::analytics::AnalyticsSnapshot;

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CategoryCountResponse {
    pub category: String,
    pub count: i64,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct StatusCountResponse {
    pub status: String,
    pub count: i64,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OwnerContributionResponse {
    /// Owner name
    pub name: String,
    pub total_items: i64,
}

/// Dashboard summary
///
/// Categories and statuses with no rows are omitted; owners with no items
/// are listed with zero.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub total_users: u64,
    pub total_e_waste_items: u64,
    pub e_waste_by_category: Vec<CategoryCountResponse>,
    pub collection_status_counts: Vec<StatusCountResponse>,
    pub user_contributions: Vec<OwnerContributionResponse>,
}

impl From<AnalyticsSnapshot> for AnalyticsResponse {
    fn from(snapshot: AnalyticsSnapshot) -> Self {
        Self {
            total_users: snapshot.total_users,
            total_e_waste_items: snapshot.total_e_waste_items,
            e_waste_by_category: snapshot
                .e_waste_by_category
                .into_iter()
                .map(|c| CategoryCountResponse { category: c.category, count: c.count })
                .collect(),
            collection_status_counts: snapshot
                .collection_status_counts
                .into_iter()
                .map(|s| StatusCountResponse { status: s.status, count: s.count })
                .collect(),
            user_contributions: snapshot
                .user_contributions
                .into_iter()
                .map(|o| OwnerContributionResponse { name: o.name, total_items: o.total_items })
                .collect(),
        }
    }
}
