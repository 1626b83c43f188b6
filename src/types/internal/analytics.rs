use sea_orm::FromQueryResult;
use serde::Serialize;

/// Number of waste items in one category
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Number of collection requests in one status
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Waste items contributed by one owner
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct OwnerContribution {
    pub name: String,
    pub total_items: i64,
}

/// Dashboard summary computed from the live tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_users: u64,
    pub total_e_waste_items: u64,
    pub e_waste_by_category: Vec<CategoryCount>,
    pub collection_status_counts: Vec<StatusCount>,
    pub user_contributions: Vec<OwnerContribution>,
}
