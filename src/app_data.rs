use std::sync::Arc;

use crate::config::{BootstrapSettings, DatabaseConnections, RecordRules};
use crate::errors::InternalError;
use crate::services::{MediaStorage, RecordValidator};
use crate::stores::{AnalyticsStore, CollectionRequestStore, OwnerStore, WasteItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// Every shared component is created once in main.rs and handed to the
/// coordinators behind an `Arc<AppData>`.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ connections (DatabaseConnections)
///   ├─ record_validator (Arc<RecordValidator>) ← RecordRules
///   ├─ media_storage (Arc<MediaStorage>) ← MEDIA_ROOT
///   ├─ owner_store / waste_item_store / collection_request_store
///   └─ analytics_store
///   ↓ wrapped in Arc<AppData>
///   ├─ OwnerCoordinator::new(app_data)
///   ├─ WasteItemCoordinator::new(app_data)
///   ├─ CollectionRequestCoordinator::new(app_data)
///   └─ AnalyticsCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub record_validator: Arc<RecordValidator>,
    pub media_storage: Arc<MediaStorage>,
    pub owner_store: Arc<OwnerStore>,
    pub waste_item_store: Arc<WasteItemStore>,
    pub collection_request_store: Arc<CollectionRequestStore>,
    pub analytics_store: Arc<AnalyticsStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    ///
    /// # Errors
    ///
    /// Returns `InternalError::Storage` when the media root cannot be created
    pub async fn init(
        connections: DatabaseConnections,
        bootstrap_settings: &BootstrapSettings,
        rules: RecordRules,
    ) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let media_root = bootstrap_settings.media_root();
        tokio::fs::create_dir_all(media_root)
            .await
            .map_err(|e| InternalError::storage("create_media_root", e))?;
        tracing::debug!("Media root ready at {}", media_root.display());

        let record_validator = Arc::new(RecordValidator::new(Arc::new(rules)));
        let media_storage = Arc::new(MediaStorage::new(media_root));

        tracing::debug!("Creating stores...");
        let owner_store = Arc::new(OwnerStore::new());
        let waste_item_store = Arc::new(WasteItemStore::new());
        let collection_request_store = Arc::new(CollectionRequestStore::new());
        let analytics_store = Arc::new(AnalyticsStore::new());
        tracing::debug!("Stores created");

        tracing::info!("AppData initialization complete");

        Ok(Self {
            connections,
            record_validator,
            media_storage,
            owner_store,
            waste_item_store,
            collection_request_store,
            analytics_store,
        })
    }
}
