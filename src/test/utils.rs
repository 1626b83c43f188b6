// Test utilities shared across unit and integration tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseConnections, MockEnvironment, RecordRules};
use crate::stores::{CollectionRequestStore, OwnerStore, WasteItemStore};
use crate::types::db::{collection_request, owner, waste_item, ItemCategory, ItemCondition, RequestStatus};
use crate::types::internal::submissions::{CollectionRequestFields, ValidOwner, WasteItemFields};

/// Creates an in-memory records database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a full AppData over an in-memory database
///
/// Returns (app_data, media_dir). Keep `media_dir` alive for the duration of
/// the test; uploads are written below it.
pub async fn setup_test_app_data() -> (Arc<AppData>, TempDir) {
    let media_dir = tempfile::tempdir().expect("Failed to create media directory");
    let media_root = media_dir.path().to_string_lossy().to_string();

    let env = Arc::new(MockEnvironment::empty().with_var("MEDIA_ROOT", &media_root));
    let settings = BootstrapSettings::from_env_provider(env).expect("Failed to load test settings");

    let connections = DatabaseConnections::from_connection(setup_test_db().await);
    let app_data = AppData::init(connections, &settings, RecordRules::default())
        .await
        .expect("Failed to initialize AppData");

    (Arc::new(app_data), media_dir)
}

pub fn valid_owner(name: &str, email: &str) -> ValidOwner {
    ValidOwner {
        name: name.to_string(),
        email: email.to_string(),
        phone: "1234567890".to_string(),
        address: "12 Market Road".to_string(),
    }
}

/// Insert an owner directly through the store
pub async fn seed_owner(db: &DatabaseConnection, name: &str, email: &str) -> owner::Model {
    OwnerStore::new()
        .insert(db, valid_owner(name, email))
        .await
        .expect("Failed to seed owner")
}

/// Insert a waste item directly through the store
pub async fn seed_item(
    db: &DatabaseConnection,
    owner_id: i64,
    name: &str,
    category: ItemCategory,
) -> waste_item::Model {
    WasteItemStore::new()
        .insert(
            db,
            WasteItemFields {
                name: name.to_string(),
                category,
                condition: ItemCondition::Used,
                owner_id,
                image: None,
                document: None,
            },
        )
        .await
        .expect("Failed to seed waste item")
}

/// Insert a collection request directly through the store
pub async fn seed_request(
    db: &DatabaseConnection,
    owner_id: i64,
    item_id: i64,
    status: RequestStatus,
) -> collection_request::Model {
    CollectionRequestStore::new()
        .insert(
            db,
            CollectionRequestFields {
                owner_id,
                item_id,
                status,
                pickup_date: None,
            },
        )
        .await
        .expect("Failed to seed collection request")
}
