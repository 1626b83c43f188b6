// Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::Arc;

use ewaste_backend::api::build_app;
use ewaste_backend::config::{BootstrapSettings, DatabaseConnections, EnvironmentProvider, RecordRules};
use ewaste_backend::AppData;
use poem::test::{TestClient, TestResponse};
use poem::Route;
use sea_orm::Database;
use tempfile::TempDir;

/// Fixed environment for integration tests
pub struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Full application over an in-memory database
///
/// Returns (client, app_data, media_dir); keep `media_dir` alive for the test.
pub async fn setup_test_app() -> (TestClient<Route>, Arc<AppData>, TempDir) {
    let media_dir = tempfile::tempdir().expect("Failed to create media directory");

    let env = TestEnvironment {
        vars: HashMap::from([(
            "MEDIA_ROOT".to_string(),
            media_dir.path().to_string_lossy().to_string(),
        )]),
    };
    let settings = BootstrapSettings::from_env_provider(Arc::new(env))
        .expect("Failed to load test settings");

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    let connections = DatabaseConnections::from_connection(db);
    connections.migrate().await.expect("Failed to run migrations");

    let app_data = Arc::new(
        AppData::init(connections, &settings, RecordRules::default())
            .await
            .expect("Failed to initialize AppData"),
    );

    let client = TestClient::new(build_app(app_data.clone(), &settings.api_base_url()));

    (client, app_data, media_dir)
}

/// Read a response body as JSON
pub async fn body_json(response: TestResponse) -> serde_json::Value {
    response
        .0
        .into_body()
        .into_json()
        .await
        .expect("Response body was not JSON")
}
