use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Infrastructure settings needed before anything else can start
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    media_root: PathBuf,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://ewaste.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let media_root = ConfigSpec::new(env_provider)
            .env_override("MEDIA_ROOT")
            .default_value("media")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            media_root: PathBuf::from(media_root),
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL advertised in the OpenAPI document
    pub fn api_base_url(&self) -> String {
        format!("http://localhost:{}/api", self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("media_root", &self.media_root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env = Arc::new(MockEnvironment::empty().with_vars(&[
            ("DATABASE_URL", "sqlite://test.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MEDIA_ROOT", "/srv/ewaste-media"),
        ]));

        let settings = BootstrapSettings::from_env_provider(env).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.media_root(), Path::new("/srv/ewaste-media"));
        assert_eq!(settings.api_base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty())).unwrap();

        assert_eq!(settings.database_url(), "sqlite://ewaste.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
        assert_eq!(settings.media_root(), Path::new("media"));
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        let env = Arc::new(MockEnvironment::empty().with_var("DATABASE_URL", ""));

        match BootstrapSettings::from_env_provider(env).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_fails_validation() {
        let env = Arc::new(MockEnvironment::empty().with_var("PORT", "not-a-port"));

        match BootstrapSettings::from_env_provider(env).unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, .. } => assert_eq!(setting_name, "PORT"),
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }
}
