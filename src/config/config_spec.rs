use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Where a loaded setting came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// Uses environment override → default priority. A setting with neither
    /// is an error.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, &setting_name)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default, &setting_name)?;

            return Ok(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            });
        }

        Err(ApplicationError::InvalidSetting {
            setting_name,
            reason: "Required setting has no value from any source".to_string(),
        })
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "unknown_setting".to_string())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    /// Parse a port number from string with validation
    ///
    /// Validates that the port is in the valid range (1-65535).
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>().map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected port number (1-65535), got '{}': {}", value, e),
        })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    /// Parse a positive byte count
    pub fn parse_byte_size(value: &str, setting_name: &str) -> Result<u64, ApplicationError> {
        let bytes = value.trim().parse::<u64>().map_err(|e| ApplicationError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected a size in bytes, got '{}': {}", value, e),
        })?;

        if bytes == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Size must be greater than zero".to_string(),
            });
        }

        Ok(bytes)
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Basic host validation: non-empty, no whitespace. Does no DNS lookup.
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value == "[]" {
            return Err("Invalid IPv6 address format".to_string());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_load_setting_with_source_env_override() {
        let env = Arc::new(MockEnvironment::empty().with_var("TEST_SETTING", "env_value"));

        let spec = ConfigSpec::new(env)
            .env_override("TEST_SETTING")
            .default_value("default_value");

        let result = spec.load_setting_with_source().unwrap();

        assert_eq!(result.value, "env_value");
        assert_eq!(
            result.source,
            ConfigValueSource::EnvironmentVariable { name: "TEST_SETTING".to_string() }
        );
    }

    #[test]
    fn test_load_setting_with_source_default() {
        let spec = ConfigSpec::new(Arc::new(MockEnvironment::empty()))
            .env_override("TEST_SETTING_DEFAULT")
            .default_value("default_value");

        let result = spec.load_setting_with_source().unwrap();

        assert_eq!(result.value, "default_value");
        assert_eq!(result.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_load_setting_with_source_validation() {
        let env = Arc::new(MockEnvironment::empty().with_var("TEST_SETTING_VALIDATION", "short"));

        let spec = ConfigSpec::new(env)
            .env_override("TEST_SETTING_VALIDATION")
            .min_length(10);

        match spec.load_setting_with_source().unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "TEST_SETTING_VALIDATION");
                assert!(reason.contains("at least 10 characters"));
            }
            other => panic!("Expected InvalidSetting error, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_setting_without_default_fails() {
        let spec = ConfigSpec::new(Arc::new(MockEnvironment::empty())).env_override("NOWHERE");

        assert!(spec.load_setting_with_source().is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("8080", "PORT").unwrap(), 8080);
        assert!(ConfigSpec::parse_port("0", "PORT").is_err());
        assert!(ConfigSpec::parse_port("70000", "PORT").is_err());
    }

    #[test]
    fn test_parse_byte_size() {
        assert_eq!(ConfigSpec::parse_byte_size(" 5242880 ", "IMAGE_MAX_BYTES").unwrap(), 5_242_880);
        assert!(ConfigSpec::parse_byte_size("0", "IMAGE_MAX_BYTES").is_err());
        assert!(ConfigSpec::parse_byte_size("5MB", "IMAGE_MAX_BYTES").is_err());
    }

    #[test]
    fn test_validate_host_address() {
        assert!(ConfigSpec::validate_host_address("0.0.0.0").is_ok());
        assert!(ConfigSpec::validate_host_address("example.com").is_ok());
        assert!(ConfigSpec::validate_host_address("").is_err());
        assert!(ConfigSpec::validate_host_address("bad host").is_err());
        assert!(ConfigSpec::validate_host_address("[]").is_err());
    }
}
