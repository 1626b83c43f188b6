use std::collections::BTreeSet;
use std::sync::Arc;

use sea_orm::Iterable;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;
use crate::types::db::{ItemCategory, ItemCondition, RequestStatus};

/// 5 MiB
pub const DEFAULT_IMAGE_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// 10 MiB
pub const DEFAULT_DOCUMENT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Room for the text fields and multipart framing around the uploads
pub const FORM_OVERHEAD_BYTES: u64 = 1024 * 1024;

pub const DOCUMENT_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Closed value sets and limits handed to the record validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRules {
    pub categories: BTreeSet<ItemCategory>,
    pub conditions: BTreeSet<ItemCondition>,
    /// Statuses a caller may submit on create/update. `cancelled` is not
    /// among them by default.
    pub submittable_statuses: BTreeSet<RequestStatus>,
    pub name_min_chars: usize,
    pub text_max_chars: usize,
    pub phone_digits: usize,
    pub image_max_bytes: u64,
    pub document_max_bytes: u64,
    pub document_content_types: BTreeSet<String>,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self {
            categories: ItemCategory::iter().collect(),
            conditions: ItemCondition::iter().collect(),
            submittable_statuses: [
                RequestStatus::Pending,
                RequestStatus::InProgress,
                RequestStatus::Completed,
            ]
            .into_iter()
            .collect(),
            name_min_chars: 3,
            text_max_chars: 255,
            phone_digits: 10,
            image_max_bytes: DEFAULT_IMAGE_MAX_BYTES,
            document_max_bytes: DEFAULT_DOCUMENT_MAX_BYTES,
            document_content_types: DOCUMENT_CONTENT_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecordRules {
    /// Defaults with the upload ceilings overridable through
    /// `IMAGE_MAX_BYTES` and `DOCUMENT_MAX_BYTES`
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let image_max = ConfigSpec::new(env_provider.clone())
            .env_override("IMAGE_MAX_BYTES")
            .default_value(&DEFAULT_IMAGE_MAX_BYTES.to_string())
            .load_setting_with_source()?
            .value;

        let document_max = ConfigSpec::new(env_provider)
            .env_override("DOCUMENT_MAX_BYTES")
            .default_value(&DEFAULT_DOCUMENT_MAX_BYTES.to_string())
            .load_setting_with_source()?
            .value;

        Ok(Self {
            image_max_bytes: ConfigSpec::parse_byte_size(&image_max, "IMAGE_MAX_BYTES")?,
            document_max_bytes: ConfigSpec::parse_byte_size(&document_max, "DOCUMENT_MAX_BYTES")?,
            ..Self::default()
        })
    }

    /// Largest request body worth reading: both uploads at their ceilings
    /// plus the rest of the form
    pub fn max_request_bytes(&self) -> u64 {
        self.image_max_bytes + self.document_max_bytes + FORM_OVERHEAD_BYTES
    }
}
