use std::str::FromStr;
use std::sync::Arc;

use chrono::DateTime;
use validator::ValidateEmail;

use crate::config::RecordRules;
use crate::errors::internal::ValidationError;
use crate::types::db::{ItemCategory, ItemCondition, RequestStatus};
use crate::types::internal::submissions::{
    AssetUpload, CollectionRequestCandidate, OwnerCandidate, ValidCollectionRequest, ValidOwner,
    ValidWasteItem, WasteItemCandidate,
};

pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long.";
pub const PHONE_WRONG_LENGTH: &str = "Phone number must be exactly 10 digits.";
pub const PHONE_NOT_DIGITS: &str = "Phone number must contain only digits.";
pub const FIELD_REQUIRED: &str = "This field is required.";
pub const FIELD_BLANK: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const EMAIL_TAKEN: &str = "owner with this email already exists.";
pub const IMAGE_TOO_LARGE: &str = "Image file size cannot exceed 5MB.";
pub const NOT_AN_IMAGE: &str = "File must be an image.";
pub const DOCUMENT_TOO_LARGE: &str = "Document file size cannot exceed 10MB.";
pub const NOT_A_DOCUMENT: &str = "File must be a PDF or Word document.";
pub const INVALID_STATUS: &str = "Invalid status value.";
pub const INVALID_DATETIME: &str = "Datetime has wrong format.";

/// Message for a value outside a closed choice set
pub fn invalid_choice(value: &str) -> String {
    format!("\"{}\" is not a valid choice.", value)
}

fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max)
}

/// Field and cross-field checks for the three record kinds
///
/// Pure: only inspects the candidate and upload metadata. Every independent
/// field error is collected so the caller sees all of them at once.
/// Reference existence and email uniqueness need the database and are
/// checked by the coordinators.
pub struct RecordValidator {
    rules: Arc<RecordRules>,
}

impl RecordValidator {
    pub fn new(rules: Arc<RecordRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RecordRules {
        &self.rules
    }

    pub fn validate_owner(&self, candidate: OwnerCandidate) -> Result<ValidOwner, ValidationError> {
        let mut errors = ValidationError::new();

        let name = candidate.name.trim().to_string();
        if name.chars().count() < self.rules.name_min_chars {
            errors.add("name", NAME_TOO_SHORT);
        } else if name.chars().count() > self.rules.text_max_chars {
            errors.add("name", too_long(self.rules.text_max_chars));
        }

        let email = candidate.email.trim().to_string();
        if !is_valid_email(&email) {
            errors.add("email", INVALID_EMAIL);
        } else if email.chars().count() > self.rules.text_max_chars {
            errors.add("email", too_long(self.rules.text_max_chars));
        }

        let phone = candidate.phone.trim().to_string();
        if phone.chars().count() != self.rules.phone_digits {
            errors.add("phone", PHONE_WRONG_LENGTH);
        }
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.add("phone", PHONE_NOT_DIGITS);
        }

        let address = candidate.address.trim().to_string();
        if address.is_empty() {
            errors.add("address", FIELD_REQUIRED);
        } else if address.chars().count() > self.rules.text_max_chars {
            errors.add("address", too_long(self.rules.text_max_chars));
        }

        errors.check(ValidOwner {
            name,
            email,
            phone,
            address,
        })
    }

    pub fn validate_waste_item(
        &self,
        candidate: WasteItemCandidate,
    ) -> Result<ValidWasteItem, ValidationError> {
        let mut errors = ValidationError::new();

        let name = candidate.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", FIELD_BLANK);
        } else if name.chars().count() > self.rules.text_max_chars {
            errors.add("name", too_long(self.rules.text_max_chars));
        }

        let category = self.parse_category(&candidate.category);
        if let Err(message) = &category {
            errors.add("category", message.clone());
        }

        let condition = ItemCondition::from_str(candidate.condition.trim())
            .ok()
            .filter(|c| self.rules.conditions.contains(c));
        if condition.is_none() {
            errors.add("condition", invalid_choice(&candidate.condition));
        }

        if let Some(image) = &candidate.image {
            self.check_image(image, &mut errors);
        }
        if let Some(document) = &candidate.document {
            self.check_document(document, &mut errors);
        }

        match (category, condition) {
            (Ok(category), Some(condition)) if errors.is_empty() => Ok(ValidWasteItem {
                name,
                category,
                condition,
                owner_id: candidate.owner_id,
                image: candidate.image,
                document: candidate.document,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_collection_request(
        &self,
        candidate: CollectionRequestCandidate,
    ) -> Result<ValidCollectionRequest, ValidationError> {
        let mut errors = ValidationError::new();

        let status = match candidate.status.as_deref().map(str::trim) {
            None => None,
            Some(value) => match RequestStatus::from_str(value) {
                Ok(status) if self.rules.submittable_statuses.contains(&status) => Some(status),
                Ok(_) => {
                    errors.add("status", INVALID_STATUS);
                    None
                }
                Err(_) => {
                    errors.add("status", invalid_choice(value));
                    None
                }
            },
        };

        let pickup_date = match candidate.pickup_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => match DateTime::parse_from_rfc3339(value) {
                Ok(parsed) => Some(parsed.timestamp_millis()),
                Err(_) => {
                    errors.add("pickup_date", INVALID_DATETIME);
                    None
                }
            },
        };

        errors.check(ValidCollectionRequest {
            owner_id: candidate.owner_id,
            item_id: candidate.item_id,
            status,
            pickup_date,
        })
    }

    /// Parse a category against the configured set
    ///
    /// Shared by item validation and the listing filter.
    pub fn parse_category(&self, value: &str) -> Result<ItemCategory, String> {
        ItemCategory::from_str(value.trim())
            .ok()
            .filter(|c| self.rules.categories.contains(c))
            .ok_or_else(|| invalid_choice(value))
    }

    fn check_image(&self, image: &AssetUpload, errors: &mut ValidationError) {
        if image.size > self.rules.image_max_bytes {
            errors.add("image", IMAGE_TOO_LARGE);
        }
        let is_image = image
            .content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image/"));
        if !is_image {
            errors.add("image", NOT_AN_IMAGE);
        }
    }

    fn check_document(&self, document: &AssetUpload, errors: &mut ValidationError) {
        if document.size > self.rules.document_max_bytes {
            errors.add("document", DOCUMENT_TOO_LARGE);
        }
        let accepted = document
            .content_type
            .as_deref()
            .is_some_and(|content_type| self.rules.document_content_types.contains(content_type));
        if !accepted {
            errors.add("document", NOT_A_DOCUMENT);
        }
    }
}

/// Email syntax as `validator` checks it, with a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}
