use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::errors::internal::ValidationError;
use crate::services::RecordValidator;
use crate::types::db::format_millis;
use crate::types::dto::common::{check_complete, require};
use crate::types::internal::records::{CollectionRequestRecord, Page};
use crate::types::internal::submissions::{CollectionRequestCandidate, CollectionRequestPatch};

/// Request model for creating or replacing a collection request
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CollectionRequestBody {
    /// Requesting owner id
    pub owner: Option<i64>,

    /// Waste item id
    pub item: Option<i64>,

    /// pending, in_progress or completed; defaults to pending
    pub status: Option<String>,

    /// Pickup time (RFC 3339)
    pub pickup_date: Option<String>,
}

impl CollectionRequestBody {
    pub fn into_candidate(
        self,
        validator: &RecordValidator,
    ) -> Result<CollectionRequestCandidate, ValidationError> {
        let mut required = ValidationError::new();
        let candidate = CollectionRequestCandidate {
            owner_id: require(&mut required, "owner", self.owner).unwrap_or_default(),
            item_id: require(&mut required, "item", self.item).unwrap_or_default(),
            status: self.status,
            pickup_date: self.pickup_date,
        };

        check_complete(required, candidate, |c| validator.validate_collection_request(c))
    }
}

/// Request model for a partial collection request update
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct CollectionRequestPatchBody {
    pub owner: Option<i64>,
    pub item: Option<i64>,
    pub status: Option<String>,
    pub pickup_date: Option<String>,
}

impl From<CollectionRequestPatchBody> for CollectionRequestPatch {
    fn from(body: CollectionRequestPatchBody) -> Self {
        CollectionRequestPatch {
            owner_id: body.owner,
            item_id: body.item,
            status: body.status,
            pickup_date: body.pickup_date,
        }
    }
}

/// Response model representing a collection request
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CollectionRequestResponse {
    pub id: i64,
    pub owner: i64,
    pub owner_name: String,
    pub item: i64,
    pub item_name: String,
    pub status: String,
    pub pickup_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CollectionRequestRecord> for CollectionRequestResponse {
    fn from(record: CollectionRequestRecord) -> Self {
        let request = record.request;
        Self {
            id: request.id,
            owner: request.owner_id,
            owner_name: record.owner_name,
            item: request.item_id,
            item_name: record.item_name,
            status: request.status.to_string(),
            pickup_date: request.pickup_date.map(format_millis),
            created_at: format_millis(request.created_at),
            updated_at: format_millis(request.updated_at),
        }
    }
}

/// One page of collection requests
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CollectionRequestPage {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub results: Vec<CollectionRequestResponse>,
}

impl From<Page<CollectionRequestRecord>> for CollectionRequestPage {
    fn from(page: Page<CollectionRequestRecord>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(CollectionRequestResponse::from);
        Self {
            count: page.count,
            page: page.page,
            page_size: page.page_size,
            total_pages,
            results: page.results,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CollectionRequestCreated {
    /// Collection request created
    #[oai(status = 201)]
    Created(Json<CollectionRequestResponse>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::RecordRules;

    #[test]
    fn test_missing_item_reported_with_bad_status() {
        let validator = RecordValidator::new(Arc::new(RecordRules::default()));
        let errors = CollectionRequestBody {
            owner: Some(1),
            item: None,
            status: Some("cancelled".to_string()),
            pickup_date: Some("tomorrow".to_string()),
        }
        .into_candidate(&validator)
        .unwrap_err();

        assert_eq!(errors.messages("item"), ["This field is required."]);
        assert_eq!(errors.messages("status"), ["Invalid status value."]);
        assert_eq!(errors.messages("pickup_date"), ["Datetime has wrong format."]);
        assert!(!errors.has_field("owner"));
    }
}
