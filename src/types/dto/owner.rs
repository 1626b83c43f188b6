use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::errors::internal::ValidationError;
use crate::services::RecordValidator;
use crate::types::db::{format_millis, owner};
use crate::types::dto::common::{check_complete, require};
use crate::types::internal::records::Page;
use crate::types::internal::submissions::{OwnerCandidate, OwnerPatch};

/// Request model for creating or replacing an owner
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OwnerRequest {
    /// Full name, at least 3 characters
    pub name: Option<String>,

    /// Unique email address
    pub email: Option<String>,

    /// Exactly 10 digits
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,
}

impl OwnerRequest {
    /// Every field is required; missing ones are reported together with
    /// the errors on the supplied fields
    pub fn into_candidate(
        self,
        validator: &RecordValidator,
    ) -> Result<OwnerCandidate, ValidationError> {
        let mut required = ValidationError::new();
        let candidate = OwnerCandidate {
            name: require(&mut required, "name", self.name).unwrap_or_default(),
            email: require(&mut required, "email", self.email).unwrap_or_default(),
            phone: require(&mut required, "phone", self.phone).unwrap_or_default(),
            address: require(&mut required, "address", self.address).unwrap_or_default(),
        };

        check_complete(required, candidate, |c| validator.validate_owner(c))
    }
}

/// Request model for a partial owner update
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct OwnerPatchRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<OwnerPatchRequest> for OwnerPatch {
    fn from(body: OwnerPatchRequest) -> Self {
        OwnerPatch {
            name: body.name,
            email: body.email,
            phone: body.phone,
            address: body.address,
        }
    }
}

/// Response model representing an owner
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Last modification time (RFC 3339)
    pub updated_at: String,
}

impl From<owner::Model> for OwnerResponse {
    fn from(model: owner::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: format_millis(model.created_at),
            updated_at: format_millis(model.updated_at),
        }
    }
}

/// One page of owners
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct OwnerPage {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub results: Vec<OwnerResponse>,
}

impl From<Page<owner::Model>> for OwnerPage {
    fn from(page: Page<owner::Model>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(OwnerResponse::from);
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
pub enum OwnerCreated {
    /// Owner created
    #[oai(status = 201)]
    Created(Json<OwnerResponse>),
}
