use poem_openapi::types::multipart::Upload;
use poem_openapi::{payload::Json, ApiResponse, Multipart, Object};
use serde::{Deserialize, Serialize};

use crate::errors::internal::ValidationError;
use crate::errors::InternalError;
use crate::services::RecordValidator;
use crate::types::db::format_millis;
use crate::types::dto::common::{check_complete, require};
use crate::types::internal::records::{Page, WasteItemRecord};
use crate::types::internal::submissions::{AssetUpload, WasteItemCandidate, WasteItemPatch};

/// Multipart form for creating, replacing or patching a waste item
///
/// On create and replace `name`, `category`, `condition` and `owner` are
/// required. Uploads are optional everywhere; an absent upload keeps the
/// stored file.
#[derive(Multipart, Debug)]
pub struct WasteItemForm {
    pub name: Option<String>,

    /// One of mobile, laptop, home_appliance, other
    pub category: Option<String>,

    /// One of new, used, damaged, not_working
    pub condition: Option<String>,

    /// Owner id
    pub owner: Option<i64>,

    /// Image up to 5MB
    pub image: Option<Upload>,

    /// PDF or Word document up to 10MB
    pub document: Option<Upload>,
}

impl WasteItemForm {
    /// Read uploads and require every core field
    ///
    /// Missing fields are reported together with the errors on the
    /// supplied fields and uploads.
    pub async fn into_candidate(
        self,
        validator: &RecordValidator,
    ) -> Result<WasteItemCandidate, InternalError> {
        let mut required = ValidationError::new();
        let name = require(&mut required, "name", self.name);
        let category = require(&mut required, "category", self.category);
        let condition = require(&mut required, "condition", self.condition);
        let owner_id = require(&mut required, "owner", self.owner);

        let candidate = WasteItemCandidate {
            name: name.unwrap_or_default(),
            category: category.unwrap_or_default(),
            condition: condition.unwrap_or_default(),
            owner_id: owner_id.unwrap_or_default(),
            image: read_upload(self.image).await?,
            document: read_upload(self.document).await?,
        };

        Ok(check_complete(required, candidate, |c| validator.validate_waste_item(c))?)
    }

    pub async fn into_patch(self) -> Result<WasteItemPatch, InternalError> {
        Ok(WasteItemPatch {
            name: self.name,
            category: self.category,
            condition: self.condition,
            owner_id: self.owner,
            image: read_upload(self.image).await?,
            document: read_upload(self.document).await?,
        })
    }
}

/// Buffer an upload with the metadata the validator needs
async fn read_upload(upload: Option<Upload>) -> Result<Option<AssetUpload>, InternalError> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let file_name = upload.file_name().map(str::to_string);
    let content_type = upload.content_type().map(str::to_string);
    let bytes = upload
        .into_vec()
        .await
        .map_err(|e| InternalError::storage("read_upload", e))?;

    Ok(Some(AssetUpload::new(file_name, content_type, bytes)))
}

/// Response model representing a waste item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct WasteItemResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub condition: String,

    /// Owner id
    pub owner: i64,
    pub owner_name: String,

    /// URL of the stored image, if any
    pub image: Option<String>,

    /// URL of the stored document, if any
    pub document: Option<String>,

    pub created_at: String,
    pub updated_at: String,
}

fn media_url(path: Option<String>) -> Option<String> {
    path.map(|p| format!("/media/{}", p))
}

impl From<WasteItemRecord> for WasteItemResponse {
    fn from(record: WasteItemRecord) -> Self {
        let item = record.item;
        Self {
            id: item.id,
            name: item.name,
            category: item.category.to_string(),
            condition: item.condition.to_string(),
            owner: item.owner_id,
            owner_name: record.owner_name,
            image: media_url(item.image),
            document: media_url(item.document),
            created_at: format_millis(item.created_at),
            updated_at: format_millis(item.updated_at),
        }
    }
}

/// One page of waste items
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct WasteItemPage {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub results: Vec<WasteItemResponse>,
}

impl From<Page<WasteItemRecord>> for WasteItemPage {
    fn from(page: Page<WasteItemRecord>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(WasteItemResponse::from);
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
pub enum WasteItemCreated {
    /// Waste item created
    #[oai(status = 201)]
    Created(Json<WasteItemResponse>),
}
