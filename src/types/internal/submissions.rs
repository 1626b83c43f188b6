// Candidate records submitted for validation and the validated forms stores accept

use sea_orm::ActiveEnum;

use crate::types::db::{
    collection_request, format_millis, owner, waste_item, ItemCategory, ItemCondition,
    RequestStatus,
};

/// Owner fields as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Owner that passed validation; all values are trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOwner {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Uploaded file with the metadata the validator inspects
#[derive(Clone, PartialEq, Eq)]
pub struct AssetUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl AssetUpload {
    pub fn new(file_name: Option<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            size: bytes.len() as u64,
            bytes,
        }
    }
}

impl std::fmt::Debug for AssetUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .field("bytes", &"<binary>")
            .finish()
    }
}

/// Waste item fields as submitted by a caller
#[derive(Debug, Clone)]
pub struct WasteItemCandidate {
    pub name: String,
    pub category: String,
    pub condition: String,
    pub owner_id: i64,
    pub image: Option<AssetUpload>,
    pub document: Option<AssetUpload>,
}

#[derive(Debug, Clone)]
pub struct ValidWasteItem {
    pub name: String,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub owner_id: i64,
    pub image: Option<AssetUpload>,
    pub document: Option<AssetUpload>,
}

/// Collection request fields as submitted by a caller
///
/// `status` is only checked when present; an absent status keeps the stored
/// value (or defaults to pending on create).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRequestCandidate {
    pub owner_id: i64,
    pub item_id: i64,
    pub status: Option<String>,
    pub pickup_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCollectionRequest {
    pub owner_id: i64,
    pub item_id: i64,
    pub status: Option<RequestStatus>,
    /// Unix milliseconds
    pub pickup_date: Option<i64>,
}

/// Column values written for a waste item once media is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteItemFields {
    pub name: String,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub owner_id: i64,
    /// Relative media paths
    pub image: Option<String>,
    pub document: Option<String>,
}

/// Column values written for a collection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRequestFields {
    pub owner_id: i64,
    pub item_id: i64,
    pub status: RequestStatus,
    pub pickup_date: Option<i64>,
}

/// Partial owner update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl OwnerPatch {
    pub fn merge_into(self, existing: &owner::Model) -> OwnerCandidate {
        OwnerCandidate {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            email: self.email.unwrap_or_else(|| existing.email.clone()),
            phone: self.phone.unwrap_or_else(|| existing.phone.clone()),
            address: self.address.unwrap_or_else(|| existing.address.clone()),
        }
    }
}

/// Partial waste item update
///
/// Absent uploads keep the stored media path.
#[derive(Debug, Clone, Default)]
pub struct WasteItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub owner_id: Option<i64>,
    pub image: Option<AssetUpload>,
    pub document: Option<AssetUpload>,
}

impl WasteItemPatch {
    pub fn merge_into(self, existing: &waste_item::Model) -> WasteItemCandidate {
        WasteItemCandidate {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            category: self
                .category
                .unwrap_or_else(|| existing.category.to_value()),
            condition: self
                .condition
                .unwrap_or_else(|| existing.condition.to_value()),
            owner_id: self.owner_id.unwrap_or(existing.owner_id),
            image: self.image,
            document: self.document,
        }
    }
}

/// Partial collection request update
///
/// The status check only runs when `status` is supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRequestPatch {
    pub owner_id: Option<i64>,
    pub item_id: Option<i64>,
    pub status: Option<String>,
    pub pickup_date: Option<String>,
}

impl CollectionRequestPatch {
    pub fn merge_into(self, existing: &collection_request::Model) -> CollectionRequestCandidate {
        CollectionRequestCandidate {
            owner_id: self.owner_id.unwrap_or(existing.owner_id),
            item_id: self.item_id.unwrap_or(existing.item_id),
            status: self.status,
            pickup_date: self
                .pickup_date
                .or_else(|| existing.pickup_date.map(format_millis)),
        }
    }
}
