use crate::types::db::ItemCategory;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound a client may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Normalize client supplied values: page defaults to 1, page size to
    /// 10, and page size is capped at 100.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let page_size = page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self { page, page_size }
    }

    /// 0-based page index for the SeaORM paginator
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Sortable waste item columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteItemSortField {
    CreatedAt,
    UpdatedAt,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WasteItemOrdering {
    pub field: WasteItemSortField,
    pub descending: bool,
}

impl WasteItemOrdering {
    /// Parse `name`, `-created_at`, ... Unknown fields fall back to newest first.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };

        let (descending, field) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        let field = match field {
            "created_at" => WasteItemSortField::CreatedAt,
            "updated_at" => WasteItemSortField::UpdatedAt,
            "name" => WasteItemSortField::Name,
            _ => return Self::default(),
        };

        Self { field, descending }
    }
}

impl Default for WasteItemOrdering {
    fn default() -> Self {
        Self {
            field: WasteItemSortField::CreatedAt,
            descending: true,
        }
    }
}

/// Raw listing parameters for waste items, as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasteItemFilter {
    pub category: Option<String>,
    pub owner_id: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Waste item listing parameters after parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WasteItemQuery {
    pub category: Option<ItemCategory>,
    pub owner_id: Option<i64>,
    pub search_terms: Vec<String>,
    pub ordering: WasteItemOrdering,
}

/// Split a search string into terms on whitespace and commas
pub fn search_terms(search: Option<&str>) -> Vec<String> {
    search
        .unwrap_or_default()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
