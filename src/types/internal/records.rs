use crate::types::db::{collection_request, waste_item};

/// Waste item joined with the name of its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteItemRecord {
    pub item: waste_item::Model,
    pub owner_name: String,
}

/// Collection request joined with the names it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRequestRecord {
    pub request: collection_request::Model,
    pub owner_name: String,
    pub item_name: String,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Total number of rows matching the query
    pub count: u64,
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(self.page_size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            count: self.count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Rows removed by a cascading delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub owners: u64,
    pub waste_items: u64,
    pub collection_requests: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page { results: vec![1, 2], count: 21, page: 3, page_size: 10 };
        assert_eq!(page.total_pages(), 3);

        let empty: Page<i32> = Page { results: vec![], count: 0, page: 1, page_size: 10 };
        assert_eq!(empty.total_pages(), 0);
    }
}
