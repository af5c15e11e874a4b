use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("page number must be at least 1, got {0}")]
    InvalidPageNumber(u32),
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page holds {items} items but {page_size} were requested")]
    TooManyItems { items: usize, page_size: u32 },
    #[error("current page {current_page} is past the last page {pages_count}")]
    PageOutOfRange { current_page: u32, pages_count: u32 },
}

/// Pagination plus free-form filter fields for one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFilters {
    page_number: u32,
    page_size: u32,
    extra: BTreeMap<String, String>,
}

impl BaseFilters {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub fn new(page_number: u32, page_size: u32) -> Result<Self, FilterError> {
        if page_number < 1 {
            return Err(FilterError::InvalidPageNumber(page_number));
        }
        if page_size < 1 {
            return Err(FilterError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_number,
            page_size,
            extra: BTreeMap::new(),
        })
    }

    pub fn first_page() -> Self {
        Self {
            page_number: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        self.with_filter("search", search)
    }

    /// Adds an extra field. Empty values are dropped so they never reach the query string.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.extra.insert(key.into(), value);
        }
        self
    }

    pub fn next_page(&self) -> Self {
        Self {
            page_number: self.page_number.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        pairs.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

impl Default for BaseFilters {
    fn default() -> Self {
        Self::first_page()
    }
}

/// One page of a resource list as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pages_count: u32,
    pub current_page: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

impl<T> PaginatedResponse<T> {
    /// Checks the page against the request that produced it.
    pub fn validate(&self, filters: &BaseFilters) -> Result<(), PaginationError> {
        if self.items.len() > filters.page_size() as usize {
            return Err(PaginationError::TooManyItems {
                items: self.items.len(),
                page_size: filters.page_size(),
            });
        }
        if self.pages_count > 0 && self.current_page > self.pages_count {
            return Err(PaginationError::PageOutOfRange {
                current_page: self.current_page,
                pages_count: self.pages_count,
            });
        }
        Ok(())
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.pages_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleObjectResponse<T> {
    pub data: T,
    #[serde(rename = "type", default)]
    pub kind: String,
}
