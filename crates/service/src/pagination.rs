//! Pagination utilities for service layer
//!
//! Clients address pages 1-based; repositories fetch by zero-based page index.

use crate::errors::ServiceError;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index; 0 is read as the first page
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Convert to `(page_index, per_page)`. The page size is passed through
    /// as requested; sizes outside `1..=max_per_page` are a validation error.
    pub fn window(self, max_per_page: u32) -> Result<(u64, u64), ServiceError> {
        if self.per_page == 0 || self.per_page > max_per_page {
            return Err(ServiceError::Validation(format!(
                "size must be between 1 and {max_per_page}"
            )));
        }
        let page = self.page.max(1);
        Ok((u64::from(page - 1), u64::from(self.per_page)))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 15 } }
}
