//! Pagination - collection windows and paged results
//!
//! All collection endpoints accept `?page=&perPage=` and return a
//! [`Paged`] envelope.

use serde::{Deserialize, Serialize};

/// Default collection page size.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Upper bound a client may request per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A sanitized collection window (1-based page number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
    size: u32,
}

impl Page {
    /// Build a page from raw query values, clamping out-of-range input.
    pub fn new(number: Option<u32>, size: Option<u32>) -> Self {
        let number = number.unwrap_or(1).max(1);
        let size = size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Self { number, size }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.number - 1) * i64::from(self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Query-string shape for collection endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<PageQuery> for Page {
    fn from(q: PageQuery) -> Self {
        Page::new(q.page, q.per_page)
    }
}

/// One page of a collection plus the collection total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: i64, page: Page) -> Self {
        Self {
            items,
            total,
            page: page.number(),
            per_page: page.size(),
        }
    }

    /// Map the items, keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Page::default();
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_clamping() {
        let page = Page::new(Some(0), Some(0));
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), 1);

        let page = Page::new(None, Some(10_000));
        assert_eq!(page.size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset() {
        let page = Page::new(Some(3), Some(20));
        assert_eq!(page.limit(), 20);
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn test_query_parsing() {
        let q: PageQuery = serde_json::from_str(r#"{"page":2,"perPage":10}"#).unwrap();
        let page = Page::from(q);
        assert_eq!(page.number(), 2);
        assert_eq!(page.size(), 10);
    }

    #[test]
    fn test_paged_envelope_shape() {
        let paged = Paged::new(vec![1, 2, 3], 42, Page::new(Some(2), Some(3)));
        let json = serde_json::to_string(&paged).unwrap();
        assert!(json.contains(r#""items":[1,2,3]"#));
        assert!(json.contains(r#""total":42"#));
        assert!(json.contains(r#""page":2"#));
        assert!(json.contains(r#""perPage":3"#));
    }

    #[test]
    fn test_paged_map() {
        let paged = Paged::new(vec![1, 2], 2, Page::default()).map(|n| n * 10);
        assert_eq!(paged.items, vec![10, 20]);
        assert_eq!(paged.total, 2);
    }
}
