//! Paginated list payloads.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint: `{list, total, page, pageSize}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            total: 0,
            page: 0,
            page_size: 0,
        }
    }
}

impl<T> Page<T> {
    /// Number of pages implied by `total` and `page_size`.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        ((self.total as u64).div_ceil(self.page_size as u64)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page: Page<u32> = Page {
            list: vec![],
            total: 21,
            page: 1,
            page_size: 10,
        };
        assert_eq!(page.total_pages(), 3);

        let empty: Page<u32> = Page::default();
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_null_list_defaults_empty() {
        // gorm serializes an empty result set as null
        let page: Page<u32> =
            serde_json::from_str(r#"{"list": null, "total": 0, "page": 1, "pageSize": 10}"#)
                .unwrap();
        assert!(page.list.is_empty());
    }
}
