//! Page request handed to paged queries of generated mappers.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One-based page number plus rows per page.
///
/// # Example
///
/// ```
/// use mapper_codegen::pagination::PageParam;
///
/// let page = PageParam::builder().page_num(3).build();
/// assert_eq!(page.page_size, 20);
/// assert_eq!(page.offset(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct PageParam {
    #[serde(default = "default_page_num")]
    #[builder(default = DEFAULT_PAGE_NUM)]
    pub page_num: u32,

    /// Rows per page
    #[serde(default = "default_page_size")]
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

fn default_page_num() -> u32 {
    DEFAULT_PAGE_NUM
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParam {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PageParam {
    /// Rows to skip before this page. Page 0 is treated as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_num.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum number of rows on this page
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageParam::default();
        assert_eq!(page.page_num, 1);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_offset() {
        let page = PageParam::builder().page_num(4).page_size(50).build();
        assert_eq!(page.offset(), 150);

        let page = PageParam::builder().page_num(0).build();
        assert_eq!(page.offset(), 0);

        let page = PageParam::builder().page_num(u32::MAX).page_size(u32::MAX).build();
        assert_eq!(page.offset(), u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let page: PageParam = toml::from_str("pageSize = 10").unwrap();
        assert_eq!(page, PageParam::builder().page_size(10).build());

        let page: PageParam = toml::from_str("").unwrap();
        assert_eq!(page, PageParam::default());
    }
}
