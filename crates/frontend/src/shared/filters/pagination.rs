use super::value::FilterSet;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";

/// 1-based page position carried in the query string like any other filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Read `page`/`limit` from the filters, falling back to page 1
    pub fn from_filters(filters: &FilterSet, default_limit: u32) -> Self {
        let page = filters
            .integer(PAGE_KEY)
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(1);
        let limit = filters
            .integer(LIMIT_KEY)
            .and_then(|l| u32::try_from(l).ok())
            .unwrap_or(default_limit);
        Self::new(page, limit)
    }

    /// Rows to skip; saturates instead of overflowing on absurd page numbers
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_count: usize) -> u32 {
        let limit = self.limit as usize;
        let pages = total_count.div_ceil(limit).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn to_filters(&self) -> FilterSet {
        FilterSet::new()
            .with(PAGE_KEY, self.page)
            .with(LIMIT_KEY, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_query() {
        let filters = FilterSet::new().with("page", "3").with("limit", "14");
        let p = Pagination::from_filters(&filters, 20);
        assert_eq!(p, Pagination::new(3, 14));
        assert_eq!(p.offset(), 28);
    }

    #[test]
    fn test_defaults_and_bounds() {
        let p = Pagination::from_filters(&FilterSet::new().with("page", "-2"), 20);
        assert_eq!(p, Pagination::new(1, 20));
        assert_eq!(p.offset(), 0);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(41), 3);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let filters = FilterSet::new().with("page", "4294967295");
        let p = Pagination::from_filters(&filters, 24);
        assert_eq!(p.page, u32::MAX);
        assert_eq!(p.offset(), u32::MAX);
    }
}
