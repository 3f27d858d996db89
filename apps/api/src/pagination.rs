use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// `?page=&limit=` query parameters. Out-of-range values are clamped.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, query: &PageQuery, total: i64) -> Self {
        let limit = query.limit();
        Paginated {
            data,
            pagination: Pagination {
                page: query.page(),
                limit,
                total,
                pages: (total + limit - 1) / limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let q = PageQuery::default();
        assert_eq!((q.page(), q.limit(), q.offset()), (1, 10, 0));

        let q = PageQuery {
            page: Some(3),
            limit: Some(500),
        };
        assert_eq!((q.page(), q.limit(), q.offset()), (3, 100, 200));

        let q = PageQuery {
            page: Some(0),
            limit: Some(0),
        };
        assert_eq!((q.page(), q.limit()), (1, 1));
    }

    #[test]
    fn test_huge_page_saturates_offset() {
        let q = PageQuery {
            page: Some(i64::MAX),
            limit: Some(100),
        };
        assert_eq!(q.offset(), i64::MAX);

        let q = PageQuery {
            page: Some(i64::MIN),
            limit: Some(100),
        };
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let q = PageQuery::default();
        assert_eq!(Paginated::new(Vec::<u8>::new(), &q, 0).pagination.pages, 0);
        assert_eq!(Paginated::new(Vec::<u8>::new(), &q, 10).pagination.pages, 1);
        assert_eq!(Paginated::new(Vec::<u8>::new(), &q, 11).pagination.pages, 2);
    }
}
