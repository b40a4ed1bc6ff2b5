use serde::Deserialize;
use utoipa::ToSchema;

use crate::response::Meta;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }

    /// Cut one page out of an already filtered listing.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, Meta) {
        let (page, per_page, offset) = self.normalize();
        let total = items.len() as i64;
        let page_items = items
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .collect();
        (page_items, Meta::new(page, per_page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_bounds() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (1, 100, 0));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        let (page, per_page, offset) = p.normalize();
        assert_eq!((page, per_page), (i64::MAX, 100));
        assert_eq!(offset, i64::MAX);

        let (items, meta) = p.apply(vec![1, 2, 3]);
        assert!(items.is_empty());
        assert_eq!(meta.total, Some(3));
    }

    #[test]
    fn apply_slices_and_counts() {
        let p = Pagination {
            page: Some(2),
            per_page: Some(2),
        };
        let (items, meta) = p.apply(vec![1, 2, 3, 4, 5]);
        assert_eq!(items, vec![3, 4]);
        assert_eq!(meta.total, Some(5));
        assert_eq!(meta.page, Some(2));
    }
}
