use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// `?page=2&page_size=50` query parameters, shared by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PaginationQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Server-enforced: defaults to [`DEFAULT_PAGE_SIZE`], never exceeds
    /// [`MAX_PAGE_SIZE`], never drops to zero.
    pub fn page_size(&self) -> u64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// One page of a list result, with navigation metadata.
///
/// `items` preserves the ordering of the underlying query and never holds
/// more than `page_size` entries. A page past the end is empty, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        let total_pages = total.div_ceil(page_size);
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Swap the items for an already re-shaped set, keeping the metadata.
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            items,
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }

    /// Re-shape the items while keeping the metadata intact.
    pub fn map<U>(mut self, f: impl FnMut(T) -> U) -> Page<U> {
        let items = std::mem::take(&mut self.items).into_iter().map(f).collect();
        self.with_items(items)
    }
}

/// Fetch one page of `query`, serializing each row with `serialize`.
///
/// Two round trips: a COUNT for the total, then the offset/limit fetch.
/// Offset pagination reflects the data at query time; no snapshot isolation.
pub async fn paginate<'db, C, E, T, F>(
    db: &'db C,
    query: Select<E>,
    pagination: &PaginationQuery,
    serialize: F,
) -> Result<Page<T>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'db,
    F: FnMut(E::Model) -> T,
{
    let page = pagination.page();
    let page_size = pagination.page_size();

    let paginator = query.paginate(db, page_size);
    let total = paginator.num_items().await?;
    let items = paginator
        .fetch_page(page - 1)
        .await?
        .into_iter()
        .map(serialize)
        .collect();

    Ok(Page::new(items, total, page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_and_clamping() {
        let q = PaginationQuery {
            page: None,
            page_size: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);

        let q = PaginationQuery {
            page: Some(0),
            page_size: Some(1000),
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), MAX_PAGE_SIZE);

        let q = PaginationQuery {
            page: Some(3),
            page_size: Some(0),
        };
        assert_eq!(q.page(), 3);
        assert_eq!(q.page_size(), 1);
    }

    #[test]
    fn total_pages_is_ceil_division() {
        assert_eq!(Page::new(vec![1, 2, 3], 3, 1, 20).total_pages, 1);
        assert_eq!(Page::<i32>::new(vec![], 0, 1, 20).total_pages, 0);
        assert_eq!(Page::new(vec![0; 20], 41, 1, 20).total_pages, 3);
        assert_eq!(Page::new(vec![0; 20], 40, 1, 20).total_pages, 2);
    }

    #[test]
    fn navigation_flags() {
        let first = Page::new(vec![0; 20], 41, 1, 20);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let last = Page::new(vec![0; 1], 41, 3, 20);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn page_past_the_end_is_empty_with_correct_metadata() {
        let past = Page::<i32>::new(vec![], 41, 9, 20);
        assert!(past.items.is_empty());
        assert_eq!(past.total, 41);
        assert_eq!(past.total_pages, 3);
        assert!(!past.has_next);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 10, 2, 3);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, 10);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_pages, 4);
    }
}
