//! Search-filtered, paginated views over the item store.
//!
//! Every call walks the store's ordered index from scratch; no filtered view
//! is kept between requests because keys can change in between.

mod filter;
mod page;

pub use filter::SearchFilter;
pub use page::PageRequest;

use crate::item::{Item, ItemId, ItemStore};
use crate::metrics::OperationTimer;

/// Matching items in display order, after dropping `skip` and taking at most
/// `limit`.
#[must_use]
pub fn query(store: &ItemStore, search: &str, skip: usize, limit: usize) -> Vec<Item> {
    let _timer = OperationTimer::new("query");
    let mut filter = SearchFilter::new(search);
    store
        .list_all()
        .filter(|item| filter.matches(item))
        .skip(skip)
        .take(limit)
        .copied()
        .collect()
}

/// Run a parsed page request.
#[must_use]
pub fn query_page(store: &ItemStore, page: &PageRequest) -> Vec<Item> {
    query(store, &page.search, page.skip, page.limit)
}

/// The complete filtered ordering as ids, as shown to a client searching for
/// `search`.
#[must_use]
pub fn filtered_ids(store: &ItemStore, search: &str) -> Vec<ItemId> {
    let mut filter = SearchFilter::new(search);
    store
        .list_all()
        .filter(|item| filter.matches(item))
        .map(|item| item.id)
        .collect()
}

/// Number of items matching `search`.
#[must_use]
pub fn total_matches(store: &ItemStore, search: &str) -> usize {
    let mut filter = SearchFilter::new(search);
    store.list_all().filter(|item| filter.matches(item)).count()
}
