use std::fmt::Write;

use crate::item::Item;

/// Case-sensitive substring match against the decimal form of an item's
/// value. An empty term matches everything.
#[derive(Debug)]
pub struct SearchFilter<'term> {
    term: &'term str,
    scratch: String,
}

impl<'term> SearchFilter<'term> {
    #[must_use]
    pub fn new(term: &'term str) -> Self {
        Self {
            term,
            scratch: String::with_capacity(10),
        }
    }

    pub fn matches(&mut self, item: &Item) -> bool {
        if self.term.is_empty() {
            return true;
        }
        self.scratch.clear();
        write!(self.scratch, "{}", item.value).is_ok() && self.scratch.contains(self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, SortKey};

    fn item(value: u32) -> Item {
        Item {
            id: ItemId::new(value),
            value,
            sort_key: SortKey::from_rank(value),
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let mut filter = SearchFilter::new("");
        assert!(filter.matches(&item(1)));
        assert!(filter.matches(&item(999_999)));
    }

    #[test]
    fn test_substring_anywhere() {
        let mut filter = SearchFilter::new("23");
        assert!(filter.matches(&item(23)));
        assert!(filter.matches(&item(1234)));
        assert!(filter.matches(&item(923)));
        assert!(!filter.matches(&item(32)));
        assert!(!filter.matches(&item(2)));
    }

    #[test]
    fn test_non_digit_term_matches_nothing() {
        let mut filter = SearchFilter::new("a");
        assert!(!filter.matches(&item(10)));
    }

    #[test]
    fn test_scratch_reused_between_calls() {
        let mut filter = SearchFilter::new("5");
        assert!(filter.matches(&item(15)));
        assert!(!filter.matches(&item(1)));
        assert!(filter.matches(&item(500)));
    }
}
