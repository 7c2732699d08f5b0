/// 1-based pagination over an in-memory list.
///
/// Page math is derived from the list length at each call, so a list that
/// shrinks underneath the pager (a deletion emptying the last page) clamps
/// the current page instead of pointing past the end. An empty list still
/// has one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
}

impl Pager {
    /// `page_size` and `initial_page` are clamped to at least 1; the upper
    /// bound is applied against the list length on access.
    pub fn new(initial_page: usize, page_size: usize) -> Self {
        Pager {
            current_page: initial_page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The current page clamped into `[1, total_pages]` for a list of
    /// `len` items.
    pub fn current_page(&self, len: usize) -> usize {
        self.current_page.min(self.total_pages(len))
    }

    /// Jump to page `n`, clamped into range.
    pub fn set_page(&mut self, n: usize, len: usize) {
        self.current_page = n.clamp(1, self.total_pages(len));
    }

    /// Re-apply the range clamp after the list length changed.
    pub fn reclamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(len));
    }

    /// The slice of `items` visible on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.current_page(items.len());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_formula() {
        let pager = Pager::new(1, 5);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(5), 1);
        assert_eq!(pager.total_pages(6), 2);
        assert_eq!(pager.total_pages(7), 2);
        assert_eq!(pager.total_pages(10), 2);
        assert_eq!(pager.total_pages(11), 3);
    }

    #[test]
    fn test_set_page_clamps_out_of_range_values() {
        let mut pager = Pager::new(1, 5);
        pager.set_page(0, 7);
        assert_eq!(pager.current_page(7), 1);
        pager.set_page(99, 7);
        assert_eq!(pager.current_page(7), 2);
        pager.set_page(2, 7);
        assert_eq!(pager.current_page(7), 2);
    }

    #[test]
    fn test_seven_items_at_page_size_five_split_five_two() {
        let items: Vec<u32> = (1..=7).collect();
        let mut pager = Pager::new(1, 5);

        assert_eq!(pager.total_pages(items.len()), 2);
        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5]);

        pager.set_page(2, items.len());
        assert_eq!(pager.slice(&items), &[6, 7]);
    }

    #[test]
    fn test_deleting_last_item_on_last_page_clamps_down() {
        // Page 2 holds a single item; deleting it must land us on page 1,
        // not an empty out-of-range page.
        let mut items: Vec<u32> = (1..=6).collect();
        let mut pager = Pager::new(1, 5);
        pager.set_page(2, items.len());
        assert_eq!(pager.slice(&items), &[6]);

        items.pop();
        pager.reclamp(items.len());
        assert_eq!(pager.current_page(items.len()), 1);
        assert_eq!(pager.slice(&items), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let pager = Pager::new(1, 5);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.current_page(0), 1);
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Pager::new(1, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(3), 3);
    }
}
