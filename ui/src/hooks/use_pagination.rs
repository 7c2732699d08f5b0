use admin_core::Pager;
use yew::prelude::*;

/// Pager state plus the list length it was last asked about.
#[derive(Clone)]
pub struct PaginationHandle {
    pager: UseStateHandle<Pager>,
    len: usize,
}

impl PaginationHandle {
    pub fn current_page(&self) -> usize {
        self.pager.current_page(self.len)
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.len)
    }

    pub fn set_page(&self, n: usize) {
        let mut next = (*self.pager).clone();
        next.set_page(n, self.len);
        self.pager.set(next);
    }

    /// The rows visible on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.pager.slice(items)
    }
}

/// Hook to page a list client-side. Reclamps whenever the list length
/// changes, so a deletion that empties the last page lands on the
/// previous one instead of past the end.
#[hook]
pub fn use_pagination(page_size: usize, len: usize) -> PaginationHandle {
    let pager = use_state(|| Pager::new(1, page_size));

    {
        let pager = pager.clone();
        use_effect_with(len, move |len| {
            let mut next = (*pager).clone();
            next.reclamp(*len);
            if next != *pager {
                pager.set(next);
            }
        });
    }

    PaginationHandle { pager, len }
}
