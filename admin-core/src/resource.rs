use std::fmt::Display;
use std::time::Duration;

use payloads::{
    Category, CategoryId, ClientError, Comment, CommentId, Order, OrderId,
    Product, ProductId, User, UserId,
};

/// How long a surfaced error stays visible before the page dismisses it.
pub const ERROR_AUTO_CLEAR: Duration = Duration::from_millis(3000);

/// Types carrying a backend-assigned identifier.
pub trait Identify {
    type Id: Clone + PartialEq + Display;

    fn id(&self) -> &Self::Id;
}

impl Identify for Comment {
    type Id = CommentId;

    fn id(&self) -> &CommentId {
        &self.id
    }
}

impl Identify for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl Identify for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Identify for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Identify for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// Client-side view of one REST resource: the fetched list, the item
/// selected for editing, and the shared loading/error indicators.
///
/// One instance is owned by exactly one store or hook; nothing else
/// mutates it. All mutation goes through [`ResourceState::apply`] so the
/// headless store and the reducer-backed UI hook share identical
/// transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub selected: Option<T>,
    /// One flag across all operations of this instance. Any finishing
    /// operation clears it, even while another is still in flight, so
    /// overlapping operations can briefly report not-loading. That
    /// coarseness is intentional and pinned by tests.
    pub is_loading: bool,
    /// Display string for the most recent failure. Cleared by the next
    /// successful operation, or by the page after [`ERROR_AUTO_CLEAR`].
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState {
            items: Vec::new(),
            selected: None,
            is_loading: false,
            error: None,
        }
    }
}

/// One state transition. Failure payloads are already display strings,
/// produced by [`display_error`] at the call site where the operation kind
/// is known.
#[derive(Debug, Clone)]
pub enum ResourceEvent<T: Identify> {
    /// An operation left for the backend.
    OpStarted,
    ListLoaded(Result<Vec<T>, String>),
    ItemLoaded(Result<T, String>),
    Created(Result<T, String>),
    /// Update success carries nothing: the list is refreshed by the
    /// caller, never patched in place.
    Updated(Result<(), String>),
    Deleted(T::Id, Result<(), String>),
    /// A row the page already holds was picked for editing. Not an
    /// operation finishing, so loading and error are untouched.
    Selected(T),
    SelectionCleared,
    ErrorCleared,
}

impl<T: Identify> ResourceState<T> {
    pub fn apply(&mut self, event: ResourceEvent<T>) {
        match event {
            ResourceEvent::OpStarted => self.is_loading = true,
            ResourceEvent::ListLoaded(Ok(items)) => {
                self.items = dedupe_by_id(items);
                self.finish_ok();
            }
            ResourceEvent::ListLoaded(Err(message)) => self.fail(message),
            ResourceEvent::ItemLoaded(Ok(item)) => {
                self.selected = Some(item);
                self.finish_ok();
            }
            ResourceEvent::ItemLoaded(Err(message)) => self.fail(message),
            ResourceEvent::Created(Ok(item)) => {
                // Append at the end; if the backend handed back an id we
                // already hold, replace that row instead of duplicating it.
                match self.items.iter_mut().find(|x| x.id() == item.id()) {
                    Some(slot) => *slot = item,
                    None => self.items.push(item),
                }
                self.finish_ok();
            }
            ResourceEvent::Created(Err(message)) => self.fail(message),
            ResourceEvent::Updated(Ok(())) => self.finish_ok(),
            ResourceEvent::Updated(Err(message)) => self.fail(message),
            ResourceEvent::Deleted(id, Ok(())) => {
                self.items.retain(|x| x.id() != &id);
                self.finish_ok();
            }
            ResourceEvent::Deleted(_, Err(message)) => self.fail(message),
            ResourceEvent::Selected(item) => self.selected = Some(item),
            ResourceEvent::SelectionCleared => self.selected = None,
            ResourceEvent::ErrorCleared => self.error = None,
        }
    }

    fn finish_ok(&mut self) {
        self.is_loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }
}

/// The backend's structured `message` when it sent one, otherwise the
/// kind-specific fallback ("Error fetching comments", ...).
pub fn display_error(err: &ClientError, fallback: &str) -> String {
    match err.api_message() {
        Some(message) => message.to_string(),
        None => fallback.to_string(),
    }
}

fn dedupe_by_id<T: Identify>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.iter().any(|x| x.id() == item.id()) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId(id.to_string()),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_list_load_replaces_items_and_clears_error() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Err("boom".to_string())));
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.apply(ResourceEvent::OpStarted);
        assert!(state.is_loading);
        state.apply(ResourceEvent::ListLoaded(Ok(vec![
            category("a", "Books"),
            category("b", "Games"),
        ])));
        assert_eq!(state.items.len(), 2);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_list_load_dedupes_by_id_first_wins() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![
            category("a", "Books"),
            category("a", "Shadow"),
            category("b", "Games"),
        ])));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].name, "Books");
    }

    #[test]
    fn test_create_appends_exactly_once() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![category(
            "a", "Books",
        )])));
        state.apply(ResourceEvent::Created(Ok(category("b", "Games"))));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].id, CategoryId("b".to_string()));
        let occurrences = state
            .items
            .iter()
            .filter(|c| c.id == CategoryId("b".to_string()))
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_create_with_known_id_replaces_in_place() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![
            category("a", "Books"),
            category("b", "Games"),
        ])));
        state.apply(ResourceEvent::Created(Ok(category("a", "Updated"))));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].name, "Updated");
    }

    #[test]
    fn test_delete_removes_matching_item() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![
            category("a", "Books"),
            category("b", "Games"),
        ])));
        state.apply(ResourceEvent::Deleted(
            CategoryId("a".to_string()),
            Ok(()),
        ));

        assert_eq!(state.items.len(), 1);
        assert!(!state.items.iter().any(|c| c.id.0 == "a"));
    }

    #[test]
    fn test_delete_of_absent_id_is_a_noop_on_success() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![category(
            "a", "Books",
        )])));
        state.apply(ResourceEvent::Deleted(
            CategoryId("ghost".to_string()),
            Ok(()),
        ));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_delete_leaves_items_unchanged() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![category(
            "a", "Books",
        )])));
        state.apply(ResourceEvent::Deleted(
            CategoryId("a".to_string()),
            Err("no such category".to_string()),
        ));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("no such category"));
    }

    #[test]
    fn test_update_success_does_not_patch_items() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Ok(vec![category(
            "a", "Books",
        )])));
        state.apply(ResourceEvent::Updated(Ok(())));

        // The caller reloads the list; nothing changes locally.
        assert_eq!(state.items[0].name, "Books");
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_loading_flag_clears_when_first_operation_finishes() {
        // Two overlapping operations share one flag: the first to finish
        // clears it even though the second is still pending.
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::OpStarted);
        state.apply(ResourceEvent::OpStarted);
        state.apply(ResourceEvent::Deleted(
            CategoryId("a".to_string()),
            Ok(()),
        ));

        assert!(!state.is_loading);
    }

    #[test]
    fn test_item_load_sets_selected() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ItemLoaded(Ok(category("a", "Books"))));
        assert_eq!(state.selected.as_ref().map(|c| c.name.as_str()), Some("Books"));

        state.apply(ResourceEvent::SelectionCleared);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_select_keeps_loading_and_error_untouched() {
        let mut state = ResourceState::<Category>::default();
        state.apply(ResourceEvent::ListLoaded(Err("boom".to_string())));
        state.apply(ResourceEvent::OpStarted);
        state.apply(ResourceEvent::Selected(category("a", "Books")));

        assert_eq!(
            state.selected.as_ref().map(|c| c.name.as_str()),
            Some("Books")
        );
        assert!(state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }
}
