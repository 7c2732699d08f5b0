use std::cell::RefCell;
use std::rc::Rc;

use admin_core::{
    Identify, ResourceApi, ResourceEvent, ResourceState, UpdatableApi,
    run_create, run_delete, run_fetch, run_list, run_update,
};
use payloads::ClientError;
use yew::prelude::*;

/// Newtype so the framework-free state machine can sit behind a yew
/// reducer handle.
struct ResourceReducer<T: Identify>(ResourceState<T>);

impl<T: Identify + Clone> Reducible for ResourceReducer<T> {
    type Action = ResourceEvent<T>;

    fn reduce(self: Rc<Self>, action: ResourceEvent<T>) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(ResourceReducer(state))
    }
}

/// What a page gets back from [`use_resource`]: read accessors over the
/// current state plus the operations, each a thin wrapper that dispatches
/// the same events the headless store applies.
pub struct ResourceHandle<A: ResourceApi> {
    api: Rc<A>,
    state: UseReducerHandle<ResourceReducer<A::Item>>,
    /// Cleared when the owning component unmounts; a response landing
    /// after that is dropped instead of dispatched.
    alive: Rc<RefCell<bool>>,
}

impl<A: ResourceApi> Clone for ResourceHandle<A> {
    fn clone(&self) -> Self {
        ResourceHandle {
            api: self.api.clone(),
            state: self.state.clone(),
            alive: self.alive.clone(),
        }
    }
}

impl<A: ResourceApi + 'static> ResourceHandle<A> {
    pub fn items(&self) -> &[A::Item] {
        &self.state.0.items
    }

    pub fn selected(&self) -> Option<&A::Item> {
        self.state.0.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.0.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.0.error.as_deref()
    }

    fn dispatch(&self, event: ResourceEvent<A::Item>) {
        if *self.alive.borrow() {
            self.state.dispatch(event);
        }
    }

    /// Fetch the full list. Pages call this from a mount effect; the hook
    /// never fetches on its own.
    pub fn load(&self) {
        self.dispatch(ResourceEvent::OpStarted);
        let handle = self.clone();
        yew::platform::spawn_local(async move {
            let event = run_list(handle.api.as_ref()).await;
            handle.dispatch(event);
        });
    }

    /// Fetch one item into `selected`.
    pub fn fetch_selected(&self, id: <A::Item as Identify>::Id) {
        self.dispatch(ResourceEvent::OpStarted);
        let handle = self.clone();
        yew::platform::spawn_local(async move {
            let event = run_fetch(handle.api.as_ref(), &id).await;
            handle.dispatch(event);
        });
    }

    /// Post a draft. On success the canonical item the backend returned
    /// lands in the list; the raw result is also handed back so the modal
    /// can stay open on failure.
    pub async fn create(
        &self,
        draft: &A::Draft,
    ) -> Result<A::Item, ClientError> {
        self.dispatch(ResourceEvent::OpStarted);
        let (result, event) = run_create(self.api.as_ref(), draft).await;
        self.dispatch(event);
        result
    }

    /// Delete remotely, then drop the matching row from the list.
    pub fn delete(&self, id: <A::Item as Identify>::Id) {
        self.dispatch(ResourceEvent::OpStarted);
        let handle = self.clone();
        yew::platform::spawn_local(async move {
            let event = run_delete(handle.api.as_ref(), &id).await;
            handle.dispatch(event);
        });
    }

    /// Mark a row the page already holds as the one being edited.
    pub fn select(&self, item: A::Item) {
        self.dispatch(ResourceEvent::Selected(item));
    }

    pub fn clear_selected(&self) {
        self.dispatch(ResourceEvent::SelectionCleared);
    }

    pub fn clear_error(&self) {
        self.dispatch(ResourceEvent::ErrorCleared);
    }
}

impl<A: UpdatableApi + 'static> ResourceHandle<A> {
    /// Put a patch. On success the local list is left alone; the caller
    /// reloads it. The raw result is handed back for the modal.
    pub async fn update(
        &self,
        id: &<A::Item as Identify>::Id,
        patch: &A::Patch,
    ) -> Result<A::Item, ClientError> {
        self.dispatch(ResourceEvent::OpStarted);
        let (result, event) = run_update(self.api.as_ref(), id, patch).await;
        self.dispatch(event);
        result
    }
}

/// Hook to manage one REST resource: list, selected item, shared
/// loading flag, and the most recent error as a display string.
///
/// All five entity pages are instances of this over their
/// [`ResourceApi`] adapter; the per-entity hooks in this module just
/// supply the adapter.
#[hook]
pub fn use_resource<A>(api: A) -> ResourceHandle<A>
where
    A: ResourceApi + 'static,
{
    let state = use_reducer(|| ResourceReducer(ResourceState::default()));
    let api = use_memo((), move |_| api);
    let alive = use_mut_ref(|| true);

    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    ResourceHandle { api, state, alive }
}
