use payloads::ClientError;

use crate::api::{
    ResourceApi, UpdatableApi, run_create, run_delete, run_fetch, run_list,
    run_update,
};
use crate::resource::{Identify, ResourceEvent, ResourceState};

/// Headless driver for one REST resource: owns the state and runs
/// operations against the backend adapter.
///
/// This is the form the integration tests drive directly; the Yew hook
/// applies the same [`ResourceEvent`] transitions through a reducer handle
/// instead of `&mut self`.
pub struct ResourceStore<A: ResourceApi> {
    api: A,
    state: ResourceState<A::Item>,
}

impl<A: ResourceApi> ResourceStore<A> {
    pub fn new(api: A) -> Self {
        ResourceStore {
            api,
            state: ResourceState::default(),
        }
    }

    pub fn state(&self) -> &ResourceState<A::Item> {
        &self.state
    }

    pub fn items(&self) -> &[A::Item] {
        &self.state.items
    }

    pub fn selected(&self) -> Option<&A::Item> {
        self.state.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Fetch the full list, replacing `items`. Failures stay local: the
    /// error lands in state, nothing is raised.
    pub async fn load(&mut self) {
        self.state.apply(ResourceEvent::OpStarted);
        let event = run_list(&self.api).await;
        self.state.apply(event);
    }

    /// Fetch one item into `selected`.
    pub async fn fetch_selected(&mut self, id: &<A::Item as Identify>::Id) {
        self.state.apply(ResourceEvent::OpStarted);
        let event = run_fetch(&self.api, id).await;
        self.state.apply(event);
    }

    /// Post a draft. On success the canonical item the backend returned is
    /// appended locally; the error is also handed back so a modal caller
    /// can stay open on failure.
    pub async fn create(
        &mut self,
        draft: &A::Draft,
    ) -> Result<A::Item, ClientError> {
        self.state.apply(ResourceEvent::OpStarted);
        let (result, event) = run_create(&self.api, draft).await;
        self.state.apply(event);
        result
    }

    /// Delete remotely, then drop the matching row. The remote call is
    /// the source of truth: a success for an id we never held leaves the
    /// list as it was. Failures stay local, matching the page contract.
    pub async fn delete(&mut self, id: &<A::Item as Identify>::Id) {
        self.state.apply(ResourceEvent::OpStarted);
        let event = run_delete(&self.api, id).await;
        self.state.apply(event);
    }

    /// Mark a row the caller already holds as the one being edited.
    pub fn select(&mut self, item: A::Item) {
        self.state.apply(ResourceEvent::Selected(item));
    }

    /// Clear a surfaced error (the UI does this on a timer).
    pub fn clear_error(&mut self) {
        self.state.apply(ResourceEvent::ErrorCleared);
    }

    pub fn clear_selected(&mut self) {
        self.state.apply(ResourceEvent::SelectionCleared);
    }
}

impl<A: UpdatableApi> ResourceStore<A> {
    /// Put a patch. On success the local list is left alone; the caller
    /// is responsible for reloading it. The error is handed back for the
    /// modal caller.
    pub async fn update(
        &mut self,
        id: &<A::Item as Identify>::Id,
        patch: &A::Patch,
    ) -> Result<A::Item, ClientError> {
        self.state.apply(ResourceEvent::OpStarted);
        let (result, event) = run_update(&self.api, id, patch).await;
        self.state.apply(event);
        result
    }
}
