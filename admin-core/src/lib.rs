//! State layer for the admin console, kept free of UI framework types so
//! every transition can be exercised from plain tests.
//!
//! The pieces mirror what each entity page needs: a [`resource`] state
//! machine for list/selected/loading/error bookkeeping, [`api`] adapters
//! atop the shared HTTP client, a headless [`store`] driver, [`pagination`],
//! per-entity form drafts in [`form`], and cross-entity [`lookup`] helpers.

pub mod api;
pub mod form;
pub mod lookup;
pub mod pagination;
pub mod resource;
pub mod store;

pub use api::{
    CategoriesApi, CommentsApi, OrdersApi, ProductsApi, ResourceApi,
    UpdatableApi, UsersApi, run_create, run_delete, run_fetch, run_list,
    run_update,
};
pub use form::{FormError, FormMode};
pub use pagination::Pager;
pub use resource::{
    ERROR_AUTO_CLEAR, Identify, ResourceEvent, ResourceState,
};
pub use store::ResourceStore;
