use admin_core::CategoriesApi;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to manage the categories list and its operations.
#[hook]
pub fn use_categories() -> ResourceHandle<CategoriesApi> {
    use_resource(CategoriesApi {
        client: get_api_client(),
    })
}
