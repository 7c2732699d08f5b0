use admin_core::ProductsApi;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to manage the products list and its operations.
#[hook]
pub fn use_products() -> ResourceHandle<ProductsApi> {
    use_resource(ProductsApi {
        client: get_api_client(),
    })
}
