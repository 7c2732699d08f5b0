use admin_core::OrdersApi;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to manage the orders list and its operations.
#[hook]
pub fn use_orders() -> ResourceHandle<OrdersApi> {
    use_resource(OrdersApi {
        client: get_api_client(),
    })
}
