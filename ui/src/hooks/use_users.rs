use admin_core::UsersApi;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to manage the users list and its operations.
#[hook]
pub fn use_users() -> ResourceHandle<UsersApi> {
    use_resource(UsersApi {
        client: get_api_client(),
    })
}
