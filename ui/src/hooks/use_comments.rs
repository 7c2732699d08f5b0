use admin_core::CommentsApi;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to manage the comments list and its operations.
#[hook]
pub fn use_comments() -> ResourceHandle<CommentsApi> {
    use_resource(CommentsApi {
        client: get_api_client(),
    })
}
