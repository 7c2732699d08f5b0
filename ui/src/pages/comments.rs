use admin_core::form::{CommentForm, FormMode};
use admin_core::lookup;
use jiff::Timestamp;
use payloads::{Comment, CommentId};
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, ErrorBanner, Loader, Modal, PaginationControls,
    TimestampDisplay,
};
use crate::hooks::{
    use_comments, use_pagination, use_products, use_title, use_users,
};

const PAGE_SIZE: usize = 5;

/// Words of comment text shown in the table before cutting off.
const PREVIEW_WORDS: usize = 5;

#[function_component]
pub fn CommentsPage() -> Html {
    use_title("Comments");

    let comments = use_comments();
    // Author and product names for the table and the form selects.
    let users = use_users();
    let products = use_products();
    let form = use_state(|| FormMode::<CommentId, CommentForm>::Closed);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Comment>);
    let pagination = use_pagination(PAGE_SIZE, comments.items().len());

    {
        let comments = comments.clone();
        let users = users.clone();
        let products = products.clone();
        use_effect_with((), move |_| {
            comments.load();
            users.load();
            products.load();
        });
    }

    let on_open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.open_create(CommentForm::default());
            form.set(next);
            form_error.set(None);
        })
    };

    let on_close_form = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            next.close();
            form.set(next);
        })
    };

    let on_text_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.text = input.value();
            }
            form.set(next);
        })
    };

    let on_user_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.user_id = select.value();
            }
            form.set(next);
        })
    };

    let on_product_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.product_id = select.value();
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let comments = comments.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(draft) = form.draft() else { return };
            let request = match draft.to_request(Timestamp::now()) {
                Ok(request) => request,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);

            let form = form.clone();
            let comments = comments.clone();
            yew::platform::spawn_local(async move {
                let outcome = comments.create(&request).await;
                let mut next = (*form).clone();
                next.resolve_submit(&outcome);
                form.set(next);
            });
        })
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let comments = comments.clone();
        Callback::from(move |_: ()| {
            if let Some(comment) = &*pending_delete {
                comments.delete(comment.id.clone());
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_error = {
        let comments = comments.clone();
        Callback::from(move |_: ()| comments.clear_error())
    };

    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |page: usize| pagination.set_page(page))
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                       disabled:opacity-50 disabled:cursor-not-allowed";
    let label_class =
        "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

    let modal = if let Some(draft) = form.draft() {
        html! {
            <Modal on_close={on_close_form.clone()}>
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                    {"Create comment"}
                </h3>

                if let Some(message) = &*form_error {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                        <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class={label_class}>{"Text *"}</label>
                        <textarea
                            value={draft.text.clone()}
                            oninput={on_text_input}
                            disabled={comments.is_loading()}
                            placeholder="Write the comment"
                            rows="3"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label class={label_class}>{"User *"}</label>
                        <select
                            value={draft.user_id.clone()}
                            onchange={on_user_change}
                            disabled={comments.is_loading()}
                            class={input_class}
                        >
                            <option value="" selected={draft.user_id.is_empty()}>
                                {"Select a user"}
                            </option>
                            {users.items().iter().map(|user| html! {
                                <option
                                    value={user.id.to_string()}
                                    selected={draft.user_id == user.id.to_string()}
                                >
                                    {user.display_name()}
                                </option>
                            }).collect::<Html>()}
                        </select>
                    </div>

                    <div>
                        <label class={label_class}>{"Product *"}</label>
                        <select
                            value={draft.product_id.clone()}
                            onchange={on_product_change}
                            disabled={comments.is_loading()}
                            class={input_class}
                        >
                            <option value="" selected={draft.product_id.is_empty()}>
                                {"Select a product"}
                            </option>
                            {products.items().iter().map(|product| html! {
                                <option
                                    value={product.id.to_string()}
                                    selected={draft.product_id == product.id.to_string()}
                                >
                                    {&product.name}
                                </option>
                            }).collect::<Html>()}
                        </select>
                    </div>

                    <div class="flex gap-3 pt-4">
                        <button
                            type="button"
                            onclick={on_close_form.reform(|_| ())}
                            disabled={comments.is_loading()}
                            class="flex-1 py-2 px-4 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm text-sm font-medium text-neutral-700 dark:text-neutral-300
                                   bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={comments.is_loading()}
                            class="flex-1 py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {if comments.is_loading() { "Creating..." } else { "Create comment" }}
                        </button>
                    </div>
                </form>
            </Modal>
        }
    } else {
        html! {}
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Comments"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"What customers say about products"}
                    </p>
                </div>
                <button
                    onclick={on_open_create}
                    disabled={comments.is_loading()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"New Comment"}
                </button>
            </div>

            if let Some(error) = comments.error() {
                <ErrorBanner
                    message={error.to_string()}
                    on_dismiss={on_dismiss_error.clone()}
                />
            }

            if comments.is_loading() {
                <Loader label="Loading comments..." />
            } else if comments.items().is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"No comments found."}</p>
                </div>
            } else {
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-x-auto">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead>
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Text"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"User"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Product"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Posted"}
                                </th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                            {pagination.slice(comments.items()).iter().map(|comment| {
                                let on_request_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let comment = comment.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(comment.clone()));
                                    })
                                };
                                html! {
                                    <tr key={comment.id.to_string()}>
                                        <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                            {lookup::truncate_words(&comment.text, PREVIEW_WORDS)}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {lookup::user_display_name(&comment.user_id, users.items())}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {lookup::product_name(&comment.product_id, products.items())}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            <TimestampDisplay timestamp={comment.posted_at} />
                                        </td>
                                        <td class="px-4 py-3 text-right">
                                            <button
                                                onclick={on_request_delete}
                                                class="text-sm font-medium text-red-600 hover:text-red-700 dark:text-red-400 dark:hover:text-red-300"
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page={pagination.current_page()}
                    total_pages={pagination.total_pages()}
                    on_page_change={on_page_change.clone()}
                    is_loading={comments.is_loading()}
                />
            }

            {modal}

            if let Some(comment) = &*pending_delete {
                <ConfirmationModal
                    title="Delete comment"
                    message={format!(
                        "The comment \"{}\" will be removed.",
                        lookup::truncate_words(&comment.text, PREVIEW_WORDS)
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete.clone()}
                    on_close={on_cancel_delete.clone()}
                    is_loading={comments.is_loading()}
                />
            }
        </div>
    }
}
