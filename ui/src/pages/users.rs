use admin_core::form::{FormMode, UserForm};
use payloads::{User, UserId};
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, ErrorBanner, Loader, Modal, PaginationControls,
};
use crate::hooks::{use_pagination, use_title, use_users};

const PAGE_SIZE: usize = 5;

#[function_component]
pub fn UsersPage() -> Html {
    use_title("Users");

    let users = use_users();
    let form = use_state(|| FormMode::<UserId, UserForm>::Closed);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<User>);
    let pagination = use_pagination(PAGE_SIZE, users.items().len());

    {
        let users = users.clone();
        use_effect_with((), move |_| users.load());
    }

    let on_open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.open_create(UserForm::default());
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

    // One edit callback per field; each clones the mode and rewrites the draft.
    let on_first_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.first_name = input.value();
            }
            form.set(next);
        })
    };

    let on_last_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.last_name = input.value();
            }
            form.set(next);
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.email = input.value();
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let users = users.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(draft) = form.draft() else { return };
            let request = match draft.to_request() {
                Ok(request) => request,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);

            let form = form.clone();
            let users = users.clone();
            yew::platform::spawn_local(async move {
                let outcome = users.create(&request).await;
                let mut next = (*form).clone();
                next.resolve_submit(&outcome);
                form.set(next);
            });
        })
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let users = users.clone();
        Callback::from(move |_: ()| {
            if let Some(user) = &*pending_delete {
                users.delete(user.id.clone());
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_error = {
        let users = users.clone();
        Callback::from(move |_: ()| users.clear_error())
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
                    {"Create user"}
                </h3>

                if let Some(message) = &*form_error {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                        <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class={label_class}>{"First name *"}</label>
                        <input
                            type="text"
                            value={draft.first_name.clone()}
                            oninput={on_first_name_input}
                            disabled={users.is_loading()}
                            placeholder="Enter first name"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label class={label_class}>{"Last name *"}</label>
                        <input
                            type="text"
                            value={draft.last_name.clone()}
                            oninput={on_last_name_input}
                            disabled={users.is_loading()}
                            placeholder="Enter last name"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label class={label_class}>{"Email *"}</label>
                        <input
                            type="email"
                            value={draft.email.clone()}
                            oninput={on_email_input}
                            disabled={users.is_loading()}
                            placeholder="name@example.com"
                            class={input_class}
                        />
                    </div>

                    <div class="flex gap-3 pt-4">
                        <button
                            type="button"
                            onclick={on_close_form.reform(|_| ())}
                            disabled={users.is_loading()}
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
                            disabled={users.is_loading()}
                            class="flex-1 py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {if users.is_loading() { "Creating..." } else { "Create user" }}
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
                        {"Users"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Customer accounts"}
                    </p>
                </div>
                <button
                    onclick={on_open_create}
                    disabled={users.is_loading()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"New User"}
                </button>
            </div>

            if let Some(error) = users.error() {
                <ErrorBanner
                    message={error.to_string()}
                    on_dismiss={on_dismiss_error.clone()}
                />
            }

            if users.is_loading() {
                <Loader label="Loading users..." />
            } else if users.items().is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"No users found."}</p>
                </div>
            } else {
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-x-auto">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead>
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Name"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Email"}
                                </th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                            {pagination.slice(users.items()).iter().map(|user| {
                                let on_request_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(user.clone()));
                                    })
                                };
                                html! {
                                    <tr key={user.id.to_string()}>
                                        <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                            {user.display_name()}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {&user.email}
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
                    is_loading={users.is_loading()}
                />
            }

            {modal}

            if let Some(user) = &*pending_delete {
                <ConfirmationModal
                    title="Delete user"
                    message={format!(
                        "{} will be removed. Their comments and orders keep the id and show \"Unknown\".",
                        user.display_name()
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete.clone()}
                    on_close={on_cancel_delete.clone()}
                    is_loading={users.is_loading()}
                />
            }
        </div>
    }
}
