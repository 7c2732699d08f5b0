use admin_core::form::{FormMode, ProductForm};
use admin_core::lookup;
use payloads::{Product, ProductId};
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, ErrorBanner, Loader, Modal, PaginationControls,
};
use crate::hooks::{use_categories, use_pagination, use_products, use_title};

const PAGE_SIZE: usize = 5;

#[function_component]
pub fn ProductsPage() -> Html {
    use_title("Products");

    let products = use_products();
    // Category names for the table and the form select.
    let categories = use_categories();
    let form = use_state(|| FormMode::<ProductId, ProductForm>::Closed);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Product>);
    let pagination = use_pagination(PAGE_SIZE, products.items().len());

    {
        let products = products.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            products.load();
            categories.load();
        });
    }

    let on_open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.open_create(ProductForm::default());
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

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.name = input.value();
            }
            form.set(next);
        })
    };

    let on_price_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.price = input.value();
            }
            form.set(next);
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.category_id = select.value();
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let products = products.clone();
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
            let products = products.clone();
            yew::platform::spawn_local(async move {
                let outcome = products.create(&request).await;
                let mut next = (*form).clone();
                next.resolve_submit(&outcome);
                form.set(next);
            });
        })
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let products = products.clone();
        Callback::from(move |_: ()| {
            if let Some(product) = &*pending_delete {
                products.delete(product.id.clone());
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_error = {
        let products = products.clone();
        Callback::from(move |_: ()| products.clear_error())
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
                    {"Create product"}
                </h3>

                if let Some(message) = &*form_error {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                        <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class={label_class}>{"Name *"}</label>
                        <input
                            type="text"
                            value={draft.name.clone()}
                            oninput={on_name_input}
                            disabled={products.is_loading()}
                            placeholder="Enter product name"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label class={label_class}>{"Price *"}</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            value={draft.price.clone()}
                            oninput={on_price_input}
                            disabled={products.is_loading()}
                            placeholder="0.00"
                            class={input_class}
                        />
                    </div>

                    <div>
                        <label class={label_class}>{"Category"}</label>
                        <select
                            value={draft.category_id.clone()}
                            onchange={on_category_change}
                            disabled={products.is_loading()}
                            class={input_class}
                        >
                            <option value="" selected={draft.category_id.is_empty()}>
                                {"No category"}
                            </option>
                            {categories.items().iter().map(|category| html! {
                                <option
                                    value={category.id.to_string()}
                                    selected={draft.category_id == category.id.to_string()}
                                >
                                    {&category.name}
                                </option>
                            }).collect::<Html>()}
                        </select>
                    </div>

                    <div class="flex gap-3 pt-4">
                        <button
                            type="button"
                            onclick={on_close_form.reform(|_| ())}
                            disabled={products.is_loading()}
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
                            disabled={products.is_loading()}
                            class="flex-1 py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {if products.is_loading() { "Creating..." } else { "Create product" }}
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
                        {"Products"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"The store catalog"}
                    </p>
                </div>
                <button
                    onclick={on_open_create}
                    disabled={products.is_loading()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"New Product"}
                </button>
            </div>

            if let Some(error) = products.error() {
                <ErrorBanner
                    message={error.to_string()}
                    on_dismiss={on_dismiss_error.clone()}
                />
            }

            if products.is_loading() {
                <Loader label="Loading products..." />
            } else if products.items().is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"No products found."}</p>
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
                                    {"Price"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Category"}
                                </th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                            {pagination.slice(products.items()).iter().map(|product| {
                                let category = product
                                    .category_id
                                    .as_ref()
                                    .map(|id| lookup::category_name(id, categories.items()))
                                    .unwrap_or_else(|| lookup::UNKNOWN.to_string());
                                let on_request_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let product = product.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(product.clone()));
                                    })
                                };
                                html! {
                                    <tr key={product.id.to_string()}>
                                        <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                            {&product.name}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                            {format!("${}", product.price)}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {category}
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
                    is_loading={products.is_loading()}
                />
            }

            {modal}

            if let Some(product) = &*pending_delete {
                <ConfirmationModal
                    title="Delete product"
                    message={format!(
                        "The product \"{}\" will be removed. Comments and order lines that reference it keep the id and show \"Unknown\".",
                        product.name
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete.clone()}
                    on_close={on_cancel_delete.clone()}
                    is_loading={products.is_loading()}
                />
            }
        </div>
    }
}
