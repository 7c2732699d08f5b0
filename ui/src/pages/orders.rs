use admin_core::form::{FormMode, OrderForm};
use admin_core::lookup;
use payloads::{Order, OrderId, OrderStatus};
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, ErrorBanner, Loader, Modal, PaginationControls,
    TimestampDisplay,
};
use crate::hooks::{
    use_orders, use_pagination, use_products, use_title, use_users,
};

const PAGE_SIZE: usize = 5;

/// Words of the customer name shown in the table before cutting off.
const NAME_WORDS: usize = 4;

#[function_component]
pub fn OrdersPage() -> Html {
    use_title("Orders");

    let orders = use_orders();
    // Customer and product names for the table and the form selects.
    let users = use_users();
    let products = use_products();
    let form = use_state(|| FormMode::<OrderId, OrderForm>::Closed);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Order>);
    let pagination = use_pagination(PAGE_SIZE, orders.items().len());

    {
        let orders = orders.clone();
        let users = users.clone();
        let products = products.clone();
        use_effect_with((), move |_| {
            orders.load();
            users.load();
            products.load();
        });
    }

    let on_open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.open_create(OrderForm::default());
            form.set(next);
            form_error.set(None);
        })
    };

    // Closing also drops the selected-row marker set when editing opened.
    let on_close_form = {
        let form = form.clone();
        let orders = orders.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            next.close();
            form.set(next);
            orders.clear_selected();
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

    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<OrderStatus>() {
                let mut next = (*form).clone();
                if let Some(draft) = next.draft_mut() {
                    draft.status = status;
                }
                form.set(next);
            }
        })
    };

    let on_add_line = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if let Some(draft) = next.draft_mut() {
                draft.add_line();
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let orders = orders.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (update_id, draft) = match &*form {
                FormMode::Closed => return,
                FormMode::Create(draft) => (None, draft.clone()),
                FormMode::Update { id, draft } => {
                    (Some(id.clone()), draft.clone())
                }
            };

            match update_id {
                None => {
                    let request = match draft.to_create_request() {
                        Ok(request) => request,
                        Err(err) => {
                            form_error.set(Some(err.to_string()));
                            return;
                        }
                    };
                    form_error.set(None);

                    let form = form.clone();
                    let orders = orders.clone();
                    yew::platform::spawn_local(async move {
                        let outcome = orders.create(&request).await;
                        let mut next = (*form).clone();
                        next.resolve_submit(&outcome);
                        form.set(next);
                    });
                }
                Some(id) => {
                    let request = match draft.to_update_request() {
                        Ok(request) => request,
                        Err(err) => {
                            form_error.set(Some(err.to_string()));
                            return;
                        }
                    };
                    form_error.set(None);

                    let form = form.clone();
                    let orders = orders.clone();
                    yew::platform::spawn_local(async move {
                        // An updated order comes back with a recomputed
                        // total, so reload the list instead of patching
                        // the row in place.
                        if orders.update(&id, &request).await.is_ok() {
                            let mut next = (*form).clone();
                            next.close();
                            form.set(next);
                            orders.clear_selected();
                            orders.load();
                        }
                    });
                }
            }
        })
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let orders = orders.clone();
        Callback::from(move |_: ()| {
            if let Some(order) = &*pending_delete {
                orders.delete(order.id.clone());
            }
            pending_delete.set(None);
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let on_dismiss_error = {
        let orders = orders.clone();
        Callback::from(move |_: ()| orders.clear_error())
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
        let is_update = form.is_update();
        html! {
            <Modal on_close={on_close_form.clone()} max_width="max-w-2xl">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                    {if is_update { "Update order" } else { "Create order" }}
                </h3>

                if let Some(message) = &*form_error {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                        <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class={label_class}>{"Lines *"}</label>
                        <div class="space-y-3">
                            {draft.lines.iter().enumerate().map(|(index, line)| {
                                let on_line_product_change = {
                                    let form = form.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement =
                                            e.target_unchecked_into();
                                        let mut next = (*form).clone();
                                        if let Some(draft) = next.draft_mut() {
                                            draft.set_line_product(index, select.value());
                                        }
                                        form.set(next);
                                    })
                                };
                                let on_line_quantity_input = {
                                    let form = form.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement =
                                            e.target_unchecked_into();
                                        let mut next = (*form).clone();
                                        if let Some(draft) = next.draft_mut() {
                                            draft.set_line_quantity(index, input.value());
                                        }
                                        form.set(next);
                                    })
                                };
                                let on_remove_line = {
                                    let form = form.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*form).clone();
                                        if let Some(draft) = next.draft_mut() {
                                            draft.remove_line(index);
                                        }
                                        form.set(next);
                                    })
                                };
                                html! {
                                    <div key={index.to_string()} class="flex gap-3 items-center">
                                        <select
                                            value={line.product_id.clone()}
                                            onchange={on_line_product_change}
                                            disabled={orders.is_loading()}
                                            class={classes!(input_class, "flex-1")}
                                        >
                                            <option value="" selected={line.product_id.is_empty()}>
                                                {"Select a product"}
                                            </option>
                                            {products.items().iter().map(|product| html! {
                                                <option
                                                    value={product.id.to_string()}
                                                    selected={line.product_id == product.id.to_string()}
                                                >
                                                    {format!("{} (${})", product.name, product.price)}
                                                </option>
                                            }).collect::<Html>()}
                                        </select>
                                        <input
                                            type="number"
                                            min="1"
                                            value={line.quantity.clone()}
                                            oninput={on_line_quantity_input}
                                            disabled={orders.is_loading()}
                                            class={classes!(input_class, "w-24")}
                                        />
                                        <button
                                            type="button"
                                            onclick={on_remove_line}
                                            disabled={orders.is_loading()}
                                            class="text-sm font-medium text-red-600 hover:text-red-700 dark:text-red-400 dark:hover:text-red-300 disabled:opacity-50"
                                        >
                                            {"Remove"}
                                        </button>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>
                        <button
                            type="button"
                            onclick={on_add_line}
                            disabled={orders.is_loading()}
                            class="mt-3 py-1 px-3 border border-neutral-300 dark:border-neutral-600
                                   rounded-md text-sm font-medium text-neutral-700 dark:text-neutral-300
                                   bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {"Add line"}
                        </button>
                    </div>

                    <div>
                        <label class={label_class}>{"User *"}</label>
                        <select
                            value={draft.user_id.clone()}
                            onchange={on_user_change}
                            disabled={orders.is_loading()}
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

                    // Status is backend-assigned on creation, so only the
                    // update form offers it.
                    if is_update {
                        <div>
                            <label class={label_class}>{"Status"}</label>
                            <select
                                value={draft.status.to_string()}
                                onchange={on_status_change.clone()}
                                disabled={orders.is_loading()}
                                class={input_class}
                            >
                                {OrderStatus::ALL.iter().map(|status| html! {
                                    <option
                                        value={status.to_string()}
                                        selected={draft.status == *status}
                                    >
                                        {status.to_string()}
                                    </option>
                                }).collect::<Html>()}
                            </select>
                        </div>
                    }

                    <div class="flex gap-3 pt-4">
                        <button
                            type="button"
                            onclick={on_close_form.reform(|_| ())}
                            disabled={orders.is_loading()}
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
                            disabled={orders.is_loading()}
                            class="flex-1 py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {if orders.is_loading() {
                                if is_update { "Saving..." } else { "Creating..." }
                            } else if is_update {
                                "Update order"
                            } else {
                                "Create order"
                            }}
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
                        {"Orders"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Track and update customer orders"}
                    </p>
                </div>
                <button
                    onclick={on_open_create}
                    disabled={orders.is_loading()}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"New Order"}
                </button>
            </div>

            if let Some(error) = orders.error() {
                <ErrorBanner
                    message={error.to_string()}
                    on_dismiss={on_dismiss_error.clone()}
                />
            }

            if orders.is_loading() {
                <Loader label="Loading orders..." />
            } else if orders.items().is_empty() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"No orders found."}</p>
                </div>
            } else {
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-x-auto">
                    <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                        <thead>
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Placed"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Status"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Total"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"User"}
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Lines"}
                                </th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-neutral-500 dark:text-neutral-400 uppercase tracking-wider">
                                    {"Actions"}
                                </th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                            {pagination.slice(orders.items()).iter().map(|order| {
                                let on_edit = {
                                    let form = form.clone();
                                    let form_error = form_error.clone();
                                    let orders = orders.clone();
                                    let order = order.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*form).clone();
                                        next.open_update(
                                            order.id.clone(),
                                            OrderForm::from_order(&order),
                                        );
                                        form.set(next);
                                        form_error.set(None);
                                        orders.select(order.clone());
                                    })
                                };
                                let on_request_delete = {
                                    let pending_delete = pending_delete.clone();
                                    let order = order.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        pending_delete.set(Some(order.clone()));
                                    })
                                };
                                html! {
                                    <tr key={order.id.to_string()}>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            <TimestampDisplay timestamp={order.placed_at} />
                                        </td>
                                        <td class="px-4 py-3">
                                            <span class="inline-flex px-2 py-1 text-xs font-medium rounded-full bg-neutral-100 dark:bg-neutral-700 text-neutral-800 dark:text-neutral-200">
                                                {order.status.to_string()}
                                            </span>
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100">
                                            {format!("${}", order.total_price)}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {lookup::truncate_words(
                                                &lookup::user_display_name(&order.user_id, users.items()),
                                                NAME_WORDS,
                                            )}
                                        </td>
                                        <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                            {order.lines.len()}
                                        </td>
                                        <td class="px-4 py-3 text-right space-x-3">
                                            <button
                                                onclick={on_edit}
                                                class="text-sm font-medium text-neutral-700 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100"
                                            >
                                                {"Edit"}
                                            </button>
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
                    is_loading={orders.is_loading()}
                />
            }

            {modal}

            if let Some(order) = &*pending_delete {
                <ConfirmationModal
                    title="Delete order"
                    message={format!(
                        "The order placed by {} for ${} will be removed.",
                        lookup::user_display_name(&order.user_id, users.items()),
                        order.total_price
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete.clone()}
                    on_close={on_cancel_delete.clone()}
                    is_loading={orders.is_loading()}
                />
            }
        </div>
    }
}
