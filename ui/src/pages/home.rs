use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

const SECTIONS: [(&str, &str, Route); 5] = [
    ("Orders", "Track order lines, totals, and status.", Route::Orders),
    (
        "Comments",
        "Review what customers say about products.",
        Route::Comments,
    ),
    ("Users", "Manage customer accounts.", Route::Users),
    ("Products", "Maintain the catalog and prices.", Route::Products),
    ("Categories", "Group products for browsing.", Route::Categories),
];

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Store Admin"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Manage the storefront's orders, comments, users, products, and categories."}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SECTIONS.iter().map(|(name, description, route)| {
                    html! {
                        <div key={*name} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                            <div class="space-y-4">
                                <div>
                                    <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                                        {*name}
                                    </h3>
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {*description}
                                    </p>
                                </div>
                                <div class="pt-2">
                                    <Link<Route>
                                        to={route.clone()}
                                        classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                                    >
                                        {format!("Open {}", name)}
                                    </Link<Route>>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </div>
    }
}
