use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_class = "text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white transition-colors";

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route>
                            to={Route::Home}
                            classes="text-xl font-semibold text-neutral-900 dark:text-white"
                        >
                            {"Store Admin"}
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-4">
                        <Link<Route> to={Route::Orders} classes={link_class}>{"Orders"}</Link<Route>>
                        <Link<Route> to={Route::Comments} classes={link_class}>{"Comments"}</Link<Route>>
                        <Link<Route> to={Route::Users} classes={link_class}>{"Users"}</Link<Route>>
                        <Link<Route> to={Route::Products} classes={link_class}>{"Products"}</Link<Route>>
                        <Link<Route> to={Route::Categories} classes={link_class}>{"Categories"}</Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
