use payloads::ApiClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;

use components::layout::MainLayout;
use pages::{
    CategoriesPage, CommentsPage, HomePage, NotFoundPage, OrdersPage,
    ProductsPage, UsersPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> ApiClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    ApiClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/orders")]
    Orders,
    #[at("/comments")]
    Comments,
    #[at("/users")]
    Users,
    #[at("/products")]
    Products,
    #[at("/categories")]
    Categories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::Comments => html! { <CommentsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
