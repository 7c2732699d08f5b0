use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    /// Shown under the spinner (e.g., "Loading orders...")
    pub label: AttrValue,
}

#[function_component]
pub fn Loader(props: &LoaderProps) -> Html {
    html! {
        <div class="text-center py-12 space-y-4">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
            <p class="text-neutral-600 dark:text-neutral-400">{&props.label}</p>
        </div>
    }
}
