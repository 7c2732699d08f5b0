use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A reusable modal that closes on backdrop clicks.
///
/// Clicks inside the panel stay inside: only a click landing on the
/// backdrop element itself emits `on_close`.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks backdrop or closes the modal
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let max_width = props.max_width.to_string();

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                class={format!(
                    "bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 {}",
                    max_width
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
