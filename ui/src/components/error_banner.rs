use admin_core::ERROR_AUTO_CLEAR;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Inline banner for the page's current error. Arms a dismissal timer
/// for [`ERROR_AUTO_CLEAR`]; a new message re-arms it, and unmounting
/// (the next successful operation clears the error) cancels it.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    /// Fired when the timer runs out; the page clears its error state.
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn ErrorBanner(props: &ErrorBannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout =
                Timeout::new(ERROR_AUTO_CLEAR.as_millis() as u32, move || {
                    on_dismiss.emit(());
                });
            move || drop(timeout)
        });
    }

    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">{&props.message}</p>
        </div>
    }
}
