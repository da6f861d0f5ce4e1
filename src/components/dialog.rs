use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

const OVERLAY: &str = "fixed inset-0 z-20 flex items-start justify-center bg-black/50 pt-20 backdrop-blur-sm";
const PANEL: &str = "mx-auto w-11/12 rounded-lg bg-white p-6 shadow-lg outline-none md:w-96 dark:bg-gray-800";

/// Modal frame shared by the profile dialogs.
///
/// A click on the backdrop, or Escape pressed while focus is inside, runs
/// `on_close`. Clicks on the dialog itself never reach the backdrop.
#[component]
pub fn Dialog(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class=OVERLAY
            tabindex="-1"
            on:click=move |_| on_close.run(())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_close.run(());
                }
            }
        >
            <div role="dialog" aria-modal="true" class=PANEL on:click=|ev: MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
