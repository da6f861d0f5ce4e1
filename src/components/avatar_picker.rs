use super::Dialog;
use crate::user::Avatar;
use leptos::prelude::*;

/// Dialog offering the avatar catalog.
///
/// Picking an icon only reports it through `on_select`. Whether the dialog is
/// open belongs to the caller, so closing it after a pick is the caller's job.
#[component]
pub fn AvatarPicker(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_select: Callback<Avatar>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <Dialog on_close=on_close>
                <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">
                    "Choose an avatar"
                </h2>
                <div class="grid grid-cols-4 gap-4">
                    {Avatar::catalog()
                        .map(|avatar| {
                            view! {
                                <img
                                    src=avatar.asset_path()
                                    alt=avatar.alt_text()
                                    class="h-12 w-12 cursor-pointer rounded-full border-2 border-gray-300 hover:border-indigo-500"
                                    on:click=move |_| on_select.run(avatar)
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-6 flex justify-end">
                    <button
                        type="button"
                        class="rounded-md bg-gray-600 px-4 py-2 text-sm/6 font-semibold text-white hover:bg-gray-500"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </Dialog>
        </Show>
    }
}
