use super::{AvatarPicker, Dialog, ProfileContext};
use crate::panel::{PanelLayout, PanelState};
use crate::session::UserSession;
use crate::storage::AppStorage;
use crate::user::{Avatar, RATE_OPTIONS, UserRecord, rate_label};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

const CANCEL_BUTTON: &str = "rounded-md bg-gray-600 px-4 py-2 text-sm/6 font-semibold text-white hover:bg-gray-500";
const MENU_ITEM: &str = "block w-full px-4 py-2 text-left hover:bg-gray-100 dark:hover:bg-gray-700";
const FIELD: &str = "block w-full rounded-md bg-white px-3 py-1.5 text-base text-gray-900 outline-1 -outline-offset-1 outline-gray-300 focus:outline-2 focus:-outline-offset-2 focus:outline-indigo-600 dark:bg-white/5 dark:text-white dark:outline-white/10";

/// Runs a panel action that needs the session, without holding both signals at once.
fn commit(
    profile: ProfileContext,
    panel: RwSignal<PanelState>,
    action: impl FnOnce(&mut PanelState, &mut UserSession<AppStorage>),
) {
    let mut state = panel.get_untracked();
    profile.session.update(|session| action(&mut state, session));
    panel.set(state);
}

/// Identity, avatar and menu of the signed-in user, with the edit, avatar and
/// sign-out dialogs.
#[component]
pub fn UserPanel() -> impl IntoView {
    let profile = expect_context::<ProfileContext>();
    let panel = RwSignal::new(PanelState::default());
    let navigate = use_navigate();

    let logout = Callback::new(move |_: ()| {
        let go = |path: &str| navigate(path, NavigateOptions::default());
        commit(profile, panel, |state, session| {
            profile
                .bus
                .with_value(|bus| state.confirm_logout(session, bus, &go))
        });
    });

    panel_contents(profile, panel, logout)
}

/// The panel below the router boundary.
///
/// Only a change of sign-in state swaps the markup. Dialogs mount and unmount
/// on their own flags, and user fields and drafts update in place.
fn panel_contents(
    profile: ProfileContext,
    panel: RwSignal<PanelState>,
    logout: Callback<()>,
) -> impl IntoView {
    let signed_in = Memo::new(move |_| profile.session.with(UserSession::is_authenticated));
    let layout = Memo::new(move |_| panel.with(PanelState::layout));

    move || {
        if signed_in.get() {
            controls(profile, panel, layout, logout).into_any()
        } else {
            view! { <p class="text-center text-gray-500">"Not signed in"</p> }.into_any()
        }
    }
}

fn user_field(profile: ProfileContext, field: fn(&UserRecord) -> String) -> impl Fn() -> String + Copy {
    move || profile.session.with(|session| session.get().map(field).unwrap_or_default())
}

fn controls(
    profile: ProfileContext,
    panel: RwSignal<PanelState>,
    layout: Memo<PanelLayout>,
    logout: Callback<()>,
) -> impl IntoView {
    let select_avatar = move |avatar: Avatar| {
        commit(profile, panel, |state, session| state.select_avatar(session, avatar))
    };
    let open_edit = move |_: MouseEvent| {
        let user = profile.session.with_untracked(|session| session.get().cloned());
        panel.update(|state| state.open_edit(user.as_ref()));
    };
    let save_edit = move |_: MouseEvent| {
        commit(profile, panel, |state, session| {
            state.save_edit(session);
        })
    };

    let avatar_src = user_field(profile, |user| user.avatar.asset_path());
    let name = user_field(profile, |user| user.name.clone());
    let rate = user_field(profile, UserRecord::rate_label);

    view! {
        <div class="relative flex items-center justify-between gap-4 py-2">
            <img
                src=avatar_src
                alt="User avatar"
                class="h-12 w-12 cursor-pointer rounded-full border-2 border-gray-600"
                on:click=move |_| panel.update(PanelState::open_avatar_picker)
            />
            <span class="text-lg font-semibold">{name}</span>
            <span class="text-sm">{rate}</span>

            <AvatarPicker
                is_open=Signal::derive(move || layout.get().avatar_open)
                on_close=move |_: ()| panel.update(PanelState::close_avatar_picker)
                on_select=select_avatar
            />

            <button
                type="button"
                aria-label="Menu"
                class="p-2 focus:outline-none"
                on:click=move |_| panel.update(PanelState::toggle_menu)
            >
                <svg
                    class="h-6 w-6"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2.4"
                        d="M4 6h18M4 12h18M4 18h18"
                    ></path>
                </svg>
            </button>

            <Show when=move || layout.get().menu_open>
                <div class="absolute right-0 top-14 w-48 rounded-lg bg-white text-gray-800 shadow-lg dark:bg-gray-800 dark:text-gray-100">
                    <button type="button" class=MENU_ITEM on:click=open_edit>
                        "Edit profile"
                    </button>
                    <button
                        type="button"
                        class=MENU_ITEM
                        on:click=move |_| panel.update(PanelState::open_logout)
                    >
                        "Sign out"
                    </button>
                </div>
            </Show>

            <Show when=move || layout.get().edit_open>
                <Dialog on_close=move |_: ()| panel.update(PanelState::cancel_edit)>
                    <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">
                        "Edit profile"
                    </h2>
                    <div class="space-y-4">
                        <div>
                            <label
                                for="profile-name"
                                class="mb-2 block text-sm/6 font-medium text-gray-900 dark:text-gray-100"
                            >
                                "Name"
                            </label>
                            <input
                                id="profile-name"
                                type="text"
                                placeholder="Enter your name"
                                class=FIELD
                                prop:value=move || panel.with(|state| state.draft_name().to_string())
                                on:change=move |ev| {
                                    panel.update(|state| state.set_draft_name(event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label
                                for="profile-rate"
                                class="mb-2 block text-sm/6 font-medium text-gray-900 dark:text-gray-100"
                            >
                                "Hourly rate"
                            </label>
                            <select
                                id="profile-rate"
                                class=FIELD
                                on:change=move |ev| {
                                    let rate = event_target_value(&ev).parse().ok();
                                    panel.update(|state| state.set_draft_rate(rate))
                                }
                            >
                                {RATE_OPTIONS
                                    .map(|rate| {
                                        view! {
                                            <option
                                                value=rate.to_string()
                                                selected=move || panel.with(|state| state.draft_rate() == Some(rate))
                                            >
                                                {rate_label(rate)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="mt-6 flex justify-end space-x-4">
                        <button
                            type="button"
                            class=CANCEL_BUTTON
                            on:click=move |_| panel.update(PanelState::cancel_edit)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md bg-indigo-600 px-4 py-2 text-sm/6 font-semibold text-white hover:bg-indigo-500"
                            on:click=save_edit
                        >
                            "Save"
                        </button>
                    </div>
                </Dialog>
            </Show>

            <Show when=move || layout.get().logout_open>
                <Dialog on_close=move |_: ()| panel.update(PanelState::cancel_logout)>
                    <h2 class="mb-4 text-xl font-semibold text-gray-900 dark:text-white">
                        "Sign out"
                    </h2>
                    <p class="mb-6 text-gray-800 dark:text-gray-300">
                        "Are you sure you want to sign out?"
                    </p>
                    <div class="flex justify-end space-x-4">
                        <button
                            type="button"
                            class=CANCEL_BUTTON
                            on:click=move |_| panel.update(PanelState::cancel_logout)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md bg-red-600 px-4 py-2 text-sm/6 font-semibold text-white hover:bg-red-500"
                            on:click=move |_| logout.run(())
                        >
                            "Yes, sign out"
                        </button>
                    </div>
                </Dialog>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, USER_KEY};

    fn profile(signed_in: bool) -> ProfileContext {
        let storage = AppStorage::default();
        if !signed_in {
            storage.set(USER_KEY, "null").expect("write should succeed");
        }
        ProfileContext::new(storage)
    }

    fn render(signed_in: bool, prepare: impl FnOnce(&mut PanelState, Option<&UserRecord>)) -> String {
        Owner::new().with(|| {
            let profile = profile(signed_in);
            let mut state = PanelState::default();
            profile
                .session
                .with_untracked(|session| prepare(&mut state, session.get()));
            let panel = RwSignal::new(state);
            let logout = Callback::new(|_: ()| {});

            panel_contents(profile, panel, logout).to_html()
        })
    }

    #[test]
    fn test_signed_out_panel_renders_no_controls() {
        let html = render(false, |_, _| {});

        assert!(html.contains("Not signed in"));
        assert!(!html.contains("<button"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_signed_in_panel_shows_identity_without_dialogs() {
        let html = render(true, |_, _| {});

        assert!(html.contains(r#"src="/userIcons/icon2.png""#));
        assert!(html.contains("10€/h"));
        assert!(html.contains(r#"aria-label="Menu""#));
        assert!(!html.contains(r#"role="dialog""#));
        assert!(!html.contains("Edit profile"));
        assert!(!html.contains("Not signed in"));
    }

    #[test]
    fn test_edit_dialog_renders_inside_a_closable_overlay() {
        let html = render(true, |state, user| state.open_edit(user));

        assert_eq!(html.matches(r#"role="dialog""#).count(), 1);
        assert!(html.contains("Edit profile"));
        assert_eq!(html.matches("<option").count(), RATE_OPTIONS.count());
        assert!(html.contains(r#"tabindex="-1""#));
    }

    #[test]
    fn test_logout_dialog_renders_confirmation() {
        let html = render(true, |state, _| state.open_logout());

        assert_eq!(html.matches(r#"role="dialog""#).count(), 1);
        assert!(html.contains("Are you sure you want to sign out?"));
        assert!(html.contains("Yes, sign out"));
    }
}
