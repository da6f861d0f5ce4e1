use crate::components::{ProfileContext, UserPanel};
use crate::storage::AppStorage;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ProfileContext::new(AppStorage::default()));

    view! {
        <Title text="Worklog" />

        <Router>
            <main class="mx-auto max-w-7xl px-4 py-6 sm:px-6 lg:px-8">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("profile") view=ProfilePage />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders the landing page, where logout ends up.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 px-4 py-12 text-center">
            <h1 class="text-4xl font-bold">"Worklog"</h1>
            <p class="text-gray-600 dark:text-gray-400">
                "Track what you worked on and what it is worth."
            </p>
            <div class="rounded-md bg-indigo-600 px-3 py-1.5 text-sm/6 font-semibold text-white hover:bg-indigo-500">
                <A href="/profile">"Open your profile"</A>
            </div>
        </div>
    }
}

#[component]
fn ProfilePage() -> impl IntoView {
    let profile = expect_context::<ProfileContext>();
    let work_item_count = move || profile.work_items.with(|items| items.len());

    view! {
        <div class="flex flex-col gap-6 sm:mx-auto sm:w-full sm:max-w-sm">
            <UserPanel />
            <p class="text-sm text-gray-600 dark:text-gray-400">
                {move || format!("{} work items", work_item_count())}
            </p>
        </div>
    }
}
