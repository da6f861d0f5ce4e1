pub mod app;
pub mod components;
pub mod known_errors;
pub mod navigation;
pub mod panel;
pub mod session;
pub mod storage;
pub mod user;
pub mod work_items;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod notfoundpage;

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "ssr")]
pub mod theme;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
