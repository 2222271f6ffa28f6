pub mod api;
pub mod components;
pub mod config;
pub mod options;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Installs logging, resolves runtime config, then mounts the app.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Leaveflow frontend");

    leptos::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
