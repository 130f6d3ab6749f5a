pub mod admin_logs;
pub mod app;
pub mod balances;
pub mod dashboard;
pub mod feedback;
pub mod i18n;
pub mod layout;
pub mod logs;
pub mod roles;
pub mod settings;
pub mod shared;
pub mod telegram;
pub mod users;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
