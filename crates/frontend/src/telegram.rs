//! Access to the Telegram WebApp SDK object (`window.Telegram.WebApp`).
//!
//! The SDK is injected by the Telegram client, so everything here goes
//! through `Reflect` and degrades gracefully when the panel is opened in a
//! plain browser: `init_data()` returns `None` and alerts fall back to
//! `window.alert`.

use js_sys::{Function, Reflect};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};

/// The Telegram user that opened the panel (`initDataUnsafe.user`).
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl WebAppUser {
    pub fn display_name(&self) -> String {
        self.first_name
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Admin".to_string())
    }
}

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if app.is_undefined() || app.is_null() {
        None
    } else {
        Some(app)
    }
}

fn get_str(target: &JsValue, key: &str) -> Option<String> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn call0(target: &JsValue, name: &str) {
    if let Ok(value) = Reflect::get(target, &JsValue::from_str(name)) {
        if let Some(func) = value.dyn_ref::<Function>() {
            let _ = func.call0(target);
        }
    }
}

/// Signed `initData` payload; forwarded to the backend in the
/// `X-Telegram-Init-Data` header. `None` outside Telegram.
pub fn init_data() -> Option<String> {
    let app = web_app()?;
    get_str(&app, "initData").filter(|s| !s.is_empty())
}

/// Current admin from `initDataUnsafe.user`, if Telegram provided one.
pub fn current_user() -> Option<WebAppUser> {
    let app = web_app()?;
    let init_unsafe = Reflect::get(&app, &JsValue::from_str("initDataUnsafe")).ok()?;
    let user = Reflect::get(&init_unsafe, &JsValue::from_str("user")).ok()?;
    if user.is_undefined() || user.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(user).ok()
}

/// Expand the Mini App to full height.
pub fn expand() {
    if let Some(app) = web_app() {
        call0(&app, "expand");
    }
}

/// Show a native Telegram alert; plain `window.alert` outside Telegram.
pub fn show_alert(message: &str) {
    if let Some(app) = web_app() {
        if let Ok(value) = Reflect::get(&app, &JsValue::from_str("showAlert")) {
            if let Some(func) = value.dyn_ref::<Function>() {
                if func.call1(&app, &JsValue::from_str(message)).is_ok() {
                    return;
                }
            }
        }
    }
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no confirmation (used before destructive actions).
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Copy Telegram theme colors onto the CSS custom properties the
/// stylesheet reads, with sane defaults outside Telegram.
pub fn apply_theme() {
    const VARS: [(&str, &str, &str); 5] = [
        ("bg_color", "--tg-theme-bg-color", "#ffffff"),
        ("text_color", "--tg-theme-text-color", "#000000"),
        ("hint_color", "--tg-theme-hint-color", "#999999"),
        ("link_color", "--tg-theme-link-color", "#2481cc"),
        ("button_color", "--tg-theme-button-color", "#2481cc"),
    ];

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };
    let root = match document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        Some(el) => el,
        None => return,
    };

    let theme = web_app().and_then(|app| {
        Reflect::get(&app, &JsValue::from_str("themeParams"))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    });

    let style = root.style();
    for (key, var, default) in VARS {
        let value = theme
            .as_ref()
            .and_then(|params| get_str(params, key))
            .unwrap_or_else(|| default.to_string());
        let _ = style.set_property(var, &value);
    }
}
