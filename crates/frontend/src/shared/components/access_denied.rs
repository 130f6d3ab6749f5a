use crate::i18n::{t, use_i18n};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shown inside a panel when the backend answered 403 for the caller's
/// role.
#[component]
pub fn AccessDenied() -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <div class="access-denied">
            <div class="access-denied__icon">{icon("lock")}</div>
            <p class="access-denied__text">{move || t(lang.get(), "common.no_permission")}</p>
        </div>
    }
}
