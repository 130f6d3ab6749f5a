use crate::i18n::I18nContext;
use crate::layout::{AppShell, LoadingContext};
use crate::telegram;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Interface language and the shared loading overlay for the whole app.
    provide_context(I18nContext::new());
    provide_context(LoadingContext::new());

    // Telegram chrome: full height + theme colors onto CSS variables.
    telegram::expand();
    telegram::apply_theme();

    view! {
        <AppShell />
    }
}
