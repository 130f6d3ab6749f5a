use super::loading::use_loading;
use super::tab_bar::{Tab, TabBar};
use crate::i18n::{t, use_i18n, Lang};
use crate::telegram;
use leptos::prelude::*;

use crate::admin_logs::ui::AdminLogsPanel;
use crate::balances::ui::BalancesPanel;
use crate::dashboard::ui::DashboardPanel;
use crate::feedback::ui::FeedbackPanel;
use crate::logs::ui::LogsPanel;
use crate::roles::ui::RolesPanel;
use crate::settings::ui::SettingsPanel;
use crate::users::ui::UsersPanel;

/// Header + tab bar + active panel + loading overlay.
///
/// Only the active tab is mounted, so switching the interface language
/// re-renders the visible panel's text without touching other tabs' data.
#[component]
pub fn AppShell() -> impl IntoView {
    let i18n = use_i18n();
    let lang = i18n.lang;
    let loading = use_loading();

    let active_tab = RwSignal::new(Tab::Dashboard);
    let admin_name = telegram::current_user()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "Admin".to_string());

    // Keep the document title in the interface language.
    Effect::new(move |_| {
        let title = t(lang.get(), "app.title");
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });

    view! {
        <div class="app">
            <header class="app__header">
                <div class="app__header-left">
                    <h1 class="app__title">{move || t(lang.get(), "app.title")}</h1>
                    <span class="app__user">{admin_name}</span>
                </div>
                <div class="lang-switch">
                    {Lang::all()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if lang.get() == option {
                                            "lang-btn active"
                                        } else {
                                            "lang-btn"
                                        }
                                    }
                                    on:click=move |_| i18n.set_lang(option)
                                >
                                    {option.as_str().to_uppercase()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <TabBar
                active=active_tab.read_only()
                on_select=Callback::new(move |tab| active_tab.set(tab))
            />

            <main class="app__content">
                {move || match active_tab.get() {
                    Tab::Dashboard => view! { <DashboardPanel /> }.into_any(),
                    Tab::Users => view! { <UsersPanel /> }.into_any(),
                    Tab::Logs => view! { <LogsPanel /> }.into_any(),
                    Tab::Feedback => view! { <FeedbackPanel /> }.into_any(),
                    Tab::AdminLogs => view! { <AdminLogsPanel /> }.into_any(),
                    Tab::Roles => view! { <RolesPanel /> }.into_any(),
                    Tab::Settings => view! { <SettingsPanel /> }.into_any(),
                    Tab::Balances => view! { <BalancesPanel /> }.into_any(),
                }}
            </main>

            <Show when=move || loading.is_active()>
                <div class="loading-overlay">
                    <div class="loading-overlay__spinner"></div>
                    <span>{move || t(lang.get(), "common.loading")}</span>
                </div>
            </Show>
        </div>
    }
}
