use crate::i18n::{t, use_i18n};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Panels of the Mini App, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Users,
    Logs,
    Feedback,
    AdminLogs,
    Roles,
    Settings,
    Balances,
}

impl Tab {
    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "nav.dashboard",
            Tab::Users => "nav.users",
            Tab::Logs => "nav.logs",
            Tab::Feedback => "nav.feedback",
            Tab::AdminLogs => "nav.adminLogs",
            Tab::Roles => "nav.roles",
            Tab::Settings => "nav.settings",
            Tab::Balances => "nav.balances",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "chart",
            Tab::Users => "users",
            Tab::Logs => "message",
            Tab::Feedback => "inbox",
            Tab::AdminLogs => "shield",
            Tab::Roles => "shield",
            Tab::Settings => "settings",
            Tab::Balances => "wallet",
        }
    }

    pub fn all() -> [Tab; 8] {
        [
            Tab::Dashboard,
            Tab::Users,
            Tab::Logs,
            Tab::Feedback,
            Tab::AdminLogs,
            Tab::Roles,
            Tab::Settings,
            Tab::Balances,
        ]
    }
}

#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<Tab>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <nav class="tab-bar">
            {Tab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == tab { "tab-btn active" } else { "tab-btn" }
                            }
                            on:click=move |_| on_select.run(tab)
                        >
                            <span class="tab-icon">{icon(tab.icon_name())}</span>
                            <span class="tab-text">{move || t(lang.get(), tab.label_key())}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
