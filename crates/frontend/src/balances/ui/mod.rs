use crate::balances::api;
use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::components::number_format::format_thousands;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::balances::{BalanceForm, Balances, ServiceBalance};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Console links shown when the provider payload carries none.
const SERVICES: [(&str, &str); 4] = [
    ("OpenAI", "https://platform.openai.com/"),
    ("DeepL", "https://www.deepl.com/pro-api"),
    ("ElevenLabs", "https://elevenlabs.io/"),
    ("Yandex Translate", "https://cloud.yandex.com/"),
];

fn usage_bar_class(percentage: f64) -> &'static str {
    if percentage > 80.0 {
        "usage-bar__fill usage-bar__fill--critical"
    } else if percentage > 50.0 {
        "usage-bar__fill usage-bar__fill--warning"
    } else {
        "usage-bar__fill usage-bar__fill--ok"
    }
}

fn configured(balances: &Balances) -> Vec<(String, String, ServiceBalance)> {
    let slots = [
        (&balances.openai, 0),
        (&balances.deepl, 1),
        (&balances.elevenlabs, 2),
        (&balances.yandex, 3),
    ];
    slots
        .into_iter()
        .filter_map(|(slot, index)| {
            let (name, link) = SERVICES[index];
            slot.clone()
                .map(|balance| (name.to_string(), link.to_string(), balance))
        })
        .collect()
}

#[component]
pub fn BalancesPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let balances: RwSignal<Option<Balances>> = RwSignal::new(None);
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        spawn_local(async move {
            let result = api::fetch_balances().await;
            loading.end();
            match result {
                Ok(data) => {
                    balances.set(Some(data.balances));
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading balances: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    view! {
        <section class="panel panel--balances">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "balances.title")}</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    {move || format!(" {}", t(lang.get(), "balances.refresh"))}
                </Button>
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let cards = balances.get().map(|b| configured(&b)).unwrap_or_default();
                    if cards.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="balance-grid">
                                {cards
                                    .into_iter()
                                    .map(|(name, link, balance)| {
                                        view! { <BalanceCard name=name link=link balance=balance /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn BalanceCard(name: String, link: String, balance: ServiceBalance) -> impl IntoView {
    let lang = use_i18n().lang;
    let href = balance.link.clone().unwrap_or(link);

    match balance.form() {
        BalanceForm::Error => {
            let error = balance.error.unwrap_or_default();
            view! {
                <div class="balance-card balance-card--error">
                    <div class="balance-card__header">
                        <h3>{name}</h3>
                        <a href=href target="_blank">"🔗"</a>
                    </div>
                    <p class="balance-card__error">{error}</p>
                </div>
            }
            .into_any()
        }
        BalanceForm::Status => {
            let status = balance.status.unwrap_or_default();
            let active = status == "Active";
            let models = balance
                .models_available
                .map(|n| format!(" ({} models)", n))
                .unwrap_or_default();
            let info = balance.info.unwrap_or_default();
            view! {
                <div class=if active {
                    "balance-card balance-card--active"
                } else {
                    "balance-card"
                }>
                    <div class="balance-card__header">
                        <h3>{name}</h3>
                    </div>
                    <div class="balance-card__status">
                        <span>{format!("✓ {}", status)}</span>
                        <span class="balance-card__models">{models}</span>
                    </div>
                    <p class="balance-card__info">{info}</p>
                    <a class="btn btn--primary" href=href target="_blank">
                        {move || format!("💰 {}", t(lang.get(), "balances.view_balance"))}
                    </a>
                </div>
            }
            .into_any()
        }
        BalanceForm::Usage => {
            let used = balance.used.unwrap_or(0.0);
            let limit = balance.limit.unwrap_or(0.0);
            let remaining = balance.remaining.unwrap_or((limit - used).max(0.0));
            let percentage = balance.percentage.unwrap_or(0.0);
            let unit = balance.unit.unwrap_or_default();
            let tier = balance.tier;
            let bar_class = usage_bar_class(percentage);
            let bar_width = format!("width: {}%", percentage.clamp(0.0, 100.0));
            view! {
                <div class="balance-card balance-card--usage">
                    <div class="balance-card__header">
                        <h3>{name}</h3>
                    </div>
                    {tier
                        .map(|tier| {
                            view! {
                                <p class="balance-card__tier">
                                    {move || format!("{}: {}", t(lang.get(), "balances.tier"), tier.clone())}
                                </p>
                            }
                        })}
                    <div class="balance-card__usage">
                        <div class="balance-card__usage-row">
                            <span>
                                {move || {
                                    format!(
                                        "{}: {} {}",
                                        t(lang.get(), "balances.used"),
                                        format_thousands(used),
                                        unit,
                                    )
                                }}
                            </span>
                            <span class="balance-card__percent">{format!("{}%", percentage)}</span>
                        </div>
                        <div class="usage-bar">
                            <div class=bar_class style=bar_width></div>
                        </div>
                    </div>
                    <div class="balance-card__footer">
                        <div>
                            <div>
                                {move || {
                                    format!(
                                        "{}: {}",
                                        t(lang.get(), "balances.remaining"),
                                        format_thousands(remaining),
                                    )
                                }}
                            </div>
                            <div>
                                {move || {
                                    format!(
                                        "{}: {}",
                                        t(lang.get(), "balances.limit"),
                                        format_thousands(limit),
                                    )
                                }}
                            </div>
                        </div>
                        <a class="btn btn--primary" href=href target="_blank">
                            {move || format!("🔗 {}", t(lang.get(), "balances.view_details"))}
                        </a>
                    </div>
                </div>
            }
            .into_any()
        }
        BalanceForm::Info => {
            let info = balance.info.unwrap_or_default();
            view! {
                <div class="balance-card">
                    <div class="balance-card__header">
                        <h3>{name}</h3>
                    </div>
                    <p class="balance-card__info">{info}</p>
                    <a class="btn btn--primary" href=href target="_blank">
                        {move || format!("🔗 {}", t(lang.get(), "balances.view_console"))}
                    </a>
                </div>
            }
            .into_any()
        }
        BalanceForm::Empty => view! { <></> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_thresholds() {
        assert!(usage_bar_class(10.0).ends_with("--ok"));
        assert!(usage_bar_class(50.0).ends_with("--ok"));
        assert!(usage_bar_class(65.0).ends_with("--warning"));
        assert!(usage_bar_class(81.0).ends_with("--critical"));
    }

    #[test]
    fn only_configured_services_get_cards() {
        let balances = Balances {
            deepl: Some(ServiceBalance {
                used: Some(100.0),
                limit: Some(500.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let cards = configured(&balances);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].0, "DeepL");
        assert_eq!(cards[0].1, "https://www.deepl.com/pro-api");
    }
}
