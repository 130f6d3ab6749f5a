use crate::dashboard::api;
use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_duration};
use crate::shared::lang_names::language_name;
use crate::telegram;
use contracts::stats::{BotStats, DailyStat, LangCount, LanguageStats, PerformanceStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let stats: RwSignal<Option<BotStats>> = RwSignal::new(None);
    let daily: RwSignal<Vec<DailyStat>> = RwSignal::new(Vec::new());
    let languages: RwSignal<Option<LanguageStats>> = RwSignal::new(None);
    let performance: RwSignal<Option<PerformanceStats>> = RwSignal::new(None);
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        spawn_local(async move {
            // The four blocks load in order; the first failure aborts the rest.
            let result = async {
                stats.set(Some(api::fetch_stats().await?));
                daily.set(api::fetch_daily(7).await?.stats);
                languages.set(Some(api::fetch_languages().await?));
                performance.set(Some(api::fetch_performance().await?));
                Ok::<(), crate::shared::api::ApiError>(())
            }
            .await;

            loading.end();
            match result {
                Ok(()) => forbidden.set(false),
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading dashboard: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    view! {
        <section class="panel panel--dashboard">
            <h2 class="panel__title">{move || t(lang.get(), "dashboard.title")}</h2>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    view! {
                        <div class="stat-grid">
                            <StatCard
                                label=Signal::derive(move || {
                                    t(lang.get(), "dashboard.total_users").to_string()
                                })
                                icon_name="users"
                                value=Signal::derive(move || stats.get().map(|s| s.total_users))
                            />
                            <StatCard
                                label=Signal::derive(move || {
                                    t(lang.get(), "dashboard.premium_users").to_string()
                                })
                                icon_name="shield"
                                value=Signal::derive(move || stats.get().map(|s| s.premium_users))
                            />
                            <StatCard
                                label=Signal::derive(move || {
                                    t(lang.get(), "dashboard.today_active").to_string()
                                })
                                icon_name="chart"
                                value=Signal::derive(move || stats.get().map(|s| s.active_today))
                            />
                            <StatCard
                                label=Signal::derive(move || {
                                    t(lang.get(), "dashboard.translations_today").to_string()
                                })
                                icon_name="message"
                                value=Signal::derive(move || {
                                    stats.get().map(|s| s.translations_today)
                                })
                            />
                        </div>

                        <div class="dashboard-section">
                            <h3 class="dashboard-section__title">
                                {move || t(lang.get(), "dashboard.daily_stats")}
                            </h3>
                            <div class="daily-stats">
                                {move || {
                                    daily
                                        .get()
                                        .into_iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="daily-stat-row">
                                                    <span class="daily-stat-row__date">
                                                        {format_date(&stat.date)}
                                                    </span>
                                                    <span class="daily-stat-row__values">
                                                        {format!(
                                                            "👥 {} 💬 {}",
                                                            stat.users,
                                                            stat.translations,
                                                        )}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>

                        <div class="dashboard-section">
                            <h3 class="dashboard-section__title">
                                {move || t(lang.get(), "dashboard.language_stats")}
                            </h3>
                            <div class="lang-stats">
                                <LangColumn
                                    title_key="dashboard.source_languages"
                                    items=Signal::derive(move || {
                                        languages.get().map(|l| l.source_languages).unwrap_or_default()
                                    })
                                />
                                <LangColumn
                                    title_key="dashboard.target_languages"
                                    items=Signal::derive(move || {
                                        languages.get().map(|l| l.target_languages).unwrap_or_default()
                                    })
                                />
                            </div>
                        </div>

                        <PerformanceSection performance=performance.read_only() />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn LangColumn(
    title_key: &'static str,
    #[prop(into)] items: Signal<Vec<LangCount>>,
) -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <div class="lang-column">
            <h4 class="lang-column__title">{move || t(lang.get(), title_key)}</h4>
            {move || {
                let list = items.get();
                if list.is_empty() {
                    view! { <div class="lang-item lang-item--empty">{t(lang.get(), "common.no_data")}</div> }
                        .into_any()
                } else {
                    list.into_iter()
                        .map(|entry| {
                            view! {
                                <div class="lang-item">
                                    <span>{language_name(&entry.lang)}</span>
                                    <span class="lang-item__count">{entry.count}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PerformanceSection(
    #[prop(into)] performance: Signal<Option<PerformanceStats>>,
) -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <div class="dashboard-section">
            <h3 class="dashboard-section__title">{move || t(lang.get(), "dashboard.performance")}</h3>
            {move || {
                let Some(perf) = performance.get() else {
                    return view! { <></> }.into_any();
                };
                let times = perf.average_processing_time.clone();
                let detail = format!(
                    "{}: {} | {}: {}",
                    t(lang.get(), "perf.voice"),
                    format_duration(times.voice),
                    t(lang.get(), "perf.text"),
                    format_duration(times.text),
                );
                let rate_detail = format!(
                    "{} / {} {}",
                    perf.successful_translations,
                    perf.total_translations,
                    t(lang.get(), "perf.translations"),
                );
                let errors = perf.errors_by_day.clone();
                view! {
                    <div class="perf-grid">
                        <div class="perf-card">
                            <div class="perf-card__label">
                                {t(lang.get(), "dashboard.avg_processing")}
                            </div>
                            <div class="perf-card__value">
                                {format_duration(times.overall)}
                            </div>
                            <div class="perf-card__detail">{detail}</div>
                        </div>
                        <div class="perf-card">
                            <div class="perf-card__label">
                                {t(lang.get(), "dashboard.success_rate")}
                            </div>
                            <div class="perf-card__value">{format!("{}%", perf.success_rate)}</div>
                            <div class="perf-card__detail">{rate_detail}</div>
                        </div>
                    </div>
                    <div class="perf-errors">
                        <div class="perf-errors__label">{t(lang.get(), "dashboard.errors_7days")}</div>
                        {if errors.is_empty() {
                            view! {
                                <div class="perf-errors__empty">{t(lang.get(), "perf.no_errors")}</div>
                            }
                            .into_any()
                        } else {
                            errors
                                .into_iter()
                                .map(|day| {
                                    let date = day
                                        .date
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class="perf-errors__row">
                                            <span>{date}</span>
                                            <span class="perf-errors__count">
                                                {format!("{} {}", day.count, t(lang.get(), "perf.errors"))}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
