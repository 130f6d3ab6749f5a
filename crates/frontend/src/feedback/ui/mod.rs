use crate::feedback::api;
use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::feedback::{Feedback, FeedbackStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_badge_class(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::New => "badge badge--info",
        FeedbackStatus::Reviewed => "badge badge--warning",
        FeedbackStatus::Resolved => "badge badge--success",
    }
}

fn status_label_key(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::New => "feedback.status_new",
        FeedbackStatus::Reviewed => "feedback.status_reviewed",
        FeedbackStatus::Resolved => "feedback.status_resolved",
    }
}

#[component]
pub fn FeedbackPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let filter = RwSignal::new(String::new());
    let entries: RwSignal<Vec<Feedback>> = RwSignal::new(Vec::new());
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        let status = filter.get_untracked();
        spawn_local(async move {
            let result = api::fetch_feedback(&status).await;
            loading.end();
            match result {
                Ok(data) => {
                    entries.set(data.feedback);
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading feedback: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    let set_status = move |feedback_id: i64, status: FeedbackStatus| {
        loading.begin();
        spawn_local(async move {
            let result = api::update_status(feedback_id, status).await;
            loading.end();
            match result {
                Ok(ack) => {
                    let message = ack
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Status updated successfully!");
                    telegram::show_alert(message);
                    load();
                }
                Err(e) => telegram::show_alert(&format!("Error: {}", e)),
            }
        });
    };

    view! {
        <section class="panel panel--feedback">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "feedback.title")}</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    {move || format!(" {}", t(lang.get(), "feedback.refresh"))}
                </Button>
            </div>

            <div class="filter-panel">
                <select
                    class="filter-select"
                    prop:value=move || filter.get()
                    on:change=move |ev| {
                        filter.set(event_target_value(&ev));
                        load();
                    }
                >
                    <option value="">{move || t(lang.get(), "feedback.filter_all")}</option>
                    <option value="new">{move || t(lang.get(), "feedback.filter_new")}</option>
                    <option value="reviewed">
                        {move || t(lang.get(), "feedback.filter_reviewed")}
                    </option>
                    <option value="resolved">
                        {move || t(lang.get(), "feedback.filter_resolved")}
                    </option>
                </select>
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let list = entries.get();
                    if list.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                let status = entry.status;
                                let username = entry
                                    .username
                                    .clone()
                                    .filter(|s| !s.is_empty())
                                    .unwrap_or_else(|| "unknown".to_string());
                                let user_name = entry.user_name.clone().unwrap_or_default();
                                let when = entry
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <div class="feedback-card">
                                        <div class="feedback-card__header">
                                            <div>
                                                <span class="feedback-card__username">
                                                    {format!("@{}", username)}
                                                </span>
                                                <span class="feedback-card__name">{user_name}</span>
                                            </div>
                                            <span class=status_badge_class(status)>
                                                {move || t(lang.get(), status_label_key(status))}
                                            </span>
                                        </div>
                                        <div class="feedback-card__message">{entry.message.clone()}</div>
                                        <div class="feedback-card__footer">
                                            <span class="feedback-card__date">{format!("📅 {}", when)}</span>
                                            {match status.next() {
                                                Some(next) => {
                                                    let label_key = match next {
                                                        FeedbackStatus::Reviewed => "feedback.mark_reviewed",
                                                        _ => "feedback.mark_resolved",
                                                    };
                                                    view! {
                                                        <button
                                                            class="btn btn--secondary"
                                                            on:click=move |_| set_status(id, next)
                                                        >
                                                            {move || t(lang.get(), label_key)}
                                                        </button>
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    view! {
                                                        <span class="feedback-card__done">
                                                            {move || format!(
                                                                "✓ {}",
                                                                t(lang.get(), "feedback.filter_resolved"),
                                                            )}
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
