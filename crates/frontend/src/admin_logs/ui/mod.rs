use crate::admin_logs::api;
use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::admin_logs::AdminLogEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Actions the backend audits; drives the action filter options.
const KNOWN_ACTIONS: [&str; 7] = [
    "grant_premium",
    "revoke_premium",
    "ban_user",
    "unban_user",
    "send_message",
    "update_feedback",
    "view_history",
];

fn action_badge_class(action: &str) -> &'static str {
    match action {
        "grant_premium" | "unban_user" => "badge badge--success",
        "revoke_premium" | "ban_user" => "badge badge--error",
        "send_message" => "badge badge--accent",
        "update_feedback" => "badge badge--info",
        _ => "badge badge--neutral",
    }
}

fn action_label(action: &str) -> String {
    action.replace('_', " ").to_uppercase()
}

/// Distinct admins of the fetched page, in first-seen order; feeds the
/// admin filter dropdown.
fn distinct_admins(logs: &[AdminLogEntry]) -> Vec<(i64, String)> {
    let mut seen = Vec::new();
    for log in logs {
        if seen.iter().any(|(id, _)| *id == log.admin_user_id) {
            continue;
        }
        let label = format!(
            "@{} ({})",
            log.admin_username.as_deref().unwrap_or("unknown"),
            log.admin_name.as_deref().unwrap_or(""),
        );
        seen.push((log.admin_user_id, label));
    }
    seen
}

#[component]
pub fn AdminLogsPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let admin_filter = RwSignal::new(String::new());
    let action_filter = RwSignal::new(String::new());
    let logs: RwSignal<Vec<AdminLogEntry>> = RwSignal::new(Vec::new());
    let admins: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        let (admin_value, action_value) =
            (admin_filter.get_untracked(), action_filter.get_untracked());
        spawn_local(async move {
            let result = api::fetch_admin_logs(&admin_value, &action_value).await;
            loading.end();
            match result {
                Ok(data) => {
                    admins.set(distinct_admins(&data.logs));
                    logs.set(data.logs);
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading admin logs: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    view! {
        <section class="panel panel--admin-logs">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "adminLogs.title")}</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    {move || format!(" {}", t(lang.get(), "adminLogs.refresh"))}
                </Button>
            </div>

            <div class="filter-panel">
                <select
                    class="filter-select"
                    prop:value=move || admin_filter.get()
                    on:change=move |ev| {
                        admin_filter.set(event_target_value(&ev));
                        load();
                    }
                >
                    <option value="">{move || t(lang.get(), "adminLogs.filter_all_admins")}</option>
                    {move || {
                        admins
                            .get()
                            .into_iter()
                            .map(|(user_id, label)| {
                                view! { <option value=user_id.to_string()>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    class="filter-select"
                    prop:value=move || action_filter.get()
                    on:change=move |ev| {
                        action_filter.set(event_target_value(&ev));
                        load();
                    }
                >
                    <option value="">{move || t(lang.get(), "adminLogs.filter_all_actions")}</option>
                    {KNOWN_ACTIONS
                        .into_iter()
                        .map(|action| {
                            view! { <option value=action>{action_label(action)}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let list = logs.get();
                    if list.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|log| {
                                let admin_username =
                                    log.admin_username.clone().unwrap_or_else(|| "unknown".to_string());
                                let admin_name = log.admin_name.clone().unwrap_or_default();
                                let badge_class = action_badge_class(&log.action);
                                let action_text = action_label(&log.action);
                                let when = log
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                let target = log.target_user_id.map(|_| {
                                    format!(
                                        "@{} {}",
                                        log.target_username.as_deref().unwrap_or("unknown"),
                                        log.target_name.as_deref().unwrap_or(""),
                                    )
                                });
                                let details: Vec<(String, String)> = log
                                    .details
                                    .as_ref()
                                    .and_then(|v| v.as_object())
                                    .map(|map| {
                                        map.iter()
                                            .map(|(key, value)| {
                                                let rendered = match value.as_str() {
                                                    Some(s) => s.to_string(),
                                                    None => value.to_string(),
                                                };
                                                (key.clone(), rendered)
                                            })
                                            .collect()
                                    })
                                    .unwrap_or_default();
                                view! {
                                    <div class="admin-log-card">
                                        <div class="admin-log-card__header">
                                            <div>
                                                <span class="admin-log-card__admin">
                                                    {format!("@{}", admin_username)}
                                                </span>
                                                <span class="admin-log-card__name">{admin_name}</span>
                                            </div>
                                            <span class=badge_class>{action_text}</span>
                                        </div>
                                        {target
                                            .map(|target_label| {
                                                view! {
                                                    <div class="admin-log-card__target">
                                                        <span class="admin-log-card__target-label">
                                                            {move || {
                                                                format!("{}: ", t(lang.get(), "adminLogs.target"))
                                                            }}
                                                        </span>
                                                        <span>{target_label}</span>
                                                    </div>
                                                }
                                            })}
                                        {if details.is_empty() {
                                            view! { <></> }.into_any()
                                        } else {
                                            view! {
                                                <div class="admin-log-card__details">
                                                    {details
                                                        .into_iter()
                                                        .map(|(key, value)| {
                                                            view! {
                                                                <div class="admin-log-card__detail-row">
                                                                    <strong>{key}</strong>
                                                                    ": "
                                                                    {value}
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                        <div class="admin-log-card__footer">
                                            <span>{format!("📅 {}", when)}</span>
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

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(admin_user_id: i64, username: &str) -> AdminLogEntry {
        AdminLogEntry {
            admin_user_id,
            admin_username: Some(username.to_string()),
            admin_name: Some("Admin".to_string()),
            action: "ban_user".to_string(),
            target_user_id: None,
            target_username: None,
            target_name: None,
            details: None,
            created_at: None,
        }
    }

    #[test]
    fn distinct_admins_dedupes_in_order() {
        let logs = vec![entry(2, "b"), entry(1, "a"), entry(2, "b")];
        let admins = distinct_admins(&logs);
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].0, 2);
        assert_eq!(admins[1].0, 1);
    }

    #[test]
    fn action_labels_are_humanized() {
        assert_eq!(action_label("grant_premium"), "GRANT PREMIUM");
    }

    #[test]
    fn unknown_action_gets_neutral_badge() {
        assert_eq!(action_badge_class("reboot"), "badge badge--neutral");
        assert_eq!(action_badge_class("ban_user"), "badge badge--error");
    }
}
