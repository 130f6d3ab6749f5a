use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::logs::api;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::logs::TranslationLog;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// First 50 characters of the source text, the way the log list previews it.
fn preview(text: &str) -> String {
    format!("{}...", text.chars().take(50).collect::<String>())
}

#[component]
pub fn LogsPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let logs: RwSignal<Vec<TranslationLog>> = RwSignal::new(Vec::new());
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        let (filter_value, search_value) =
            (filter.get_untracked(), search.get_untracked().trim().to_string());
        spawn_local(async move {
            let result = api::fetch_logs(&filter_value, &search_value).await;
            loading.end();
            match result {
                Ok(data) => {
                    logs.set(data.logs);
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading logs: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    view! {
        <section class="panel panel--logs">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "logs.title")}</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    {move || format!(" {}", t(lang.get(), "logs.refresh"))}
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
                    <option value="">{move || t(lang.get(), "logs.filter_all")}</option>
                    <option value="voice">{move || t(lang.get(), "logs.filter_voice")}</option>
                    <option value="text">{move || t(lang.get(), "logs.filter_text")}</option>
                </select>
                <SearchInput
                    placeholder=Signal::derive(move || t(lang.get(), "logs.search").to_string())
                    on_search=Callback::new(move |term: String| {
                        search.set(term);
                        load();
                    })
                />
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let entries = logs.get();
                    if entries.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        entries
                            .into_iter()
                            .map(|log| {
                                let username = log
                                    .username
                                    .clone()
                                    .filter(|s| !s.is_empty())
                                    .unwrap_or_else(|| "User".to_string());
                                let when = log
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                let langs = format!(
                                    "{} → {} {}",
                                    log.source_lang.as_deref().unwrap_or("auto"),
                                    log.target_lang.as_deref().unwrap_or("en"),
                                    if log.is_voice { "🎤" } else { "💬" },
                                );
                                let text = preview(log.source_text.as_deref().unwrap_or(""));
                                view! {
                                    <div class="log-card">
                                        <div class="log-card__header">
                                            <span class="log-card__user">{username}</span>
                                            <span class="log-card__date">{when}</span>
                                        </div>
                                        <div class="log-card__body">
                                            <span>{langs}</span>
                                            <div class="log-card__preview">{text}</div>
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
    use super::preview;

    #[test]
    fn preview_truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), 53); // 50 + "..."
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn preview_is_char_boundary_safe() {
        let cyrillic = "привет".repeat(20);
        let cut = preview(&cyrillic);
        assert_eq!(cut.chars().count(), 53);
    }
}
