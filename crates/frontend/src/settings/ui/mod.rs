use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::settings::diff::{collect_updates, editor_value};
use crate::settings::{api, diff};
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::settings::{Setting, ValueType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use thaw::*;

/// Category chips, in display order (value, label key).
const CATEGORIES: [(&str, &str); 7] = [
    ("all", "settings.category.all"),
    ("api_keys", "settings.category.api_keys"),
    ("translation", "settings.category.translation"),
    ("voice", "settings.category.voice"),
    ("pricing", "settings.category.pricing"),
    ("limits", "settings.category.limits"),
    ("features", "settings.category.features"),
];

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let settings: RwSignal<Vec<Setting>> = RwSignal::new(Vec::new());
    let edited: RwSignal<HashMap<String, String>> = RwSignal::new(HashMap::new());
    let revealed: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let category = RwSignal::new("all".to_string());
    let forbidden = RwSignal::new(false);

    let load = move || {
        loading.begin();
        let current_category = category.get_untracked();
        spawn_local(async move {
            let result = api::fetch_settings(&current_category).await;
            loading.end();
            match result {
                Ok(data) => {
                    settings.set(data.settings);
                    edited.set(HashMap::new());
                    revealed.set(HashSet::new());
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading settings: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    let save = move |_| {
        let updates =
            settings.with_untracked(|base| edited.with_untracked(|map| collect_updates(base, map)));
        if updates.is_empty() {
            telegram::show_alert(t(lang.get_untracked(), "settings.no_changes"));
            return;
        }
        loading.begin();
        spawn_local(async move {
            let result = api::bulk_update(updates).await;
            loading.end();
            match result {
                Ok(_) => {
                    telegram::show_alert(t(lang.get_untracked(), "settings.saved"));
                    load();
                }
                Err(e) => telegram::show_alert(&format!(
                    "{}: {}",
                    t(lang.get_untracked(), "settings.error"),
                    e
                )),
            }
        });
    };

    let reset = move |key: String| {
        if !telegram::confirm(&format!("Reset setting \"{}\" to .env default?", key)) {
            return;
        }
        loading.begin();
        spawn_local(async move {
            let result = api::reset_setting(&key).await;
            loading.end();
            match result {
                Ok(_) => {
                    telegram::show_alert(&format!("Setting \"{}\" reset to default", key));
                    load();
                }
                Err(e) => telegram::show_alert(&format!("Error resetting setting: {}", e)),
            }
        });
    };

    view! {
        <section class="panel panel--settings">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "settings.title")}</h2>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {move || t(lang.get(), "settings.save")}
                </Button>
            </div>

            <div class="category-chips">
                {CATEGORIES
                    .into_iter()
                    .map(|(value, label_key)| {
                        view! {
                            <button
                                class=move || {
                                    if category.get() == value {
                                        "chip chip--active"
                                    } else {
                                        "chip"
                                    }
                                }
                                on:click=move |_| {
                                    category.set(value.to_string());
                                    load();
                                }
                            >
                                {move || t(lang.get(), label_key)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let current_category = category.get();
                    let visible: Vec<Setting> = settings
                        .get()
                        .into_iter()
                        .filter(|s| current_category == "all" || s.category == current_category)
                        .collect();
                    if visible.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        visible
                            .into_iter()
                            .map(|setting| {
                                let key = setting.key.clone();
                                let reset_key = key.clone();
                                let category_label = setting.category.clone();
                                let description = setting
                                    .description
                                    .clone()
                                    .unwrap_or_else(|| "No description".to_string());
                                view! {
                                    <div class="setting-item">
                                        <div class="setting-item__label">
                                            <strong>{key}</strong>
                                            <small>{description}</small>
                                            <span class="badge badge--neutral">{category_label}</span>
                                        </div>
                                        <div class="setting-item__input">
                                            <SettingEditor
                                                setting=setting
                                                edited=edited
                                                revealed=revealed
                                            />
                                            <button
                                                class="btn btn--secondary"
                                                title="Reset to .env default"
                                                on:click=move |_| reset(reset_key.clone())
                                            >
                                                {icon("refresh")}
                                            </button>
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

/// Input widget for one setting, chosen by its value type. Edits land in
/// the shared `edited` map keyed by setting key.
#[component]
fn SettingEditor(
    setting: Setting,
    edited: RwSignal<HashMap<String, String>>,
    revealed: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let key = setting.key.clone();
    let baseline = editor_value(&setting);

    let current = {
        let key = key.clone();
        let baseline = baseline.clone();
        move || {
            edited
                .with(|map| map.get(&key).cloned())
                .unwrap_or_else(|| baseline.clone())
        }
    };
    let set_value = {
        let key = key.clone();
        move |value: String| {
            edited.update(|map| {
                map.insert(key.clone(), value);
            });
        }
    };

    match setting.value_type {
        ValueType::Boolean => {
            let set_value = set_value.clone();
            view! {
                <input
                    type="checkbox"
                    class="setting-checkbox"
                    prop:checked=move || diff::parse_bool(&current())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_value(if checked { "true".to_string() } else { "false".to_string() });
                    }
                />
            }
            .into_any()
        }
        ValueType::Integer => view! {
            <input
                type="number"
                step="1"
                class="setting-input"
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
        ValueType::Float => view! {
            <input
                type="number"
                step="0.1"
                class="setting-input"
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
        ValueType::Json => view! {
            <textarea
                rows="3"
                class="setting-input setting-input--mono"
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        ValueType::Secret => {
            let toggle_key = key.clone();
            let is_revealed = {
                let key = key.clone();
                move || revealed.with(|set| set.contains(&key))
            };
            let input_type = {
                let is_revealed = is_revealed.clone();
                move || if is_revealed() { "text" } else { "password" }
            };
            view! {
                <input
                    type=input_type
                    class="setting-input setting-input--mono"
                    placeholder="Enter API key..."
                    prop:value=current
                    on:input=move |ev| set_value(event_target_value(&ev))
                />
                <button
                    class="btn btn--secondary"
                    title="Show/Hide"
                    on:click=move |_| {
                        revealed
                            .update(|set| {
                                if !set.remove(&toggle_key) {
                                    set.insert(toggle_key.clone());
                                }
                            })
                    }
                >
                    {icon("eye")}
                </button>
            }
            .into_any()
        }
        ValueType::String => {
            // Provider settings are closed enums; everything else is free text.
            let options: Option<&'static [(&'static str, &'static str)]> = match key.as_str() {
                "asr_api_provider" => Some(&[
                    ("openai", "OpenAI Whisper"),
                    ("google", "Google Speech-to-Text"),
                    ("azure", "Azure Speech"),
                ]),
                "tts_provider" => Some(&[("openai", "OpenAI TTS"), ("elevenlabs", "ElevenLabs")]),
                _ => None,
            };
            match options {
                Some(options) => view! {
                    <select
                        class="setting-input"
                        prop:value=current
                        on:change=move |ev| set_value(event_target_value(&ev))
                    >
                        {options
                            .iter()
                            .map(|(value, label)| {
                                view! { <option value=*value>{*label}</option> }
                            })
                            .collect_view()}
                    </select>
                }
                .into_any(),
                None => view! {
                    <input
                        type="text"
                        class="setting-input"
                        prop:value=current
                        on:input=move |ev| set_value(event_target_value(&ev))
                    />
                }
                .into_any(),
            }
        }
    }
}
