mod history_modal;
mod send_message_modal;
mod state;

use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::telegram;
use crate::users::api;
use contracts::users::{HistoryItem, User};
use history_modal::HistoryModal;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_message_modal::{MessageTarget, SendMessageModal};
use state::{create_state, PER_PAGE};
use thaw::*;

#[component]
pub fn UsersPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let state = create_state();
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let forbidden = RwSignal::new(false);
    let history: RwSignal<Option<Vec<HistoryItem>>> = RwSignal::new(None);
    let message_target: RwSignal<Option<MessageTarget>> = RwSignal::new(None);

    let load = move |page: u32| {
        loading.begin();
        let (search, premium_only) = state.with_untracked(|s| (s.search.clone(), s.premium_only));
        spawn_local(async move {
            let result = api::fetch_users(page, PER_PAGE, &search, premium_only).await;
            loading.end();
            match result {
                Ok(data) => {
                    state.update(|s| {
                        s.page = data.page;
                        s.per_page = data.per_page;
                        s.total = data.total;
                    });
                    users.set(data.users);
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading users: {}", e)),
            }
        });
    };

    Effect::new(move |_| load(1));

    let reload_current = move || load(state.with_untracked(|s| s.page));

    let view_history = move |user_id: i64| {
        loading.begin();
        spawn_local(async move {
            let result = api::fetch_history(user_id, 10).await;
            loading.end();
            match result {
                Ok(data) => history.set(Some(data.history)),
                Err(e) => telegram::show_alert(&format!("Error loading history: {}", e)),
            }
        });
    };

    let grant_premium = move |user_id: i64| {
        loading.begin();
        spawn_local(async move {
            let result = api::grant_premium(user_id).await;
            loading.end();
            match result {
                Ok(ack) => {
                    telegram::show_alert(
                        ack.message.as_deref().unwrap_or("Premium granted for 1 day!"),
                    );
                    reload_current();
                }
                Err(e) => telegram::show_alert(&format!("Error: {}", e)),
            }
        });
    };

    let toggle_block = move |user_id: i64, currently_blocked: bool| {
        loading.begin();
        spawn_local(async move {
            let result = if currently_blocked {
                api::unblock_user(user_id).await
            } else {
                api::block_user(user_id).await
            };
            loading.end();
            match result {
                Ok(ack) => {
                    let fallback = if currently_blocked {
                        "User unblocked successfully!"
                    } else {
                        "User blocked successfully!"
                    };
                    telegram::show_alert(ack.message.as_deref().unwrap_or(fallback));
                    reload_current();
                }
                Err(e) => telegram::show_alert(&format!("Error: {}", e)),
            }
        });
    };

    view! {
        <section class="panel panel--users">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "users.title")}</h2>
                <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload_current()
                >
                    {icon("refresh")}
                    {move || format!(" {}", t(lang.get(), "users.refresh"))}
                </Button>
            </div>

            <div class="filter-panel">
                <SearchInput
                    placeholder=Signal::derive(move || t(lang.get(), "users.search").to_string())
                    on_search=Callback::new(move |term: String| {
                        state.update(|s| s.search = term);
                        load(1);
                    })
                />
                <label class="filter-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.premium_only)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|s| s.premium_only = checked);
                            load(1);
                        }
                    />
                    <span>{move || t(lang.get(), "users.filter_premium")}</span>
                </label>
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    view! {
                        <div class="user-list">
                            <For
                                each=move || users.get()
                                key=|u| u.id
                                children=move |user| {
                                    let user_id = user.id;
                                    let is_premium = user.is_premium;
                                    let is_blocked = user.is_blocked;
                                    let display = user.display_name().to_string();
                                    let message_name = display.clone();
                                    let total_translations = user.total_translations;
                                    let joined = user
                                        .created_at
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class=if is_blocked {
                                            "user-card user-card--blocked"
                                        } else {
                                            "user-card"
                                        }>
                                            <div class="user-card__header">
                                                <span class="user-card__name">{display}</span>
                                                <div class="user-card__badges">
                                                    <Show when=move || is_premium>
                                                        <span class="badge badge--premium">
                                                            {move || t(lang.get(), "users.premium_badge")}
                                                        </span>
                                                    </Show>
                                                    <Show when=move || is_blocked>
                                                        <span class="badge badge--error">
                                                            {move || t(lang.get(), "users.blocked_badge")}
                                                        </span>
                                                    </Show>
                                                </div>
                                            </div>
                                            <div class="user-card__info">
                                                {move || format!(
                                                    "ID: {} | {}: {} | {}: {}",
                                                    user_id,
                                                    t(lang.get(), "users.translations"),
                                                    total_translations,
                                                    t(lang.get(), "users.joined"),
                                                    joined,
                                                )}
                                            </div>
                                            <div class="user-card__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| view_history(user_id)
                                                >
                                                    {move || t(lang.get(), "users.view")}
                                                </button>
                                                <Show when=move || !is_premium>
                                                    <button
                                                        class="btn btn--secondary"
                                                        on:click=move |_| grant_premium(user_id)
                                                    >
                                                        {move || t(lang.get(), "users.grant_premium")}
                                                    </button>
                                                </Show>
                                                <button
                                                    class="btn btn--accent"
                                                    on:click=move |_| {
                                                        message_target
                                                            .set(
                                                                Some(MessageTarget {
                                                                    user_id,
                                                                    name: message_name.clone(),
                                                                }),
                                                            )
                                                    }
                                                >
                                                    {move || t(lang.get(), "users.send_message")}
                                                </button>
                                                {move || {
                                                    if is_blocked {
                                                        view! {
                                                            <button
                                                                class="btn btn--success"
                                                                on:click=move |_| toggle_block(user_id, true)
                                                            >
                                                                {move || t(lang.get(), "users.unblock")}
                                                            </button>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| toggle_block(user_id, false)
                                                            >
                                                                {move || t(lang.get(), "users.block")}
                                                            </button>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>

                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                            on_page_change=Callback::new(move |page| load(page))
                        />
                    }
                    .into_any()
                }
            }}

            {move || {
                history
                    .get()
                    .map(|items| {
                        view! {
                            <HistoryModal
                                items=items
                                on_close=Callback::new(move |_| history.set(None))
                            />
                        }
                    })
            }}

            {move || {
                message_target
                    .get()
                    .map(|target| {
                        view! {
                            <SendMessageModal
                                target=target
                                on_close=Callback::new(move |_| message_target.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
