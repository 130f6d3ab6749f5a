mod assign_modal;

use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::roles::api;
use crate::shared::components::access_denied::AccessDenied;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::telegram;
use assign_modal::{AssignRoleModal, AssignTarget};
use contracts::roles::{AdminRole, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge--error",
        Role::Moderator => "badge badge--info",
        Role::Analyst => "badge badge--success",
    }
}

fn role_badge_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "roles.role_badge_admin",
        Role::Moderator => "roles.role_badge_moderator",
        Role::Analyst => "roles.role_badge_analyst",
    }
}

#[component]
pub fn RolesPanel() -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let admins: RwSignal<Vec<AdminRole>> = RwSignal::new(Vec::new());
    let current_user_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let forbidden = RwSignal::new(false);
    let modal: RwSignal<Option<AssignTarget>> = RwSignal::new(None);

    let load = move || {
        loading.begin();
        spawn_local(async move {
            let result = api::fetch_roles().await;
            loading.end();
            match result {
                Ok(data) => {
                    current_user_id.set(data.current_user.map(|u| u.user_id));
                    admins.set(data.admins);
                    forbidden.set(false);
                }
                Err(e) if e.is_forbidden() => forbidden.set(true),
                Err(e) => telegram::show_alert(&format!("Error loading roles: {}", e)),
            }
        });
    };

    Effect::new(move |_| load());

    let remove_role = move |user_id: i64| {
        if !telegram::confirm(t(lang.get_untracked(), "roles.confirm_remove")) {
            return;
        }
        loading.begin();
        spawn_local(async move {
            let result = api::remove_role(user_id).await;
            loading.end();
            match result {
                Ok(_) => {
                    telegram::show_alert(t(lang.get_untracked(), "roles.success_removed"));
                    load();
                }
                Err(e) => telegram::show_alert(&format!(
                    "{}: {}",
                    t(lang.get_untracked(), "roles.error_remove"),
                    e
                )),
            }
        });
    };

    view! {
        <section class="panel panel--roles">
            <div class="panel__header">
                <h2 class="panel__title">{move || t(lang.get(), "roles.title")}</h2>
                <div class="panel__header-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(Some(AssignTarget::default()))
                    >
                        {icon("plus")}
                        {move || format!(" {}", t(lang.get(), "roles.add_admin"))}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        {move || format!(" {}", t(lang.get(), "roles.refresh"))}
                    </Button>
                </div>
            </div>

            {move || {
                if forbidden.get() {
                    view! { <AccessDenied /> }.into_any()
                } else {
                    let list = admins.get();
                    if list.is_empty() {
                        view! {
                            <p class="panel__empty">{move || t(lang.get(), "common.no_data")}</p>
                        }
                        .into_any()
                    } else {
                        let me = current_user_id.get();
                        list.into_iter()
                            .map(|admin| {
                                let user_id = admin.user_id;
                                let role = admin.role;
                                let is_me = me == Some(user_id);
                                let username =
                                    admin.username.clone().unwrap_or_else(|| "unknown".to_string());
                                let full_name = format!(
                                    "{} {}",
                                    admin.first_name.as_deref().unwrap_or(""),
                                    admin.last_name.as_deref().unwrap_or(""),
                                )
                                .trim()
                                .to_string();
                                let assigned = admin
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                let updated = admin
                                    .updated_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <div class="role-card">
                                        <div class="role-card__header">
                                            <div>
                                                <span class="role-card__username">
                                                    {format!("@{}", username)}
                                                </span>
                                                <span class="role-card__name">{full_name}</span>
                                                <Show when=move || is_me>
                                                    <span class="badge badge--warning">"YOU"</span>
                                                </Show>
                                            </div>
                                            <span class=role_badge_class(role)>
                                                {move || t(lang.get(), role_badge_key(role))}
                                            </span>
                                        </div>
                                        <div class="role-card__info">
                                            <div>{format!("User ID: {}", user_id)}</div>
                                            <div>
                                                {move || {
                                                    format!(
                                                        "{}: {}",
                                                        t(lang.get(), "roles.assigned_date"),
                                                        assigned,
                                                    )
                                                }}
                                            </div>
                                            <div>
                                                {move || {
                                                    format!(
                                                        "{}: {}",
                                                        t(lang.get(), "roles.updated_date"),
                                                        updated,
                                                    )
                                                }}
                                            </div>
                                        </div>
                                        <div class="role-card__actions">
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| {
                                                    modal
                                                        .set(
                                                            Some(AssignTarget {
                                                                existing: Some((user_id, role)),
                                                            }),
                                                        )
                                                }
                                            >
                                                {move || t(lang.get(), "roles.change_role")}
                                            </button>
                                            <Show when=move || !is_me>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| remove_role(user_id)
                                                >
                                                    {move || t(lang.get(), "roles.remove_role")}
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }}

            {move || {
                modal
                    .get()
                    .map(|target| {
                        view! {
                            <AssignRoleModal
                                target=target
                                on_close=Callback::new(move |_| modal.set(None))
                                on_saved=Callback::new(move |_| {
                                    modal.set(None);
                                    load();
                                })
                            />
                        }
                    })
            }}
        </section>
    }
}
