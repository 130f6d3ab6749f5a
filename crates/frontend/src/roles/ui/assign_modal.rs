use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::roles::api;
use crate::shared::icons::icon;
use crate::telegram;
use contracts::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// What the modal edits: a fresh assignment, or an existing admin whose
/// id stays fixed.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssignTarget {
    pub existing: Option<(i64, Role)>,
}

fn role_option_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "roles.role_admin",
        Role::Moderator => "roles.role_moderator",
        Role::Analyst => "roles.role_analyst",
    }
}

#[component]
pub fn AssignRoleModal(
    target: AssignTarget,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let editing = target.existing.is_some();
    let user_id_input = RwSignal::new(
        target
            .existing
            .map(|(id, _)| id.to_string())
            .unwrap_or_default(),
    );
    let role_value = RwSignal::new(
        target
            .existing
            .map(|(_, role)| role)
            .unwrap_or(Role::Analyst)
            .as_str()
            .to_string(),
    );
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        let user_id = match user_id_input.get_untracked().trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                telegram::show_alert("Please enter a valid User ID");
                return;
            }
        };
        let role = Role::from_str(&role_value.get_untracked()).unwrap_or(Role::Analyst);

        set_saving.set(true);
        loading.begin();
        spawn_local(async move {
            let result = api::assign_role(user_id, role).await;
            loading.end();
            match result {
                Ok(_) => {
                    telegram::show_alert(t(lang.get_untracked(), "roles.success_assigned"));
                    on_saved.run(());
                }
                Err(e) => {
                    set_saving.set(false);
                    telegram::show_alert(&format!(
                        "{}: {}",
                        t(lang.get_untracked(), "roles.error_assign"),
                        e
                    ));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || t(lang.get(), "roles.modal_title")}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>{move || t(lang.get(), "roles.user_id_label")}</Label>
                        <Input
                            value=user_id_input
                            placeholder="123456789"
                            disabled=Signal::derive(move || editing || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>{move || t(lang.get(), "roles.role_label")}</Label>
                        <select
                            class="form__select"
                            prop:value=move || role_value.get()
                            on:change=move |ev| role_value.set(event_target_value(&ev))
                        >
                            {Role::all()
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option value=role.as_str()>
                                            {move || t(lang.get(), role_option_key(role))}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || t(lang.get(), "common.cancel")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || t(lang.get(), "roles.assign_btn")}
                    </Button>
                </div>
            </div>
        </div>
    }
}
