use crate::i18n::{t, use_i18n};
use crate::layout::use_loading;
use crate::shared::icons::icon;
use crate::telegram;
use crate::users::api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug)]
pub struct MessageTarget {
    pub user_id: i64,
    pub name: String,
}

/// Modal that sends a direct bot message to one user.
#[component]
pub fn SendMessageModal(target: MessageTarget, on_close: Callback<()>) -> impl IntoView {
    let lang = use_i18n().lang;
    let loading = use_loading();

    let text = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);

    let user_id = target.user_id;
    let recipient = format!("{} (ID: {})", target.name, target.user_id);

    let send = move |_| {
        let message = text.get_untracked().trim().to_string();
        if message.is_empty() {
            telegram::show_alert(&format!(
                "{}: Message cannot be empty",
                t(lang.get_untracked(), "message.sent_error")
            ));
            return;
        }
        set_sending.set(true);
        loading.begin();
        spawn_local(async move {
            let result = api::send_message(user_id, message).await;
            loading.end();
            match result {
                Ok(_) => {
                    telegram::show_alert(t(lang.get_untracked(), "message.sent_success"));
                    on_close.run(());
                }
                Err(e) => {
                    set_sending.set(false);
                    telegram::show_alert(&format!(
                        "{}: {}",
                        t(lang.get_untracked(), "message.sent_error"),
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
                    <h2 class="modal-title">{move || t(lang.get(), "message.modal_title")}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>{move || t(lang.get(), "message.recipient")}</Label>
                        <span class="form__static">{recipient}</span>
                    </div>

                    <div class="form__group">
                        <Label>{move || t(lang.get(), "message.text_label")}</Label>
                        <textarea
                            class="form__textarea"
                            rows="4"
                            placeholder=move || t(lang.get(), "message.placeholder")
                            prop:value=move || text.get()
                            on:input=move |ev| text.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || sending.get())
                    >
                        {move || t(lang.get(), "common.cancel")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=send
                        disabled=Signal::derive(move || sending.get())
                    >
                        {move || t(lang.get(), "message.send_btn")}
                    </Button>
                </div>
            </div>
        </div>
    }
}
