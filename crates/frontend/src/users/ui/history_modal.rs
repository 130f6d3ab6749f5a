use crate::i18n::{t, use_i18n};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::users::HistoryItem;
use leptos::prelude::*;
use thaw::*;

/// Modal with a user's recent translations.
#[component]
pub fn HistoryModal(items: Vec<HistoryItem>, on_close: Callback<()>) -> impl IntoView {
    let lang = use_i18n().lang;

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || t(lang.get(), "history.title")}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    {if items.is_empty() {
                        view! {
                            <p class="modal-empty">
                                {move || t(lang.get(), "history.no_translations")}
                            </p>
                        }
                        .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| {
                                let when = item
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                let langs = format!(
                                    "{} → {} {}",
                                    item.source_lang.as_deref().unwrap_or("auto"),
                                    item.target_lang.as_deref().unwrap_or("en"),
                                    if item.is_voice { "🎤" } else { "💬" },
                                );
                                view! {
                                    <div class="history-item">
                                        <div class="history-item__meta">
                                            <span>{when}</span>
                                            <span>{langs}</span>
                                        </div>
                                        <div class="history-item__label">
                                            {move || t(lang.get(), "history.original")}
                                        </div>
                                        <div class="history-item__text">
                                            {item.source_text.clone().unwrap_or_default()}
                                        </div>
                                        <div class="history-item__label">
                                            {move || t(lang.get(), "history.translation")}
                                        </div>
                                        <div class="history-item__text history-item__text--translated">
                                            {item.translation.clone().unwrap_or_default()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {move || t(lang.get(), "history.close")}
                    </Button>
                </div>
            </div>
        </div>
    }
}
