//! Debounced search box: one callback fires after the delay following the
//! last keystroke.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Debounce bookkeeping. Each keystroke takes a fresh generation; a timer
/// delivers its value only if its generation is still the latest when it
/// wakes up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGen(u64);

impl DebounceGen {
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[component]
pub fn SearchInput(
    /// Placeholder text (reactive so it follows the UI language)
    #[prop(into)]
    placeholder: Signal<String>,

    /// Fired once per settled input value
    on_search: Callback<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(String::new());
    let debounce = StoredValue::new(DebounceGen::default());

    let handle_input = move |value: String| {
        input_value.set(value.clone());
        let generation = debounce.try_update_value(|d| d.bump()).unwrap_or_default();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce.with_value(|d| d.is_current(generation)) {
                on_search.run(value);
            }
        });
    };

    let clear = move |_| {
        input_value.set(String::new());
        // A cleared field searches immediately; invalidate pending timers.
        debounce.update_value(|d| {
            d.bump();
        });
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                if input_value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button class="search-input__clear" on:click=clear>
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_generation_fires() {
        let mut debounce = DebounceGen::default();
        let first = debounce.bump();
        let second = debounce.bump();
        let third = debounce.bump();

        // Two earlier timers wake up and must stay silent; only the timer
        // scheduled by the last keystroke delivers.
        assert!(!debounce.is_current(first));
        assert!(!debounce.is_current(second));
        assert!(debounce.is_current(third));
    }

    #[test]
    fn single_keystroke_fires() {
        let mut debounce = DebounceGen::default();
        let only = debounce.bump();
        assert!(debounce.is_current(only));
    }
}
