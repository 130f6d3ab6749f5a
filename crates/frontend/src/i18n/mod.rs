//! Interface language of the panel (not the bot's translation languages).
//!
//! Russian is the default; the choice is persisted in localStorage and
//! switching it re-renders text reactively without re-fetching any data.

mod tables;

use leptos::prelude::*;
use web_sys::window;

pub use tables::t;

/// UI languages of the admin panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lang {
    #[default]
    Ru,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Lang::En,
            _ => Lang::Ru,
        }
    }

    pub fn all() -> [Lang; 2] {
        [Lang::Ru, Lang::En]
    }
}

const LANG_STORAGE_KEY: &str = "admin_language";

fn load_lang_from_storage() -> Lang {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANG_STORAGE_KEY).ok().flatten())
        .map(|s| Lang::from_str(&s))
        .unwrap_or_default()
}

fn save_lang_to_storage(lang: Lang) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.as_str());
    }
}

/// Interface-language context provided at the app root.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub lang: RwSignal<Lang>,
}

impl I18nContext {
    pub fn new() -> Self {
        Self {
            lang: RwSignal::new(load_lang_from_storage()),
        }
    }

    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
        save_lang_to_storage(lang);
    }
}

impl Default for I18nContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to read the interface language context.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Provide it at the app root.")
}
