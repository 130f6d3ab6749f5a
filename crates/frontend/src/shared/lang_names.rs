//! Display names for the bot's translation-language codes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("en", "English"),
        ("ru", "Русский"),
        ("es", "Español"),
        ("fr", "Français"),
        ("de", "Deutsch"),
        ("it", "Italiano"),
        ("pt", "Português"),
        ("zh", "中文"),
        ("ja", "日本語"),
        ("ko", "한국어"),
        ("ar", "العربية"),
        ("hi", "हिन्दी"),
        ("tr", "Türkçe"),
        ("pl", "Polski"),
        ("uk", "Українська"),
        ("nl", "Nederlands"),
        ("sv", "Svenska"),
        ("cs", "Čeština"),
        ("da", "Dansk"),
        ("fi", "Suomi"),
        ("el", "Ελληνικά"),
        ("he", "עברית"),
        ("id", "Bahasa Indonesia"),
        ("ms", "Bahasa Melayu"),
        ("no", "Norsk"),
        ("ro", "Română"),
        ("sk", "Slovenčina"),
        ("th", "ไทย"),
        ("vi", "Tiếng Việt"),
        ("bg", "Български"),
        ("hr", "Hrvatski"),
        ("hu", "Magyar"),
        ("lt", "Lietuvių"),
        ("lv", "Latviešu"),
        ("sl", "Slovenščina"),
        ("et", "Eesti"),
        ("mk", "Македонски"),
        ("sr", "Српски"),
        ("ca", "Català"),
        ("gl", "Galego"),
        ("eu", "Euskara"),
        ("cy", "Cymraeg"),
        ("is", "Íslenska"),
        ("ga", "Gaeilge"),
        ("mt", "Malti"),
        ("sq", "Shqip"),
        ("az", "Azərbaycan"),
        ("ka", "ქართული"),
        ("hy", "Հայերեն"),
        ("auto", "Auto-detect"),
    ]
    .into_iter()
    .collect()
});

/// Name for a language code; unknown codes are shown uppercased.
pub fn language_name(code: &str) -> String {
    match LANGUAGE_NAMES.get(code) {
        Some(name) => (*name).to_string(),
        None => code.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("auto"), "Auto-detect");
    }

    #[test]
    fn unknown_codes_are_uppercased() {
        assert_eq!(language_name("tlh"), "TLH");
    }
}
