//! Translations
//!
//! Dotted-key string tables per language, `{param}` interpolation, and the
//! reactive language context shared by every view.

mod en;
mod pt;

use leptos::prelude::*;
use tracing::warn;

use crate::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷",
            Language::En => "🇺🇸",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Pt => pt::ENTRIES,
            Language::En => en::ENTRIES,
        }
    }
}

pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    lang.table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Replace `{name}` placeholders. Unknown placeholders stay as written.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) if is_word => out.push_str(value),
            _ => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Look up `key` and interpolate. A missing key logs a warning and yields the key.
pub fn translate(lang: Language, key: &str, params: &[(&str, &str)]) -> String {
    match lookup(lang, key) {
        Some(template) => interpolate(template, params),
        None => {
            warn!(key, language = lang.code(), "translation key not found");
            key.to_string()
        }
    }
}

/// Reactive language selection, provided via context
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
}

impl I18n {
    /// Start from the persisted language, falling back to Portuguese
    pub fn from_storage() -> Self {
        let language = storage::get(storage::LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self {
            language: RwSignal::new(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
        storage::set(storage::LANGUAGE_KEY, lang.code());
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key, &[])
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        translate(self.language.get(), key, params)
    }
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(lookup(Language::Pt, "auth.login"), Some("Entrar"));
        assert_eq!(lookup(Language::En, "auth.login"), Some("Login"));
        assert_eq!(lookup(Language::En, "auth"), None);
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(translate(Language::Pt, "landing.appName", &[]), "landing.appName");
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(
            translate(Language::En, "dashboard.welcomeMessage", &[("name", "Ana")]),
            "Welcome, Ana!"
        );
        assert_eq!(
            translate(Language::Pt, "dashboard.welcomeMessage", &[("name", "Ana")]),
            "Bem-vindo, Ana!"
        );
    }

    #[test]
    fn test_interpolation_leaves_unknown_placeholders() {
        assert_eq!(interpolate("Hi {name}, {other}", &[("name", "Bo")]), "Hi Bo, {other}");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("{a b}", &[("a b", "x")]), "{a b}");
        assert_eq!(interpolate("no params", &[]), "no params");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let pt: BTreeSet<_> = pt::ENTRIES.iter().map(|(k, _)| *k).collect();
        let en: BTreeSet<_> = en::ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(pt.len(), pt::ENTRIES.len(), "duplicate key in pt table");
        assert_eq!(en.len(), en::ENTRIES.len(), "duplicate key in en table");
        assert_eq!(pt, en);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Pt);
        assert_eq!(Language::Pt.toggled(), Language::En);
    }
}
