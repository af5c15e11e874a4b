use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::Result;
use crate::storage::{KeyValueStore, LOCALE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl FromStr for Locale {
    type Err = ();

    /// Accepts bare codes and region-qualified tags (`ar-EG`, `en_US`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stored locale, or `fallback` when absent or unrecognised.
pub fn current_locale<S: KeyValueStore + ?Sized>(storage: &S, fallback: Locale) -> Locale {
    match storage.get(LOCALE_KEY) {
        Some(code) => code.parse().unwrap_or_else(|_| {
            warn!(code = %code, "Unknown stored locale, using fallback.");
            fallback
        }),
        None => fallback,
    }
}

pub fn set_locale<S: KeyValueStore + ?Sized>(storage: &S, locale: Locale) -> Result<()> {
    storage.set(LOCALE_KEY, locale.code())
}

pub fn translate(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).to_string()
}

/// Translates `key` and fills `%{name}` placeholders.
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(locale, key), |text, (name, value)| {
            text.replace(&format!("%{{{name}}}"), value)
        })
}

/// Label resolver for header builders. Rebuild headers with a fresh
/// translator after the locale changes.
pub fn translator(locale: Locale) -> impl Fn(&str) -> String {
    move |key: &str| translate(locale, key)
}
