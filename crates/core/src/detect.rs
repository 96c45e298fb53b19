use thiserror::Error;

use crate::models::{Locale, LocaleMode};

/// Romanized Hindi slang the statistical identifiers consistently misread
/// as some other Latin-script language. Hard-coded to win over the model.
const HINDI_SLANG_PHRASE: &str = "chal nikal";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageIdentError {
    #[error("no alphabetic signal in input text")]
    NoSignal,
    #[error("language identification failed: {0}")]
    Internal(String),
}

/// Seam for the statistical language identifier. Returns an ISO-639 code;
/// errors are the expected soft-failure path for short or ambiguous text.
pub trait LanguageIdent: Send + Sync {
    fn identify(&self, text: &str) -> Result<String, LanguageIdentError>;
}

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// How a locale decision was reached. `DefaultFallback` marks the soft
/// failure path where the identifier errored and English was assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Forced,
    SlangRule,
    Identified,
    DefaultFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDecision {
    pub locale: Locale,
    pub source: LocaleSource,
}

/// Resolve the locale for a message. An explicit mode wins unconditionally;
/// in auto mode the slang rule fires before the identifier runs, and any
/// identifier failure collapses to English. Never fails, never returns a
/// third language.
pub fn detect_locale(mode: LocaleMode, text: &str, ident: &dyn LanguageIdent) -> Locale {
    decide_locale(mode, text, ident).locale
}

pub fn decide_locale(mode: LocaleMode, text: &str, ident: &dyn LanguageIdent) -> LocaleDecision {
    if let Some(locale) = mode.forced_locale() {
        return LocaleDecision {
            locale,
            source: LocaleSource::Forced,
        };
    }

    if text.to_lowercase().contains(HINDI_SLANG_PHRASE) {
        return LocaleDecision {
            locale: Locale::Hi,
            source: LocaleSource::SlangRule,
        };
    }

    match ident.identify(text) {
        Ok(code) => LocaleDecision {
            locale: if code == "hi" { Locale::Hi } else { Locale::En },
            source: LocaleSource::Identified,
        },
        Err(_) => LocaleDecision {
            locale: Locale::En,
            source: LocaleSource::DefaultFallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIdent(&'static str);

    impl LanguageIdent for FixedIdent {
        fn identify(&self, _text: &str) -> Result<String, LanguageIdentError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingIdent;

    impl LanguageIdent for FailingIdent {
        fn identify(&self, _text: &str) -> Result<String, LanguageIdentError> {
            Err(LanguageIdentError::NoSignal)
        }
    }

    #[test]
    fn explicit_mode_overrides_text_content() {
        let ident = FixedIdent("hi");
        assert_eq!(
            detect_locale(LocaleMode::English, "chal nikal bhai", &ident),
            Locale::En
        );
        assert_eq!(
            detect_locale(LocaleMode::Hindi, "plain english text", &ident),
            Locale::Hi
        );
    }

    #[test]
    fn slang_phrase_wins_before_the_identifier_runs_any_case() {
        let ident = FixedIdent("en");
        assert_eq!(
            detect_locale(LocaleMode::Auto, "CHAL NIKAL bhai", &ident),
            Locale::Hi
        );
    }

    #[test]
    fn third_language_collapses_to_english() {
        let ident = FixedIdent("fr");
        assert_eq!(
            detect_locale(LocaleMode::Auto, "bonjour mon ami", &ident),
            Locale::En
        );
    }

    #[test]
    fn identifier_failure_defaults_to_english() {
        assert_eq!(
            detect_locale(LocaleMode::Auto, "???", &FailingIdent),
            Locale::En
        );
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  where  is\tmy\norder "), "where is my order");
    }
}
