//! Error handling for traduki
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy. Every failure is an
//! immediately-fatal validation or lookup error; nothing is retried
//! internally (the per-locale fallback search is control flow, not
//! recovery).

use thiserror::Error;

/// Main error type for traduki operations
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("translation id required")]
    IdRequired,

    #[error("translated text required")]
    TranslatedTextRequired,

    #[error("interpolation parameters required")]
    ParametersRequired,

    #[error("pluralization options required")]
    OptionsRequired,

    #[error("alias required")]
    AliasRequired,

    #[error("locale required")]
    LocaleRequired,

    #[error("type not supported for {0}")]
    UnsupportedType(&'static str),

    #[error("translation not found: {id} (tried locales: {tried:?})")]
    TranslationNotFound { id: String, tried: Vec<String> },

    #[error("pluralization rule not found for language: {language}")]
    PluralRuleNotFound { language: String },

    #[error("locale not available: {candidates:?}")]
    LocaleUnavailable { candidates: Vec<String> },

    #[error("unknown alias: {0}")]
    UnknownAlias(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to load catalog from '{url}': {source}")]
    Load {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for traduki operations
pub type Result<T> = std::result::Result<T, I18nError>;
