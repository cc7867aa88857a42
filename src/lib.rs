//! Traduki
//!
//! A translation engine that resolves a symbolic message identifier,
//! plus an optional locale and runtime parameters, into a final
//! human-readable string. It provides locale-chain fallback, lazily
//! loaded partitioned translation catalogs, positional/named-parameter
//! interpolation and count-driven pluralization, with injectable
//! loader, interpolator, pluralizer and missing-translation strategies.
//!
//! ```
//! use std::collections::HashMap;
//! use serde_json::{json, Map, Value};
//! use traduki::{I18n, Settings};
//!
//! let tree = match json!({ "entry": { "firstname": "Firstname" } }) {
//!     Value::Object(map) => map,
//!     _ => unreachable!(),
//! };
//! let mut translations = HashMap::new();
//! translations.insert("en-us".to_string(), tree);
//!
//! let i18n = I18n::new(Settings::default()).unwrap().with_translations(translations);
//! assert_eq!(i18n.t("entry.firstname").unwrap(), "Firstname");
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod interpolate;
pub mod locale;
pub mod plural;
pub mod utils;

// Re-export commonly used types
pub use config::{Fallback, Settings};
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use catalog::{CatalogStore, Loader, Part};
pub use engine::{
    AliasSpec, CallArgs, I18n, Interpolator, MissingHandler, Pluralizer, TranslateOptions,
    Translated, TranslationId,
};
pub use interpolate::Params;
pub use locale::{LocaleResolver, LocaleSpec};
pub use plural::{PluralCategory, PluralOptions, PluralRule, PluralSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
