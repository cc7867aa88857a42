//! Helper functions and utilities
//!
//! Small shared helpers for argument validation and value rendering.

use serde_json::Value;

/// Check whether a string is empty or contains only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Extract the primary language subtag from a locale key
///
/// A tag longer than two characters is split on `-`/`_` and the first
/// segment taken (e.g. `"pt-BR"` -> `"pt"`, `"en_US"` -> `"en"`).
/// Two-letter tags are returned as-is.
pub fn language_subtag(locale: &str) -> &str {
    if locale.len() > 2 {
        locale.split(['-', '_']).next().unwrap_or(locale)
    } else {
        locale
    }
}

/// Render a scalar JSON value as interpolation text
///
/// Strings are taken verbatim (no surrounding quotes); other scalars use
/// their JSON representation.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
