//! Parameter interpolation
//!
//! Substitutes positional and named placeholders into a template string.
//! Bare `{}` markers are consumed left to right, one occurrence per
//! positional value; `{{name}}` markers are populated from named values,
//! every occurrence at once. Sequences are flattened depth-first and
//! mappings recurse into nested values under their own names.

use serde_json::{Map, Value};

use crate::utils::helpers::{is_blank, scalar_text};

/// Interpolation parameters: one value, a positional list, or a mapping
#[derive(Debug, Clone)]
pub enum Params {
    Single(Value),
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    /// Whether there is nothing to substitute
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(Value::Null) => true,
            Self::Single(Value::String(s)) => is_blank(s),
            Self::Single(_) => false,
            Self::Positional(values) => values.is_empty(),
            Self::Named(map) => map.is_empty(),
        }
    }

    /// Normalized always-list form handed to a custom interpolator
    pub fn normalized(&self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value.clone()],
            Self::Positional(values) => values.clone(),
            Self::Named(map) => vec![Value::Object(map.clone())],
        }
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Self::Positional(values),
            Value::Object(map) => Self::Named(map),
            scalar => Self::Single(scalar),
        }
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self::Named(map)
    }
}

impl From<&str> for Params {
    fn from(value: &str) -> Self {
        Self::Single(Value::String(value.to_string()))
    }
}

impl From<String> for Params {
    fn from(value: String) -> Self {
        Self::Single(Value::String(value))
    }
}

impl From<i64> for Params {
    fn from(value: i64) -> Self {
        Self::Single(Value::from(value))
    }
}

impl From<f64> for Params {
    fn from(value: f64) -> Self {
        Self::Single(Value::from(value))
    }
}

enum Marker<'a> {
    Positional,
    Named(&'a str),
}

impl Marker<'_> {
    fn substitute(&self, text: &str, value: &str) -> String {
        match self {
            // One occurrence per positional value
            Self::Positional => text.replacen("{}", value, 1),
            // Every occurrence of a named marker at once
            Self::Named(name) => text.replace(&format!("{{{{{name}}}}}"), value),
        }
    }
}

/// Run the built-in substitution pass over a template
pub(crate) fn render(template: &str, params: &Params) -> String {
    match params {
        Params::Single(value) => apply(template.to_string(), value, &Marker::Positional),
        Params::Positional(values) => values
            .iter()
            .fold(template.to_string(), |text, value| {
                apply(text, value, &Marker::Positional)
            }),
        Params::Named(map) => map.iter().fold(template.to_string(), |text, (name, value)| {
            apply(text, value, &Marker::Named(name))
        }),
    }
}

fn apply(text: String, value: &Value, marker: &Marker<'_>) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .fold(text, |text, item| apply(text, item, marker)),
        Value::Object(map) => map.iter().fold(text, |text, (name, nested)| {
            apply(text, nested, &Marker::Named(name))
        }),
        scalar => marker.substitute(&text, &scalar_text(scalar)),
    }
}
