//! Count-driven pluralization
//!
//! Given a numeric count and a language subtag, a plural rule selects a
//! category key (`zero`, `one`, `few`, ...) out of a category-to-template
//! mapping. The engine then interpolates the selected template with the
//! count. The default rule table ships English and Russian rules; custom
//! rules can be registered per language subtag.

use core::fmt;
use std::collections::HashMap;

use serde_json::{Map, Value};

/// CLDR-style plural categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The category key as used in pluralization maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plural rule mapping an integer count to a category
#[derive(Clone)]
pub enum PluralRule {
    /// English-style: `zero` for 0, `one` for 1, `other` otherwise
    English,
    /// Russian-style: `one`/`few`/`many` by the last digits of the count
    Russian,
    /// Custom rule function
    Custom(fn(i64) -> PluralCategory),
}

impl PluralRule {
    pub fn categorize(&self, count: i64) -> PluralCategory {
        match self {
            Self::English => english_rule(count),
            Self::Russian => russian_rule(count),
            Self::Custom(rule) => rule(count),
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => f.write_str("English"),
            Self::Russian => f.write_str("Russian"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Built-in rule table keyed by lowercased language subtag
pub fn default_rules() -> HashMap<String, PluralRule> {
    let mut rules = HashMap::new();
    rules.insert("en".to_string(), PluralRule::English);
    rules.insert("ru".to_string(), PluralRule::Russian);
    rules
}

fn english_rule(count: i64) -> PluralCategory {
    match count {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        _ => PluralCategory::Other,
    }
}

fn russian_rule(count: i64) -> PluralCategory {
    let n = count.unsigned_abs();
    let last_digit = n % 10;
    let last_two = n % 100;

    if last_digit == 1 && last_two != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two) {
        PluralCategory::Few
    } else if last_digit == 0 || (5..=9).contains(&last_digit) || (11..=14).contains(&last_two) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

/// The material to pluralize: a category map, or a bare template when a
/// custom pluralizer owns the whole job
#[derive(Debug, Clone)]
pub enum PluralSource {
    Forms(Map<String, Value>),
    Template(String),
}

impl From<Map<String, Value>> for PluralSource {
    fn from(forms: Map<String, Value>) -> Self {
        Self::Forms(forms)
    }
}

impl From<&str> for PluralSource {
    fn from(template: &str) -> Self {
        Self::Template(template.to_string())
    }
}

impl From<String> for PluralSource {
    fn from(template: String) -> Self {
        Self::Template(template)
    }
}

/// Pluralization options: a bare count, or a mapping carrying `$count`
/// and optionally `$lang` plus arbitrary values for custom pluralizers
#[derive(Debug, Clone)]
pub enum PluralOptions {
    Count(i64),
    Map(Map<String, Value>),
}

impl PluralOptions {
    pub fn count(&self) -> Option<i64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Map(map) => map.get("$count").and_then(Value::as_i64),
        }
    }

    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Count(_) => None,
            Self::Map(map) => map.get("$lang").and_then(Value::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Count(_) => false,
            Self::Map(map) => map.is_empty(),
        }
    }
}

impl From<i64> for PluralOptions {
    fn from(count: i64) -> Self {
        Self::Count(count)
    }
}

impl From<Map<String, Value>> for PluralOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}
