//! Locale candidate resolution
//!
//! This module builds the ordered list of locale keys to try for a
//! lookup and expands each candidate through the configured fallback
//! table. Expansion is deliberately a single hop: a fallback target that
//! itself has a fallback entry is not chased further.

use std::collections::HashMap;

use crate::config::{Fallback, Settings};
use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::is_blank;

/// One locale key or an ordered list of candidates
#[derive(Debug, Clone)]
pub enum LocaleSpec {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for LocaleSpec {
    fn from(locale: &str) -> Self {
        Self::One(locale.to_string())
    }
}

impl From<String> for LocaleSpec {
    fn from(locale: String) -> Self {
        Self::One(locale)
    }
}

impl From<Vec<String>> for LocaleSpec {
    fn from(locales: Vec<String>) -> Self {
        Self::Many(locales)
    }
}

impl From<Vec<&str>> for LocaleSpec {
    fn from(locales: Vec<&str>) -> Self {
        Self::Many(locales.into_iter().map(String::from).collect())
    }
}

/// Builds candidate locale lists and applies fallback expansion
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    locales: Vec<String>,
    fallbacks: HashMap<String, Fallback>,
    preferred: String,
}

impl LocaleResolver {
    pub fn new(settings: &Settings) -> Self {
        Self {
            locales: settings.locales.clone(),
            fallbacks: settings.fallbacks.clone(),
            preferred: settings.preferred.clone(),
        }
    }

    /// Ordered candidates: explicit override, active locale, preferred
    ///
    /// The preferred locale is always included, even when it duplicates
    /// an earlier entry; lookup short-circuits on first hit so the
    /// duplicate is harmless.
    pub fn candidates(&self, explicit: Option<&str>, active: Option<&str>) -> Vec<String> {
        let mut keys = Vec::with_capacity(3);
        if let Some(lang) = explicit {
            keys.push(lang.to_string());
        }
        if let Some(locale) = active {
            keys.push(locale.to_string());
        }
        keys.push(self.preferred.clone());
        keys
    }

    /// Expand one candidate through the fallback table, single hop
    ///
    /// A mapped key replaces the candidate rather than extending it.
    pub fn expand(&self, key: &str) -> Vec<String> {
        match self.fallbacks.get(key) {
            None => vec![key.to_string()],
            Some(Fallback::One(target)) => vec![target.clone()],
            Some(Fallback::Many(targets)) => targets.clone(),
        }
    }

    /// Pick the first candidate present in the allow-list
    ///
    /// Matching is case-insensitive but the chosen key is returned
    /// verbatim as supplied by the caller.
    pub fn select(&self, spec: impl Into<LocaleSpec>) -> Result<String> {
        let candidates = match spec.into() {
            LocaleSpec::One(locale) => vec![locale],
            LocaleSpec::Many(locales) => locales,
        };

        if candidates.is_empty() || candidates.iter().all(|c| is_blank(c)) {
            return Err(I18nError::LocaleRequired);
        }

        for candidate in &candidates {
            if self
                .locales
                .iter()
                .any(|available| available.eq_ignore_ascii_case(candidate))
            {
                return Ok(candidate.clone());
            }
        }

        Err(I18nError::LocaleUnavailable { candidates })
    }
}
