//! Catalog storage and lazy loading
//!
//! This module owns the in-memory mapping from locale key to its
//! resolved translation tree. Trees are loaded on first access through
//! an injected loader, across zero or more named, prioritized partitions,
//! and deep-merged in ascending priority order. A locale is loaded at
//! most once per store lifetime; loader failures propagate to the caller
//! and are not cached, so a later resolution may retry.

pub mod merge;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::utils::errors::{I18nError, Result};
use merge::deep_merge;

/// Injected fetch function: locator string to raw key-value document
pub type Loader = Box<dyn Fn(&str) -> anyhow::Result<Map<String, Value>> + Send + Sync>;

/// A named, prioritized sub-catalog source
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub priority: i32,
    pub active: bool,
}

/// In-memory catalog with lazy, merge-on-load population
pub struct CatalogStore {
    url_template: String,
    loader: Option<Loader>,
    /// Registration order is significant: it breaks priority ties
    parts: Vec<Part>,
    cache: Mutex<HashMap<String, Arc<Map<String, Value>>>>,
}

impl CatalogStore {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            loader: None,
            parts: Vec::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_loader(&mut self, loader: Loader) {
        self.loader = Some(loader);
    }

    /// Pre-seed resolved trees; keys are normalized to lower-case
    pub fn seed(&mut self, translations: HashMap<String, Map<String, Value>>) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        for (locale, tree) in translations {
            cache.insert(locale.to_lowercase(), Arc::new(tree));
        }
    }

    /// Register a partition, idempotent by name
    ///
    /// Re-registering a known, inactive partition reactivates it without
    /// resetting its priority. Parts registered after a locale was
    /// already resolved do not retroactively re-merge that locale.
    pub fn add_part(&mut self, name: impl Into<String>, priority: i32) {
        let name = name.into();
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(part) => {
                if !part.active {
                    debug!(part = %part.name, priority = part.priority, "partition reactivated");
                    part.active = true;
                }
            }
            None => {
                debug!(part = %name, priority, "partition registered");
                self.parts.push(Part {
                    name,
                    priority,
                    active: true,
                });
            }
        }
    }

    /// Deactivate a partition; parts are never removed
    pub fn disable_part(&mut self, name: &str) {
        if let Some(part) = self.parts.iter_mut().find(|p| p.name == name) {
            part.active = false;
        }
    }

    /// Resolve the translation tree for a locale, loading on first access
    pub fn resolve(&self, locale: &str) -> Result<Arc<Map<String, Value>>> {
        let key = locale.to_lowercase();

        // The lock is held across the load so concurrent first
        // resolutions of the same locale cannot duplicate fetches or
        // observe a partially merged tree.
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tree) = cache.get(&key) {
            return Ok(Arc::clone(tree));
        }

        let tree = Arc::new(self.load_locale(locale)?);
        debug!(locale = %locale, entries = tree.len(), "catalog loaded");
        cache.insert(key, Arc::clone(&tree));
        Ok(tree)
    }

    fn load_locale(&self, locale: &str) -> Result<Map<String, Value>> {
        let mut tree = Map::new();

        if !self.url_template.contains("{part}") {
            let url = self.locator(locale, None);
            deep_merge(&mut tree, fetch(self.require_loader(locale)?, &url)?);
            return Ok(tree);
        }

        // No active partitions means nothing to fetch: the locale
        // resolves to an empty tree and the candidate search misses it.
        for part in self.prioritized_parts() {
            let url = self.locator(locale, Some(&part.name));
            deep_merge(&mut tree, fetch(self.require_loader(locale)?, &url)?);
        }

        Ok(tree)
    }

    /// A loader is mandatory only at the point a fetch is issued
    fn require_loader(&self, locale: &str) -> Result<&Loader> {
        self.loader.as_ref().ok_or_else(|| {
            I18nError::Config(format!(
                "No catalog loader configured and locale '{locale}' is not pre-seeded"
            ))
        })
    }

    /// Active partitions in ascending priority, registration order on ties
    fn prioritized_parts(&self) -> Vec<Part> {
        let mut parts: Vec<Part> = self.parts.iter().filter(|p| p.active).cloned().collect();
        parts.sort_by_key(|p| p.priority);
        parts
    }

    fn locator(&self, locale: &str, part: Option<&str>) -> String {
        let mut url = self
            .url_template
            .replace("{lang}", locale)
            .replace("{locale}", locale);
        if let Some(part) = part {
            url = url.replace("{part}", part);
        }
        url
    }
}

fn fetch(loader: &Loader, url: &str) -> Result<Map<String, Value>> {
    loader(url).map_err(|source| {
        warn!(url = %url, error = %source, "catalog fetch failed");
        I18nError::Load {
            url: url.to_string(),
            source: source.into(),
        }
    })
}
