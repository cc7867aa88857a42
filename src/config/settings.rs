//! Translation engine settings
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A fallback target for a locale key: one substitute or an ordered list
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Fallback {
    One(String),
    Many(Vec<String>),
}

/// Main configuration structure for the translation engine
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog locator template; `{lang}`/`{locale}` and `{part}` are
    /// substituted before the loader is invoked
    pub url_template: String,
    /// Allow-list of locales accepted by `set_locale`
    pub locales: Vec<String>,
    /// Fallback table consulted before catalog lookup
    pub fallbacks: HashMap<String, Fallback>,
    /// Preferred locale, always tried last
    pub preferred: String,
    /// Delimiter for nested translation ids
    pub object_delimiter: String,
    /// Alias table: alias name -> id prefix
    pub aliases: HashMap<String, String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("traduki").required(false))
            .add_source(config::Environment::with_prefix("TRADUKI"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let aliases = ["error", "warn", "success", "info"]
            .iter()
            .map(|name| (name.to_string(), name.to_string()))
            .collect();

        Self {
            url_template: "locales/{lang}/{part}.json".to_string(),
            locales: vec![],
            fallbacks: HashMap::new(),
            preferred: "en-US".to_string(),
            object_delimiter: ".".to_string(),
            aliases,
        }
    }
}
