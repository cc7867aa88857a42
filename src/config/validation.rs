//! Configuration validation module
//!
//! This module provides validation functions for engine configuration
//! to ensure all required settings are properly configured.

use super::{Fallback, Settings};
use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::is_blank;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_resolution(settings)?;
    validate_fallbacks(settings)?;
    validate_aliases(settings)?;

    Ok(())
}

/// Validate the lookup-related settings
fn validate_resolution(settings: &Settings) -> Result<()> {
    if is_blank(&settings.preferred) {
        return Err(I18nError::Config(
            "Preferred locale is required".to_string(),
        ));
    }

    if settings.object_delimiter.is_empty() {
        return Err(I18nError::Config(
            "Object delimiter is required".to_string(),
        ));
    }

    if is_blank(&settings.url_template) {
        return Err(I18nError::Config("URL template is required".to_string()));
    }

    if settings.locales.iter().any(|l| is_blank(l)) {
        return Err(I18nError::Config(
            "Locale allow-list entries must not be blank".to_string(),
        ));
    }

    Ok(())
}

/// Validate the fallback table
fn validate_fallbacks(settings: &Settings) -> Result<()> {
    for (key, fallback) in &settings.fallbacks {
        if is_blank(key) {
            return Err(I18nError::Config(
                "Fallback keys must not be blank".to_string(),
            ));
        }

        let empty = match fallback {
            Fallback::One(target) => is_blank(target),
            Fallback::Many(targets) => {
                targets.is_empty() || targets.iter().any(|t| is_blank(t))
            }
        };

        if empty {
            return Err(I18nError::Config(format!(
                "Fallback target for '{key}' must not be empty"
            )));
        }
    }

    Ok(())
}

/// Validate the alias table
fn validate_aliases(settings: &Settings) -> Result<()> {
    for (name, prefix) in &settings.aliases {
        if is_blank(name) || is_blank(prefix) {
            return Err(I18nError::Config(
                "Alias names and prefixes must not be blank".to_string(),
            ));
        }
    }

    Ok(())
}
