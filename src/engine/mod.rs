//! Translation engine
//!
//! The public-facing orchestrator. Wires locale resolution, catalog
//! loading, pluralization and interpolation behind a single entry point:
//! `translate` resolves a symbolic id to its raw value, `get` is the
//! convenience wrapper that also routes pluralization maps through the
//! plural resolver and applies interpolation parameters.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::config::Settings;
use crate::interpolate::{self, Params};
use crate::locale::{LocaleResolver, LocaleSpec};
use crate::plural::{default_rules, PluralOptions, PluralRule, PluralSource};
use crate::utils::errors::{I18nError, Result};
use crate::utils::helpers::{is_blank, language_subtag};

/// Custom interpolation hook: receives the already-interpolated text and
/// the normalized parameter list; its return value is the final output
pub type Interpolator = Box<dyn Fn(&str, &[Value]) -> String + Send + Sync>;

/// Custom pluralization hook: receives the language subtag, the raw
/// template and the options, and owns interpolation entirely
pub type Pluralizer = Box<dyn Fn(&str, &str, &PluralOptions) -> String + Send + Sync>;

/// Invoked when no candidate locale yields a value; the default raises
/// `TranslationNotFound`
pub type MissingHandler = Box<dyn Fn(&str, &[String]) -> Result<String> + Send + Sync>;

/// A symbolic message identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationId {
    /// A dot-delimited path, e.g. `"entry.firstname"`
    Path(String),
    /// Several paths translated independently into a batch result
    Sequence(Vec<String>),
    /// A wrapper exposing a single inner path
    Wrapped(String),
}

impl TranslationId {
    pub fn wrapped(id: impl Into<String>) -> Self {
        Self::Wrapped(id.into())
    }
}

impl From<&str> for TranslationId {
    fn from(id: &str) -> Self {
        Self::Path(id.to_string())
    }
}

impl From<String> for TranslationId {
    fn from(id: String) -> Self {
        Self::Path(id)
    }
}

impl From<Vec<String>> for TranslationId {
    fn from(ids: Vec<String>) -> Self {
        Self::Sequence(ids)
    }
}

impl From<Vec<&str>> for TranslationId {
    fn from(ids: Vec<&str>) -> Self {
        Self::Sequence(ids.into_iter().map(String::from).collect())
    }
}

/// A resolved translation value
#[derive(Debug, Clone, PartialEq)]
pub enum Translated {
    /// A plain template string
    Text(String),
    /// A pluralization map (category name to template)
    Plural(Map<String, Value>),
    /// Per-id results for a sequence lookup, keyed by the original path
    Batch(HashMap<String, Translated>),
}

impl Translated {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Translated> for PluralSource {
    fn from(translated: Translated) -> Self {
        match translated {
            Translated::Plural(forms) => Self::Forms(forms),
            Translated::Text(template) => Self::Template(template),
            // A batch cannot be pluralized; an empty template trips the
            // mandatory-text validation downstream
            Translated::Batch(_) => Self::Template(String::new()),
        }
    }
}

/// Per-call translation options
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Explicit locale override, tried before the active locale
    pub lang: Option<String>,
    /// Count for pluralization-map results
    pub count: Option<i64>,
}

impl TranslateOptions {
    pub fn lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            count: None,
        }
    }

    pub fn count(count: i64) -> Self {
        Self {
            lang: None,
            count: Some(count),
        }
    }

    pub fn and_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }
}

impl From<()> for TranslateOptions {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<&str> for TranslateOptions {
    fn from(lang: &str) -> Self {
        Self::lang(lang)
    }
}

impl From<String> for TranslateOptions {
    fn from(lang: String) -> Self {
        Self::lang(lang)
    }
}

/// Arguments to the `get` convenience entry point: optional
/// interpolation parameters plus per-call options
///
/// A mapping carrying `$lang` and/or `$count` converts to options rather
/// than interpolation data, mirroring the catalog wire contract.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub params: Option<Params>,
    pub options: TranslateOptions,
}

impl From<()> for CallArgs {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<TranslateOptions> for CallArgs {
    fn from(options: TranslateOptions) -> Self {
        Self {
            params: None,
            options,
        }
    }
}

impl From<Params> for CallArgs {
    fn from(params: Params) -> Self {
        Self {
            params: Some(params),
            options: TranslateOptions::default(),
        }
    }
}

impl From<(Params, TranslateOptions)> for CallArgs {
    fn from((params, options): (Params, TranslateOptions)) -> Self {
        Self {
            params: Some(params),
            options,
        }
    }
}

impl From<i64> for CallArgs {
    fn from(value: i64) -> Self {
        Params::from(value).into()
    }
}

impl From<f64> for CallArgs {
    fn from(value: f64) -> Self {
        Params::from(value).into()
    }
}

impl From<&str> for CallArgs {
    fn from(value: &str) -> Self {
        Params::from(value).into()
    }
}

impl From<String> for CallArgs {
    fn from(value: String) -> Self {
        Params::from(value).into()
    }
}

impl From<Vec<Value>> for CallArgs {
    fn from(values: Vec<Value>) -> Self {
        Params::from(values).into()
    }
}

impl From<Map<String, Value>> for CallArgs {
    fn from(map: Map<String, Value>) -> Self {
        if map.contains_key("$lang") || map.contains_key("$count") {
            return Self {
                params: None,
                options: TranslateOptions {
                    lang: map.get("$lang").and_then(Value::as_str).map(String::from),
                    count: map.get("$count").and_then(Value::as_i64),
                },
            };
        }
        Params::Named(map).into()
    }
}

impl From<Value> for CallArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into(),
            Value::Array(values) => values.into(),
            scalar => Params::Single(scalar).into(),
        }
    }
}

/// Alias registration input: one name used as its own prefix, or a
/// name-to-prefix table
#[derive(Debug, Clone)]
pub enum AliasSpec {
    Name(String),
    Table(HashMap<String, String>),
}

impl From<&str> for AliasSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AliasSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<HashMap<String, String>> for AliasSpec {
    fn from(table: HashMap<String, String>) -> Self {
        Self::Table(table)
    }
}

/// The translation engine
pub struct I18n {
    settings: Settings,
    resolver: LocaleResolver,
    store: CatalogStore,
    locale: Option<String>,
    aliases: HashMap<String, String>,
    plural_rules: HashMap<String, PluralRule>,
    interpolator: Option<Interpolator>,
    pluralizer: Option<Pluralizer>,
    missing_handler: MissingHandler,
}

impl Default for I18n {
    fn default() -> Self {
        Self::assemble(Settings::default())
    }
}

impl I18n {
    /// Build an engine, rejecting invalid settings up front
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::assemble(settings))
    }

    fn assemble(settings: Settings) -> Self {
        let resolver = LocaleResolver::new(&settings);
        let store = CatalogStore::new(settings.url_template.clone());
        let aliases = settings.aliases.clone();

        Self {
            settings,
            resolver,
            store,
            locale: None,
            aliases,
            plural_rules: default_rules(),
            interpolator: None,
            pluralizer: None,
            missing_handler: Box::new(|id, tried| {
                Err(I18nError::TranslationNotFound {
                    id: id.to_string(),
                    tried: tried.to_vec(),
                })
            }),
        }
    }

    /// Inject the catalog loader
    pub fn with_loader<F>(mut self, loader: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<Map<String, Value>> + Send + Sync + 'static,
    {
        self.store.set_loader(Box::new(loader));
        self
    }

    /// Pre-seed translation trees, keyed by locale (case-insensitive)
    pub fn with_translations(mut self, translations: HashMap<String, Map<String, Value>>) -> Self {
        self.store.seed(translations);
        self
    }

    /// Install a custom interpolation hook
    pub fn with_interpolator<F>(mut self, interpolator: F) -> Self
    where
        F: Fn(&str, &[Value]) -> String + Send + Sync + 'static,
    {
        self.interpolator = Some(Box::new(interpolator));
        self
    }

    /// Install a custom pluralization engine
    pub fn with_pluralizer<F>(mut self, pluralizer: F) -> Self
    where
        F: Fn(&str, &str, &PluralOptions) -> String + Send + Sync + 'static,
    {
        self.pluralizer = Some(Box::new(pluralizer));
        self
    }

    /// Override the not-found behavior (all other errors stay fatal)
    pub fn with_missing_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &[String]) -> Result<String> + Send + Sync + 'static,
    {
        self.missing_handler = Box::new(handler);
        self
    }

    /// The active locale, verbatim as accepted by `set_locale`
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Set the active locale from one candidate or an ordered list
    pub fn set_locale(&mut self, locale: impl Into<LocaleSpec>) -> Result<()> {
        let selected = self.resolver.select(locale)?;
        info!(locale = %selected, "active locale set");
        self.locale = Some(selected);
        Ok(())
    }

    /// Register a catalog partition (idempotent by name)
    pub fn add_part(&mut self, name: impl Into<String>, priority: i32) {
        self.store.add_part(name, priority);
    }

    /// Deactivate a partition without removing it
    pub fn disable_part(&mut self, name: &str) {
        self.store.disable_part(name);
    }

    /// Extend or override the plural rule table for a language subtag
    pub fn set_plural_rule(&mut self, language: &str, rule: PluralRule) {
        self.plural_rules.insert(language.to_lowercase(), rule);
    }

    /// Resolve a translation id to its raw value
    pub fn translate(
        &self,
        id: impl Into<TranslationId>,
        options: impl Into<TranslateOptions>,
    ) -> Result<Translated> {
        let options = options.into();
        match id.into() {
            TranslationId::Sequence(ids) => {
                if ids.is_empty() {
                    return Err(I18nError::IdRequired);
                }
                let mut results = HashMap::with_capacity(ids.len());
                for path in ids {
                    let value = self.translate_path(&path, &options)?;
                    results.insert(path, value);
                }
                Ok(Translated::Batch(results))
            }
            TranslationId::Path(path) | TranslationId::Wrapped(path) => {
                self.translate_path(&path, &options)
            }
        }
    }

    /// Convenience entry point: translate, pluralize maps, interpolate
    pub fn get(&self, id: impl Into<TranslationId>, args: impl Into<CallArgs>) -> Result<String> {
        let args = args.into();
        let translated = self.translate(id, args.options.clone())?;

        let text = match translated {
            Translated::Text(text) => text,
            Translated::Plural(forms) => {
                let count = args.options.count.ok_or(I18nError::OptionsRequired)?;
                let mut options = Map::new();
                options.insert("$count".to_string(), Value::from(count));
                if let Some(lang) = &args.options.lang {
                    options.insert("$lang".to_string(), Value::from(lang.clone()));
                }
                self.pluralize(PluralSource::Forms(forms), PluralOptions::Map(options))?
            }
            Translated::Batch(_) => {
                return Err(I18nError::UnsupportedType("batch translation result"))
            }
        };

        match args.params {
            Some(params) if !params.is_empty() => self.interpolate(&text, params),
            _ => Ok(text),
        }
    }

    /// Shorthand for `get(id, ())`
    pub fn t(&self, id: &str) -> Result<String> {
        self.get(id, ())
    }

    /// Shorthand for a count-driven lookup
    pub fn tp(&self, id: &str, count: i64) -> Result<String> {
        self.get(id, TranslateOptions::count(count))
    }

    /// Substitute positional and named placeholders into a template
    pub fn interpolate(&self, template: &str, params: impl Into<Params>) -> Result<String> {
        if is_blank(template) {
            return Err(I18nError::TranslatedTextRequired);
        }
        let params = params.into();
        if params.is_empty() {
            return Err(I18nError::ParametersRequired);
        }

        let text = interpolate::render(template, &params);
        match &self.interpolator {
            Some(custom) => Ok(custom(&text, &params.normalized())),
            None => Ok(text),
        }
    }

    /// Select a pluralization branch for a count and render it
    pub fn pluralize(
        &self,
        form: impl Into<PluralSource>,
        options: impl Into<PluralOptions>,
    ) -> Result<String> {
        let form = form.into();
        let options = options.into();

        match &form {
            PluralSource::Template(template) if is_blank(template) => {
                return Err(I18nError::TranslatedTextRequired)
            }
            PluralSource::Forms(forms) if forms.is_empty() => {
                return Err(I18nError::TranslatedTextRequired)
            }
            _ => {}
        }
        if options.is_empty() {
            return Err(I18nError::OptionsRequired);
        }

        let locale = options
            .lang()
            .map(str::to_string)
            .or_else(|| self.locale.clone())
            .unwrap_or_else(|| self.settings.preferred.clone());
        let language = language_subtag(&locale).to_string();

        match (&self.pluralizer, form) {
            (Some(custom), PluralSource::Template(template)) => {
                Ok(custom(&language, &template, &options))
            }
            (Some(_), PluralSource::Forms(_)) => {
                Err(I18nError::UnsupportedType("translated text with custom pluralization"))
            }
            (None, PluralSource::Template(_)) => {
                Err(I18nError::UnsupportedType("translated text with default pluralization"))
            }
            (None, PluralSource::Forms(forms)) => {
                let count = options.count().ok_or(I18nError::OptionsRequired)?;
                let rule = self.plural_rules.get(&language.to_lowercase()).ok_or_else(|| {
                    I18nError::PluralRuleNotFound {
                        language: language.clone(),
                    }
                })?;

                let category = rule.categorize(count);
                let template = forms
                    .get(category.as_str())
                    .and_then(Value::as_str)
                    .ok_or(I18nError::TranslatedTextRequired)?;

                let mut params = Map::new();
                params.insert("count".to_string(), Value::from(count));
                self.interpolate(template, Params::Named(params))
            }
        }
    }

    /// Register aliases: a single name used as its own prefix, or a
    /// name-to-prefix table
    pub fn alias(&mut self, aliases: impl Into<AliasSpec>) -> Result<()> {
        match aliases.into() {
            AliasSpec::Name(name) => {
                if is_blank(&name) {
                    return Err(I18nError::AliasRequired);
                }
                self.aliases.insert(name.clone(), name);
            }
            AliasSpec::Table(table) => {
                if table.is_empty() {
                    return Err(I18nError::AliasRequired);
                }
                for (name, prefix) in table {
                    if is_blank(&name) || is_blank(&prefix) {
                        return Err(I18nError::AliasRequired);
                    }
                    self.aliases.insert(name, prefix);
                }
            }
        }
        Ok(())
    }

    /// Look up through a registered alias: `prefix + delimiter + id`
    pub fn aliased(&self, name: &str, id: &str, args: impl Into<CallArgs>) -> Result<String> {
        let prefix = self
            .aliases
            .get(name)
            .ok_or_else(|| I18nError::UnknownAlias(name.to_string()))?;
        let full = format!("{prefix}{}{id}", self.settings.object_delimiter);
        self.get(full.as_str(), args)
    }

    /// Conventional severity lookup under the `error` alias
    pub fn error(&self, id: &str, args: impl Into<CallArgs>) -> Result<String> {
        self.aliased("error", id, args)
    }

    /// Conventional severity lookup under the `warn` alias
    pub fn warn(&self, id: &str, args: impl Into<CallArgs>) -> Result<String> {
        self.aliased("warn", id, args)
    }

    /// Conventional severity lookup under the `success` alias
    pub fn success(&self, id: &str, args: impl Into<CallArgs>) -> Result<String> {
        self.aliased("success", id, args)
    }

    /// Conventional severity lookup under the `info` alias
    pub fn info(&self, id: &str, args: impl Into<CallArgs>) -> Result<String> {
        self.aliased("info", id, args)
    }

    fn translate_path(&self, id: &str, options: &TranslateOptions) -> Result<Translated> {
        if is_blank(id) {
            return Err(I18nError::IdRequired);
        }

        let candidates = self
            .resolver
            .candidates(options.lang.as_deref(), self.locale.as_deref());

        for candidate in &candidates {
            for key in self.resolver.expand(candidate) {
                if let Some(value) = self.lookup(id, &key)? {
                    return match value {
                        Value::String(text) => Ok(Translated::Text(text)),
                        Value::Object(forms) => Ok(Translated::Plural(forms)),
                        _ => Err(I18nError::UnsupportedType("resolved translation value")),
                    };
                }
            }
        }

        debug!(id = %id, tried = ?candidates, "translation missing, invoking handler");
        (self.missing_handler)(id, &candidates).map(Translated::Text)
    }

    /// Walk the id's delimited segments through a locale's tree
    fn lookup(&self, id: &str, locale: &str) -> Result<Option<Value>> {
        let tree = self.store.resolve(locale)?;

        let mut current: Option<&Value> = None;
        for segment in id.split(self.settings.object_delimiter.as_str()) {
            let next = match current {
                None => tree.get(segment),
                Some(Value::Object(map)) => map.get(segment),
                Some(_) => None,
            };
            match next {
                Some(value) => current = Some(value),
                None => return Ok(None),
            }
        }

        Ok(current.filter(|value| !value.is_null()).cloned())
    }
}
