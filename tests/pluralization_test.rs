//! Pluralization branch selection: default rules and the custom engine

mod common;

use assert_matches::assert_matches;
use serde_json::{json, Map, Value};
use traduki::{
    I18n, I18nError, PluralCategory, PluralOptions, PluralRule, PluralSource, Settings,
};

fn forms() -> Map<String, Value> {
    common::tree(json!({
        "zero": "No selected row",
        "one": "1 selected row",
        "other": "{{count}} selected rows"
    }))
}

fn engine() -> I18n {
    I18n::new(Settings::default()).unwrap()
}

#[test]
fn empty_form_is_rejected() {
    let i18n = engine();
    assert_matches!(
        i18n.pluralize(Map::new(), 1),
        Err(I18nError::TranslatedTextRequired)
    );
    assert_matches!(
        i18n.pluralize("  ", 1),
        Err(I18nError::TranslatedTextRequired)
    );
}

#[test]
fn empty_options_are_rejected() {
    let i18n = engine();
    assert_matches!(
        i18n.pluralize(forms(), PluralOptions::Map(Map::new())),
        Err(I18nError::OptionsRequired)
    );
}

#[test]
fn default_engine_needs_a_count() {
    let i18n = engine();
    let options = common::tree(json!({ "$lang": "en-US" }));
    assert_matches!(
        i18n.pluralize(forms(), options),
        Err(I18nError::OptionsRequired)
    );
}

#[test]
fn bare_count_selects_a_category() {
    let i18n = engine();
    assert_eq!(i18n.pluralize(forms(), 0).unwrap(), "No selected row");
    assert_eq!(i18n.pluralize(forms(), 1).unwrap(), "1 selected row");
    assert_eq!(i18n.pluralize(forms(), 10).unwrap(), "10 selected rows");
}

#[test]
fn count_in_options_map_works_too() {
    let i18n = engine();
    let options = |count: i64| common::tree(json!({ "$count": count }));
    assert_eq!(i18n.pluralize(forms(), options(0)).unwrap(), "No selected row");
    assert_eq!(i18n.pluralize(forms(), options(1)).unwrap(), "1 selected row");
    assert_eq!(
        i18n.pluralize(forms(), options(10)).unwrap(),
        "10 selected rows"
    );
}

#[test]
fn unknown_language_has_no_rule() {
    let i18n = engine();
    let options = common::tree(json!({ "$count": 1, "$lang": "es-ES" }));
    match i18n.pluralize(forms(), options) {
        Err(I18nError::PluralRuleNotFound { language }) => assert_eq!(language, "es"),
        other => panic!("expected PluralRuleNotFound, got {other:?}"),
    }
}

#[test]
fn russian_rule_is_built_in() {
    let i18n = engine();
    let ru_forms = common::tree(json!({
        "one": "{{count}} файл",
        "few": "{{count}} файла",
        "many": "{{count}} файлов",
        "other": "{{count}} файлов"
    }));
    let options = |count: i64| common::tree(json!({ "$count": count, "$lang": "ru-RU" }));

    assert_eq!(i18n.pluralize(ru_forms.clone(), options(1)).unwrap(), "1 файл");
    assert_eq!(i18n.pluralize(ru_forms.clone(), options(3)).unwrap(), "3 файла");
    assert_eq!(i18n.pluralize(ru_forms, options(5)).unwrap(), "5 файлов");
}

#[test]
fn registered_rule_extends_the_table() {
    let mut i18n = engine();
    i18n.set_plural_rule(
        "es",
        PluralRule::Custom(|count| {
            if count == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }),
    );

    let es_forms = common::tree(json!({
        "one": "1 fila seleccionada",
        "other": "{{count}} líneas seleccionadas"
    }));
    let options = common::tree(json!({ "$count": 4, "$lang": "es-ES" }));
    assert_eq!(
        i18n.pluralize(es_forms, options).unwrap(),
        "4 líneas seleccionadas"
    );
}

#[test]
fn missing_category_template_is_an_error() {
    let i18n = engine();
    let sparse = common::tree(json!({ "other": "{{count}} rows" }));
    // English rule maps 0 to "zero", which this map does not provide
    assert_matches!(
        i18n.pluralize(sparse, 0),
        Err(I18nError::TranslatedTextRequired)
    );
}

#[test]
fn bare_template_needs_a_custom_engine() {
    let i18n = engine();
    assert_matches!(
        i18n.pluralize("{COUNT, plural, other{# rows}}", 1),
        Err(I18nError::UnsupportedType(_))
    );
}

#[test]
fn custom_engine_rejects_category_maps() {
    let i18n = I18n::new(Settings::default()).unwrap()
        .with_pluralizer(|_lang, template, _options| template.to_string());
    assert_matches!(
        i18n.pluralize(forms(), 1),
        Err(I18nError::UnsupportedType(_))
    );
}

#[test]
fn custom_engine_owns_interpolation() {
    let i18n = I18n::new(Settings::default()).unwrap().with_pluralizer(|lang, template, options| {
        let count = options.count().unwrap_or(0);
        format!("[{lang}] {template} -> {count}")
    });

    // The language subtag is extracted from the explicit $lang
    let options = common::tree(json!({ "$count": 2, "$lang": "pt-BR" }));
    assert_eq!(
        i18n.pluralize("{{count}} rows", options).unwrap(),
        "[pt] {{count}} rows -> 2"
    );
}

#[test]
fn custom_engine_defaults_to_the_preferred_language() {
    let i18n = I18n::new(Settings::default()).unwrap()
        .with_pluralizer(|lang, _template, _options| lang.to_string());
    assert_eq!(i18n.pluralize("rows", 1).unwrap(), "en");
}

#[test]
fn pluralize_accepts_a_translate_result() {
    let settings = Settings::default();
    let i18n = I18n::new(settings).unwrap().with_translations(common::fixture_translations());

    let translated = i18n.translate("text.selectedRow", ()).unwrap();
    assert_eq!(
        i18n.pluralize(PluralSource::from(translated), 0).unwrap(),
        "No selected row"
    );
}
