//! Active locale selection against the configured allow-list

use assert_matches::assert_matches;
use traduki::{I18n, I18nError, Settings};

fn engine() -> I18n {
    let settings = Settings {
        locales: vec!["pt-BR".to_string(), "en-US".to_string()],
        ..Settings::default()
    };
    I18n::new(settings).unwrap()
}

#[test]
fn empty_input_is_rejected() {
    let mut i18n = engine();
    assert_matches!(
        i18n.set_locale(Vec::<String>::new()),
        Err(I18nError::LocaleRequired)
    );
    assert_matches!(i18n.set_locale("  "), Err(I18nError::LocaleRequired));
}

#[test]
fn unavailable_locale_is_rejected() {
    let mut i18n = engine();
    assert_matches!(
        i18n.set_locale("not found"),
        Err(I18nError::LocaleUnavailable { .. })
    );
    assert_matches!(
        i18n.set_locale(vec!["not found"]),
        Err(I18nError::LocaleUnavailable { .. })
    );
    assert_eq!(i18n.locale(), None);
}

#[test]
fn single_locale_is_set() {
    let mut i18n = engine();
    i18n.set_locale("pt-BR").unwrap();
    assert_eq!(i18n.locale(), Some("pt-BR"));
}

#[test]
fn first_matching_candidate_wins() {
    let mut i18n = engine();
    i18n.set_locale(vec!["not-found", "pt-BR"]).unwrap();
    assert_eq!(i18n.locale(), Some("pt-BR"));
}

#[test]
fn matching_is_case_insensitive_but_value_kept_verbatim() {
    let mut i18n = engine();
    i18n.set_locale("PT-br").unwrap();
    assert_eq!(i18n.locale(), Some("PT-br"));
}

#[test]
fn last_successful_set_wins() {
    let mut i18n = engine();
    i18n.set_locale("pt-BR").unwrap();
    i18n.set_locale("en-US").unwrap();
    assert_eq!(i18n.locale(), Some("en-US"));

    // A failed attempt leaves the previous value in place
    assert_matches!(
        i18n.set_locale("nope"),
        Err(I18nError::LocaleUnavailable { .. })
    );
    assert_eq!(i18n.locale(), Some("en-US"));
}
