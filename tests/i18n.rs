//! Tests for locale data loading and matching.

use gazette::i18n::{LanguageRange, LanguageTag};
use std::collections::HashMap;

mod common;

use self::common::i18n;

#[test]
fn locales_load_from_the_locale_directory() {
    let i18n = i18n();

    let codes = i18n.locales().iter()
        .map(|locale| locale.code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(codes, ["cy", "en"]);
    assert_eq!(i18n.default_locale().code.as_str(), "en");
}

#[test]
fn requested_languages_match_through_their_fallback_chains() {
    let i18n = i18n();

    let ranges: Vec<LanguageRange> = vec!["cy-GB".parse().unwrap()];
    assert_eq!(i18n.match_locale(&ranges).code.as_str(), "cy");

    // Nothing matches German; the configured default wins.
    let ranges: Vec<LanguageRange> = vec!["de-DE".parse().unwrap()];
    assert_eq!(i18n.match_locale(&ranges).code.as_str(), "en");
}

#[test]
fn messages_format_per_locale() {
    let i18n = i18n();

    let locale = i18n.locale(&"cy".parse::<LanguageTag>().unwrap()).unwrap();
    assert_eq!(
        locale.format("document-filters-world-locations-all", &HashMap::new()),
        Some("Pob lleoliad".to_string()),
    );
    assert_eq!(locale.format("no-such-message", &HashMap::new()), None);
}
