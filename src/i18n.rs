//! Internationalisation subsystem.
//!
//! Locale data is loaded from Fluent (`.ftl`) files, one per locale, from a
//! configured directory. There is no ambient default: the fallback locale
//! is named explicitly when the data is loaded, and components needing a
//! locale receive one as a parameter.

use fluent::{FluentBundle, FluentResource};
use fluent_bundle::errors::FluentError;
use fluent_bundle::types::FluentValue;
use fluent_syntax::parser::errors::ParserError;
use serde::de::{Deserialize, Deserializer, Error as _};
use std::{
    collections::HashMap,
    fmt::{self, Write as _},
    fs,
    path::Path,
    str::FromStr,
};

#[derive(Clone)]
pub struct I18n<'bundle> {
    locales: &'bundle [Locale<'bundle>],
    default: usize,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LanguageTag(String);

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LanguageRange(String);

pub struct Locale<'bundle> {
    pub code: LanguageTag,
    messages: FluentBundle<'bundle>,
}

impl I18n<'static> {
    /// Load locale data from a directory of `.ftl` files.
    ///
    /// `default` names the locale used when no requested locale matches; it
    /// must be among the loaded ones.
    ///
    /// Note that this function creates static references by leaking memory.
    pub fn load(path: &Path, default: &LanguageTag) -> crate::Result<Self> {
        let mut codes = Vec::new();
        let mut resources = Vec::new();

        let mut entries = fs::read_dir(path)?
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            if !entry.file_type()?.is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "ftl") {
                continue;
            }

            let code: LanguageTag = match path.file_stem() {
                Some(stem) => stem.to_str()
                    .ok_or(I18nError::LocaleNameUtf8)?
                    .parse()?,
                None => continue,
            };

            let source = fs::read_to_string(&path)?;
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    error!("Errors loading locale {}:\n{}",
                        code, format_parse_errors(&errors));

                    resource
                }
            };

            codes.push(code);
            resources.push(resource);
        }

        let resources: &'static [FluentResource] =
            Box::leak(resources.into_boxed_slice());
        let mut locales = Vec::new();

        for (code, resource) in codes.into_iter().zip(resources.iter()) {
            let mut messages = FluentBundle::new(&[code.as_str()]);

            if let Err(errors) = messages.add_resource(resource) {
                error!("Errors loading locale {}:{}",
                    code, format_errors(&errors));
            }

            locales.push(Locale { code, messages });
        }

        let locales: &'static [Locale<'static>] =
            Box::leak(locales.into_boxed_slice());

        let default = locales.iter()
            .position(|locale| locale.code == *default)
            .ok_or_else(|| I18nError::NoDefaultLocale(default.clone()))?;

        Ok(I18n { locales, default })
    }
}

impl<'bundle> I18n<'bundle> {
    /// All loaded locales.
    pub fn locales(&self) -> &'bundle [Locale<'bundle>] {
        self.locales
    }

    /// The configured fallback locale.
    pub fn default_locale(&self) -> &'bundle Locale<'bundle> {
        &self.locales[self.default]
    }

    /// Find a locale by exact tag.
    pub fn locale(&self, code: &LanguageTag)
    -> Option<&'bundle Locale<'bundle>> {
        self.locales.iter().find(|locale| locale.code == *code)
    }

    /// Find the best locale for a list of requested language ranges,
    /// falling back onto the configured default when nothing matches.
    pub fn match_locale(&self, ranges: &[LanguageRange])
    -> &'bundle Locale<'bundle> {
        for range in ranges {
            for pattern in range.fallback_chain() {
                for locale in self.locales.iter() {
                    if locale.code.0 == pattern {
                        return locale;
                    }
                }
            }
        }

        self.default_locale()
    }
}

impl<'bundle> Locale<'bundle> {
    /// Format a message from this locale.
    ///
    /// Returns `None` when the message is missing from the locale's
    /// resources.
    pub fn format(&self, key: &str, args: &HashMap<&str, FluentValue>)
    -> Option<String> {
        let args = if args.is_empty() { None } else { Some(args) };

        let (message, errors) = self.messages.format(key, args)?;
        if !errors.is_empty() {
            warn!("Errors formatting message {} in locale {}:{}",
                key, self.code, format_errors(&errors));
        }

        Some(message)
    }
}

#[derive(Debug, Fail)]
pub enum I18nError {
    #[fail(display = "Locale name is not valid UTF-8")]
    LocaleNameUtf8,
    #[fail(display = "Default locale {} was not loaded", _0)]
    NoDefaultLocale(LanguageTag),
}

impl LanguageTag {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl LanguageRange {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Generate fall-back locale chain for the locale lookup algorithm,
    /// as defined in [RFC 4647, §3.4](
    /// https://tools.ietf.org/html/rfc4647#section-3.4).
    fn fallback_chain(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self.0.as_str()), |prev| {
            let cut = prev.rfind('-')?;
            // A single-character subtag is dropped together with the
            // subtag it prefixes.
            let cut = if cut > 2 && prev.as_bytes()[cut - 2] == b'-' {
                cut - 2
            } else {
                cut
            };
            Some(&prev[..cut])
        })
    }
}

impl fmt::Display for LanguageRange {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

/// Verify the subtag structure of a language tag or range.
fn check_tag(v: &str, allow_wildcard: bool)
-> Result<(), ParseLanguageTagError> {
    let mut offset = 0;

    if v.is_empty() {
        return Err(ParseLanguageTagError::ExpectedSubtag(0));
    }

    for subtag in v.split('-') {
        if subtag.is_empty() {
            return Err(ParseLanguageTagError::ExpectedSubtag(offset));
        }

        if !(allow_wildcard && subtag == "*")
            && !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(ParseLanguageTagError::ExpectedAlphanum(offset));
        }

        offset += subtag.len() + 1;
    }

    Ok(())
}

impl FromStr for LanguageTag {
    type Err = ParseLanguageTagError;

    fn from_str(v: &str) -> Result<LanguageTag, Self::Err> {
        check_tag(v, false)?;
        Ok(LanguageTag(v.to_string()))
    }
}

impl FromStr for LanguageRange {
    type Err = ParseLanguageTagError;

    fn from_str(v: &str) -> Result<LanguageRange, Self::Err> {
        check_tag(v, true)?;
        Ok(LanguageRange(v.to_string()))
    }
}

impl Default for LanguageTag {
    fn default() -> LanguageTag {
        LanguageTag("en".to_string())
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(de: D) -> Result<LanguageTag, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = String::deserialize(de)?;
        v.parse().map_err(D::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, Eq, Fail, PartialEq)]
pub enum ParseLanguageTagError {
    #[fail(display = "{}: expected subtag", _0)]
    ExpectedSubtag(usize),
    #[fail(display = "{}: expected letter or digit", _0)]
    ExpectedAlphanum(usize),
}

fn format_parse_errors(errors: &[ParserError]) -> String {
    let mut result = String::new();

    for error in errors.iter() {
        let _ = write!(result, "\n    {}: {:?}", error.pos.0, error.kind);
    }

    result
}

fn format_errors(errors: &[FluentError]) -> String {
    let mut result = String::new();

    for error in errors.iter() {
        let _ = write!(result, "\n    {}", error);
    }

    result
}
