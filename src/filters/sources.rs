//! Boundary contracts for the external data the option builders read.
//!
//! Directory lookups and taxonomy traversal are expensive and owned by
//! other systems; the registry only depends on the interfaces below and
//! surfaces their failures synchronously, without retrying.

use failure::Fail;

use crate::i18n::LanguageTag;

#[derive(Clone, Debug)]
pub struct Organisation {
    pub name: String,
    pub slug: String,
    /// Organisation type, e.g. "Ministerial department". Used as a group
    /// heading.
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct Classification {
    pub name: String,
    pub slug: String,
    /// Classification type, used as a group heading.
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct Person {
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug)]
pub struct WorldLocation {
    /// Display name in the locale it was requested for.
    pub name: String,
    pub slug: String,
}

/// A node of the topic taxonomy.
#[derive(Clone, Debug)]
pub struct Taxon {
    pub name: String,
    pub content_id: String,
    pub children: Vec<Taxon>,
}

pub trait Directory {
    /// Organisations ordered by type, then by name within a type.
    fn organisations(&self, locale: &LanguageTag)
    -> Result<Vec<Organisation>, SourceError>;

    /// Classifications ordered by type, then by name within a type.
    fn classifications(&self) -> Result<Vec<Classification>, SourceError>;

    fn people(&self) -> Result<Vec<Person>, SourceError>;

    fn world_locations(&self, locale: &LanguageTag)
    -> Result<Vec<WorldLocation>, SourceError>;
}

pub trait Taxonomy {
    /// Top-level taxons of the topic taxonomy, in tree order.
    fn ordered_taxons(&self) -> Result<Vec<Taxon>, SourceError>;
}

/// Failure of an external data source.
#[derive(Debug, Fail)]
#[fail(display = "filter data source error: {}", _0)]
pub struct SourceError(String);

impl SourceError {
    pub fn new<S>(message: S) -> SourceError
    where
        S: Into<String>,
    {
        SourceError(message.into())
    }
}
