//! Shared fixtures for the integration test suites.
#![allow(dead_code)]

use gazette::{
    access::AccessGate,
    capabilities::DocumentKind,
    filters::{
        Classification,
        Directory,
        Organisation,
        Person,
        SourceError,
        Taxon,
        Taxonomy,
        WorldLocation,
    },
    i18n::{I18n, LanguageTag, Locale},
    models::{Document, User},
};
use std::cell::Cell;
use std::path::Path;

pub fn user(name: &str) -> User {
    User::new(name)
}

pub fn document(kind: DocumentKind, slug: &str, author: &User) -> Document {
    Document::new(kind, slug, "Test title", "Test body", author)
}

/// A gate that lets anyone publish anything.
pub struct OpenGate;

impl AccessGate for OpenGate {
    fn publishable_by(&self, _: &Document, _: &User) -> bool {
        true
    }

    fn denial_reason(&self, _: &Document, _: &User) -> String {
        String::new()
    }
}

/// A gate that refuses everyone with a fixed reason.
pub struct ClosedGate(pub &'static str);

impl AccessGate for ClosedGate {
    fn publishable_by(&self, _: &Document, _: &User) -> bool {
        false
    }

    fn denial_reason(&self, _: &Document, _: &User) -> String {
        self.0.to_string()
    }
}

/// Canned directory data, counting queries so memoization is observable.
#[derive(Default)]
pub struct TestDirectory {
    pub organisation_queries: Cell<u32>,
}

impl Directory for TestDirectory {
    fn organisations(&self, _: &LanguageTag)
    -> Result<Vec<Organisation>, SourceError> {
        self.organisation_queries.set(self.organisation_queries.get() + 1);

        Ok(vec![
            organisation("Attorney General's Office",
                "attorney-generals-office", "Ministerial department"),
            organisation("Cabinet Office",
                "cabinet-office", "Ministerial department"),
            organisation("Environment Agency",
                "environment-agency", "Non-departmental public body"),
        ])
    }

    fn classifications(&self)
    -> Result<Vec<Classification>, SourceError> {
        Ok(vec![
            classification("Business and enterprise",
                "business-and-enterprise", "Policy area"),
            classification("Schools", "schools", "Policy area"),
        ])
    }

    fn people(&self) -> Result<Vec<Person>, SourceError> {
        // Deliberately unsorted.
        Ok(vec![
            person("Winston Peters", "winston-peters"),
            person("Ada Lovelace", "ada-lovelace"),
        ])
    }

    fn world_locations(&self, _: &LanguageTag)
    -> Result<Vec<WorldLocation>, SourceError> {
        // Deliberately unsorted.
        Ok(vec![
            location("Zimbabwe", "zimbabwe"),
            location("Austria", "austria"),
        ])
    }
}

pub struct TestTaxonomy;

impl Taxonomy for TestTaxonomy {
    fn ordered_taxons(&self) -> Result<Vec<Taxon>, SourceError> {
        Ok(vec![
            Taxon {
                name: "Education".to_string(),
                content_id: "education".to_string(),
                children: vec![
                    Taxon {
                        name: "Funding".to_string(),
                        content_id: "education-funding".to_string(),
                        children: Vec::new(),
                    },
                    Taxon {
                        name: "Schools".to_string(),
                        content_id: "education-schools".to_string(),
                        children: Vec::new(),
                    },
                ],
            },
            Taxon {
                name: "Transport".to_string(),
                content_id: "transport".to_string(),
                children: vec![
                    Taxon {
                        name: "Aviation".to_string(),
                        content_id: "transport-aviation".to_string(),
                        children: Vec::new(),
                    },
                ],
            },
        ])
    }
}

/// Load the crate's locale data with English as the default.
pub fn i18n() -> I18n<'static> {
    I18n::load(Path::new("locales"), &tag("en"))
        .expect("locale data should load")
}

pub fn locale(i18n: &I18n<'static>, code: &str) -> &'static Locale<'static> {
    i18n.locale(&tag(code)).expect("locale should be loaded")
}

pub fn tag(code: &str) -> LanguageTag {
    code.parse().expect("valid language tag")
}

fn organisation(name: &str, slug: &str, kind: &str) -> Organisation {
    Organisation {
        name: name.to_string(),
        slug: slug.to_string(),
        kind: kind.to_string(),
    }
}

fn classification(name: &str, slug: &str, kind: &str) -> Classification {
    Classification {
        name: name.to_string(),
        slug: slug.to_string(),
        kind: kind.to_string(),
    }
}

fn person(name: &str, slug: &str) -> Person {
    Person {
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

fn location(name: &str, slug: &str) -> WorldLocation {
    WorldLocation {
        name: name.to_string(),
        slug: slug.to_string(),
    }
}
