//! Structured, locale-aware filter options for discovery UIs.
//!
//! A [`FilterOptions`] registry is built per request context: grouped
//! labels depend on the locale and the subtaxon visibility on the request's
//! selection, so instances are never shared across requests. Option sets
//! are memoized per instance because the backing directory and taxonomy
//! queries are expensive and logically immutable within one request.

mod catalog;
mod sources;
mod structured;

pub use self::catalog::CatalogOption;
pub use self::sources::{
    Classification,
    Directory,
    Organisation,
    Person,
    SourceError,
    Taxon,
    Taxonomy,
    WorldLocation,
};
pub use self::structured::{OptionEntry, StructuredOptions, ValueNotFound};

use failure::Fail;
use itertools::Itertools;
use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::Rc,
    str::FromStr,
};

use crate::i18n::Locale;

/// Fluent message providing the "all" label for world locations.
const WORLD_LOCATIONS_ALL: &str = "document-filters-world-locations-all";

/// The fixed set of option names the registry can build.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptionName {
    DocumentType,
    PublicationType,
    Organisations,
    Topics,
    AnnouncementType,
    OfficialDocuments,
    Locations,
    People,
    Taxons,
    Subtaxons,
}

impl OptionName {
    pub const ALL: [OptionName; 10] = [
        OptionName::DocumentType,
        OptionName::PublicationType,
        OptionName::Organisations,
        OptionName::Topics,
        OptionName::AnnouncementType,
        OptionName::OfficialDocuments,
        OptionName::Locations,
        OptionName::People,
        OptionName::Taxons,
        OptionName::Subtaxons,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionName::DocumentType => "document_type",
            OptionName::PublicationType => "publication_type",
            OptionName::Organisations => "organisations",
            OptionName::Topics => "topics",
            OptionName::AnnouncementType => "announcement_type",
            OptionName::OfficialDocuments => "official_documents",
            OptionName::Locations => "locations",
            OptionName::People => "people",
            OptionName::Taxons => "taxons",
            OptionName::Subtaxons => "subtaxons",
        }
    }

    /// The external filter key this option name is published under.
    ///
    /// The mapping is bijective and fixed; [`OptionName::for_filter_key`]
    /// is its inverse.
    pub fn filter_key(self) -> &'static str {
        match self {
            OptionName::DocumentType => "document_type",
            OptionName::PublicationType => "publication_filter_option",
            OptionName::Organisations => "departments",
            OptionName::Topics => "topics",
            OptionName::AnnouncementType => "announcement_filter_option",
            OptionName::OfficialDocuments => "official_document_status",
            OptionName::Locations => "world_locations",
            OptionName::People => "people",
            OptionName::Taxons => "taxons",
            OptionName::Subtaxons => "subtaxons",
        }
    }

    /// Resolve an external filter key back to its option name.
    pub fn for_filter_key(filter_key: &str) -> Option<OptionName> {
        KEY_TO_NAME.get(filter_key).cloned()
    }
}

lazy_static! {
    static ref KEY_TO_NAME: HashMap<&'static str, OptionName> =
        OptionName::ALL.iter()
            .map(|&name| (name.filter_key(), name))
            .collect();
}

impl FromStr for OptionName {
    type Err = UnknownOptionName;

    fn from_str(v: &str) -> Result<OptionName, UnknownOptionName> {
        OptionName::ALL.iter()
            .find(|name| name.as_str() == v)
            .cloned()
            .ok_or_else(|| UnknownOptionName(v.to_string()))
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, Fail, PartialEq)]
#[fail(display = "Unknown option name {}", _0)]
pub struct UnknownOptionName(pub String);

#[derive(Debug, Fail)]
pub enum OptionsError {
    /// The filter key is not one of the registered ones.
    #[fail(display = "Unknown filter key {}", _0)]
    UnknownFilterKey(String),
    /// An external data source failed.
    #[fail(display = "{}", _0)]
    Source(#[cause] SourceError),
}

impl_from! { for OptionsError ;
    SourceError => |e| OptionsError::Source(e),
}

/// Per-request registry of structured filter options.
pub struct FilterOptions<'a> {
    locale: &'a Locale<'a>,
    directory: &'a dyn Directory,
    taxonomy: &'a dyn Taxonomy,
    cache: RefCell<HashMap<OptionName, Rc<StructuredOptions>>>,
}

impl<'a> FilterOptions<'a> {
    pub fn new(
        locale: &'a Locale<'a>,
        directory: &'a dyn Directory,
        taxonomy: &'a dyn Taxonomy,
    ) -> FilterOptions<'a> {
        FilterOptions {
            locale,
            directory,
            taxonomy,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Option set for an option name.
    ///
    /// Computed at most once per registry instance; subsequent calls return
    /// the memoized set. [`OptionName::Subtaxons`] is built for an empty
    /// selection here; use [`FilterOptions::options_for_subtaxons`] to
    /// annotate visibility against a selection.
    pub fn options_for(&self, name: OptionName)
    -> Result<Rc<StructuredOptions>, OptionsError> {
        self.cached(name, || self.build(name))
    }

    /// Option set for all second-level taxons.
    ///
    /// The full subtaxon universe is always returned; each entry carries
    /// `hidden` and `parent-content-id` metadata so a client can cascade
    /// visibility from the selected top-level taxons without another round
    /// trip.
    pub fn options_for_subtaxons(&self, selected_taxons: &[&str])
    -> Result<Rc<StructuredOptions>, OptionsError> {
        self.cached(OptionName::Subtaxons, || {
            self.build_subtaxons(selected_taxons)
        })
    }

    /// Option set for an external filter key.
    pub fn options_for_filter_key(&self, filter_key: &str)
    -> Result<Rc<StructuredOptions>, OptionsError> {
        let name = OptionName::for_filter_key(filter_key)
            .ok_or_else(|| {
                OptionsError::UnknownFilterKey(filter_key.to_string())
            })?;
        self.options_for(name)
    }

    /// Best-effort label lookup for display contexts.
    ///
    /// An unknown filter key or a value present in no option degrades to
    /// `None` instead of failing, so rendering can proceed without the
    /// label. Data-source failures still surface as errors.
    pub fn label_for(&self, filter_key: &str, value: &str)
    -> Result<Option<String>, OptionsError> {
        let options = match self.options_for_filter_key(filter_key) {
            Ok(options) => options,
            Err(OptionsError::UnknownFilterKey(key)) => {
                debug!("no label for {}: unknown filter key {}", value, key);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match options.label_for(value) {
            Ok(label) => Ok(Some(label.to_string())),
            Err(ValueNotFound(_)) => Ok(None),
        }
    }

    /// Are all of the given filter selections labelable?
    ///
    /// True iff every key resolves to an option set and every one of its
    /// values has a label there.
    pub fn valid_resource_filter_options<'v, I, V>(&self, filter_options: I)
    -> Result<bool, OptionsError>
    where
        I: IntoIterator<Item = (&'v str, V)>,
        V: IntoIterator<Item = &'v str>,
    {
        for (key, values) in filter_options {
            for value in values {
                if self.label_for(key, value)?.is_none() {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    pub fn valid_filter_key(filter_key: &str) -> bool {
        OptionName::for_filter_key(filter_key).is_some()
    }

    /// All registered filter keys.
    pub fn valid_keys() -> Vec<&'static str> {
        OptionName::ALL.iter().map(|name| name.filter_key()).collect()
    }

    fn cached<F>(&self, name: OptionName, build: F)
    -> Result<Rc<StructuredOptions>, OptionsError>
    where
        F: FnOnce() -> Result<StructuredOptions, OptionsError>,
    {
        if let Some(options) = self.cache.borrow().get(&name) {
            return Ok(Rc::clone(options));
        }

        let options = Rc::new(build()?);
        self.cache.borrow_mut().insert(name, Rc::clone(&options));

        Ok(options)
    }

    fn build(&self, name: OptionName)
    -> Result<StructuredOptions, OptionsError> {
        match name {
            OptionName::DocumentType => Ok(self.build_document_type()),
            OptionName::PublicationType => Ok(self.build_publication_type()),
            OptionName::Organisations => self.build_organisations(),
            OptionName::Topics => self.build_topics(),
            OptionName::AnnouncementType => Ok(self.build_announcement_type()),
            OptionName::OfficialDocuments =>
                Ok(self.build_official_documents()),
            OptionName::Locations => self.build_locations(),
            OptionName::People => self.build_people(),
            OptionName::Taxons => self.build_taxons(),
            OptionName::Subtaxons => self.build_subtaxons(&[]),
        }
    }

    fn build_organisations(&self)
    -> Result<StructuredOptions, OptionsError> {
        let organisations = self.directory.organisations(&self.locale.code)?;

        let mut grouped = Vec::new();
        for (kind, group) in &organisations.iter()
            .group_by(|organisation| organisation.kind.clone())
        {
            grouped.push((
                kind,
                group.map(|organisation| OptionEntry::new(
                    organisation.name.clone(),
                    organisation.slug.clone(),
                )).collect(),
            ));
        }

        Ok(StructuredOptions::grouped("All departments", grouped))
    }

    fn build_topics(&self) -> Result<StructuredOptions, OptionsError> {
        let classifications = self.directory.classifications()?;

        let mut grouped = Vec::new();
        for (kind, group) in &classifications.iter()
            .group_by(|classification| classification.kind.clone())
        {
            grouped.push((
                kind,
                group.map(|classification| OptionEntry::new(
                    classification.name.clone(),
                    classification.slug.clone(),
                )).collect(),
            ));
        }

        Ok(StructuredOptions::grouped("All policy areas", grouped))
    }

    fn build_taxons(&self) -> Result<StructuredOptions, OptionsError> {
        let taxons = self.taxonomy.ordered_taxons()?;

        let entries = taxons.iter()
            .map(|taxon| OptionEntry::new(
                taxon.name.clone(),
                taxon.content_id.clone(),
            ))
            .collect();

        Ok(StructuredOptions::ungrouped("All topics", entries))
    }

    fn build_subtaxons(&self, selected_taxons: &[&str])
    -> Result<StructuredOptions, OptionsError> {
        let taxons = self.taxonomy.ordered_taxons()?;

        let mut entries = Vec::new();
        for parent in &taxons {
            for child in &parent.children {
                let visible = selected_taxons.iter()
                    .any(|&id| id == parent.content_id);

                entries.push(
                    OptionEntry::new(
                        child.name.clone(),
                        child.content_id.clone(),
                    )
                    .with_meta("hidden", !visible)
                    .with_meta(
                        "parent-content-id",
                        parent.content_id.clone(),
                    ),
                );
            }
        }

        Ok(StructuredOptions::ungrouped("All subtopics", entries))
    }

    fn build_people(&self) -> Result<StructuredOptions, OptionsError> {
        let mut people = self.directory.people()?;
        people.sort_by(|a, b| a.name.cmp(&b.name));

        let entries = people.into_iter()
            .map(|person| OptionEntry::new(person.name, person.slug))
            .collect();

        Ok(StructuredOptions::ungrouped("All people", entries))
    }

    fn build_locations(&self) -> Result<StructuredOptions, OptionsError> {
        let mut locations =
            self.directory.world_locations(&self.locale.code)?;
        locations.sort_by(|a, b| a.name.cmp(&b.name));

        let all_label = self.locale
            .format(WORLD_LOCATIONS_ALL, &HashMap::new())
            .unwrap_or_else(|| {
                warn!("Message {} missing from locale {}",
                    WORLD_LOCATIONS_ALL, self.locale.code);
                "All locations".to_string()
            });

        let entries = locations.into_iter()
            .map(|location| OptionEntry::new(location.name, location.slug))
            .collect();

        Ok(StructuredOptions::ungrouped(all_label, entries))
    }

    fn build_document_type(&self) -> StructuredOptions {
        let entries = catalog::DOCUMENT_TYPES.iter()
            .map(|&(label, value)| OptionEntry::new(label, value))
            .collect();

        StructuredOptions::ungrouped("All document types", entries)
    }

    fn build_official_documents(&self) -> StructuredOptions {
        let entries = catalog::OFFICIAL_DOCUMENT_STATUSES.iter()
            .map(|&(label, value)| OptionEntry::new(label, value))
            .collect();

        StructuredOptions::ungrouped("All documents", entries)
    }

    fn build_publication_type(&self) -> StructuredOptions {
        StructuredOptions::ungrouped(
            "All publication types",
            catalog_entries(catalog::PUBLICATION_TYPES),
        )
    }

    fn build_announcement_type(&self) -> StructuredOptions {
        StructuredOptions::ungrouped(
            "All announcement types",
            catalog_entries(catalog::ANNOUNCEMENT_TYPES),
        )
    }
}

/// Catalog options sorted by label, each carrying its group key so a client
/// can still group them.
fn catalog_entries(options: &'static [CatalogOption]) -> Vec<OptionEntry> {
    let mut options = options.iter().collect::<Vec<_>>();
    options.sort_by(|a, b| a.label.cmp(b.label));

    options.into_iter()
        .map(|option| OptionEntry::new(option.label, option.slug)
            .with_meta("group-key", option.group_key))
        .collect()
}
