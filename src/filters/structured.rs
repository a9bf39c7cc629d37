//! Structured option sets consumed by discovery and filtering UIs.

use serde_json::{Map, Value};

/// An immutable bundle of an "all" label with grouped and/or ungrouped
/// label/value options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StructuredOptions {
    all_label: String,
    grouped: Vec<(String, Vec<OptionEntry>)>,
    ungrouped: Vec<OptionEntry>,
}

/// A single selectable option.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionEntry {
    pub label: String,
    pub value: String,
    /// Open bag of additional data, e.g. client-side visibility hints.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl OptionEntry {
    pub fn new<L, V>(label: L, value: V) -> OptionEntry
    where
        L: Into<String>,
        V: Into<String>,
    {
        OptionEntry {
            label: label.into(),
            value: value.into(),
            meta: Map::new(),
        }
    }

    pub fn with_meta<K, V>(mut self, key: K, value: V) -> OptionEntry
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.meta.insert(key.into(), value.into());
        self
    }
}

impl StructuredOptions {
    /// Build an option set whose entries are grouped under named headings.
    pub fn grouped<L>(all_label: L, grouped: Vec<(String, Vec<OptionEntry>)>)
    -> StructuredOptions
    where
        L: Into<String>,
    {
        StructuredOptions {
            all_label: all_label.into(),
            grouped,
            ungrouped: Vec::new(),
        }
    }

    /// Build a flat option set.
    pub fn ungrouped<L>(all_label: L, entries: Vec<OptionEntry>)
    -> StructuredOptions
    where
        L: Into<String>,
    {
        StructuredOptions {
            all_label: all_label.into(),
            grouped: Vec::new(),
            ungrouped: entries,
        }
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Ordered groups of options, with their headings.
    pub fn groups(&self) -> &[(String, Vec<OptionEntry>)] {
        &self.grouped
    }

    /// Ordered options outside any group.
    pub fn entries(&self) -> &[OptionEntry] {
        &self.ungrouped
    }

    /// Label of the option with the given value, searching grouped entries
    /// first, then ungrouped ones.
    pub fn label_for(&self, value: &str) -> Result<&str, ValueNotFound> {
        self.grouped.iter()
            .flat_map(|(_, entries)| entries.iter())
            .chain(self.ungrouped.iter())
            .find(|entry| entry.value == value)
            .map(|entry| entry.label.as_str())
            .ok_or_else(|| ValueNotFound(value.to_string()))
    }
}

#[derive(Clone, Debug, Eq, Fail, PartialEq)]
#[fail(display = "No option has value {}", _0)]
pub struct ValueNotFound(pub String);
