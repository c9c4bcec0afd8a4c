// src/catalog/model.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::errors::Result;
use crate::kind::{ErrorKind, ErrorKindInstance};
use crate::plain::PlainError;

/// Catalogue as read from a TOML file, before validation.
///
/// ```toml
/// [plain]
/// not_found = "resource not found"
///
/// [kind]
/// missing_field = "missing field %s"
/// ```
///
/// Both tables are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCatalog {
    /// Plain errors from `[plain]`, keyed by name.
    #[serde(default)]
    pub plain: BTreeMap<String, String>,

    /// Kind patterns from `[kind]`, keyed by name.
    #[serde(default)]
    pub kind: BTreeMap<String, String>,
}

/// A validated catalogue.
///
/// Every kind is created once when the catalogue is built, so looking up the
/// same name twice yields the same kind identity.
#[derive(Debug, Clone)]
pub struct Catalog {
    plain: BTreeMap<String, PlainError>,
    kind: BTreeMap<String, ErrorKind>,
}

impl Catalog {
    /// Build without validation. Use `Catalog::try_from` instead.
    pub(crate) fn new_unchecked(raw: RawCatalog) -> Self {
        Self {
            plain: raw
                .plain
                .into_iter()
                .map(|(name, msg)| (name, PlainError::new(msg)))
                .collect(),
            kind: raw
                .kind
                .into_iter()
                .map(|(name, pattern)| (name, ErrorKind::new(pattern)))
                .collect(),
        }
    }

    /// Parse and validate a catalogue from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(contents)?;
        Catalog::try_from(raw)
    }

    pub fn plain(&self, name: &str) -> Option<&PlainError> {
        self.plain.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<&ErrorKind> {
        self.kind.get(name)
    }

    /// Look up kind `name` and instantiate it. `None` if no such kind.
    pub fn instantiate(
        &self,
        name: &str,
        values: &[&dyn fmt::Display],
    ) -> Option<ErrorKindInstance> {
        self.kind(name).map(|k| k.instantiate(values))
    }

    pub fn plain_names(&self) -> impl Iterator<Item = &str> {
        self.plain.keys().map(String::as_str)
    }

    pub fn kind_names(&self) -> impl Iterator<Item = &str> {
        self.kind.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.kind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
