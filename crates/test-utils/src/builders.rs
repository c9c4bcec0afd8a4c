#![allow(dead_code)]

use errset::catalog::{Catalog, RawCatalog};
use errset::errors::Result;
use errset::{ErrorValue, Errors};

/// Builder for `RawCatalog` / `Catalog` to simplify test setup.
pub struct CatalogBuilder {
    raw: RawCatalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawCatalog::default(),
        }
    }

    pub fn with_plain(mut self, name: &str, message: &str) -> Self {
        self.raw.plain.insert(name.to_string(), message.to_string());
        self
    }

    pub fn with_kind(mut self, name: &str, pattern: &str) -> Self {
        self.raw.kind.insert(name.to_string(), pattern.to_string());
        self
    }

    pub fn raw(self) -> RawCatalog {
        self.raw
    }

    /// Validate and build; for tests that expect a failure.
    pub fn try_build(self) -> Result<Catalog> {
        Catalog::try_from(self.raw)
    }

    pub fn build(self) -> Catalog {
        self.try_build()
            .expect("Failed to build valid catalogue from builder")
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect `items` into a fresh `Errors`, in order.
pub fn errors_of<I, E>(items: I) -> Errors
where
    I: IntoIterator<Item = E>,
    E: Into<ErrorValue>,
{
    items.into_iter().collect()
}
