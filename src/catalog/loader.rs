// src/catalog/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::model::{Catalog, RawCatalog};
use crate::errors::Result;

/// Load a catalogue file and return the raw `RawCatalog`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to get
/// a usable [`Catalog`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalog> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawCatalog = toml::from_str(&contents)?;
    debug!(
        path = %path.display(),
        plain = raw.plain.len(),
        kind = raw.kind.len(),
        "catalogue file parsed"
    );

    Ok(raw)
}

/// Load a catalogue file and validate it.
///
/// Checks for:
/// - an empty catalogue,
/// - malformed names and names defined in both tables,
/// - empty messages and malformed kind patterns.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Catalog> {
    let raw = load_from_path(&path)?;
    let catalog = Catalog::try_from(raw)?;
    Ok(catalog)
}
