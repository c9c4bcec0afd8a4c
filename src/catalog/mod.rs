// src/catalog/mod.rs

//! Named error catalogues loaded from TOML.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a catalogue file from disk (`loader.rs`).
//! - Validate names and kind patterns (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{Catalog, RawCatalog};
