// src/catalog/validate.rs

use regex::Regex;
use tracing::warn;

use crate::catalog::model::{Catalog, RawCatalog};
use crate::errors::{ErrsetError, Result};
use crate::format::{check_pattern, placeholder_count};

const NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_.-]*$";

impl TryFrom<RawCatalog> for Catalog {
    type Error = ErrsetError;

    fn try_from(raw: RawCatalog) -> std::result::Result<Self, Self::Error> {
        validate_raw_catalog(&raw)?;
        Ok(Catalog::new_unchecked(raw))
    }
}

fn validate_raw_catalog(raw: &RawCatalog) -> Result<()> {
    ensure_has_entries(raw)?;
    validate_names(raw)?;
    validate_plain_messages(raw)?;
    validate_kind_patterns(raw)?;
    Ok(())
}

fn ensure_has_entries(raw: &RawCatalog) -> Result<()> {
    if raw.plain.is_empty() && raw.kind.is_empty() {
        return Err(ErrsetError::ConfigError(
            "catalogue must define at least one [plain] or [kind] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_names(raw: &RawCatalog) -> Result<()> {
    let re = Regex::new(NAME_PATTERN).map_err(anyhow::Error::from)?;

    for name in raw.plain.keys().chain(raw.kind.keys()) {
        if !re.is_match(name) {
            return Err(ErrsetError::InvalidName(format!(
                "'{}' does not match {}",
                name, NAME_PATTERN
            )));
        }
    }

    if let Some(name) = raw.plain.keys().find(|n| raw.kind.contains_key(*n)) {
        return Err(ErrsetError::DuplicateName(format!(
            "'{}' is defined in both [plain] and [kind]",
            name
        )));
    }

    Ok(())
}

fn validate_plain_messages(raw: &RawCatalog) -> Result<()> {
    for (name, message) in raw.plain.iter() {
        if message.trim().is_empty() {
            return Err(ErrsetError::ConfigError(format!(
                "plain error '{}' has an empty message",
                name
            )));
        }
    }
    Ok(())
}

fn validate_kind_patterns(raw: &RawCatalog) -> Result<()> {
    for (name, pattern) in raw.kind.iter() {
        if pattern.trim().is_empty() {
            return Err(ErrsetError::InvalidPattern {
                name: name.clone(),
                reason: "pattern is empty".to_string(),
            });
        }

        check_pattern(pattern).map_err(|reason| ErrsetError::InvalidPattern {
            name: name.clone(),
            reason,
        })?;

        if placeholder_count(pattern) == 0 {
            warn!(kind = %name, "kind pattern has no placeholders; consider a [plain] entry");
        }
    }
    Ok(())
}
