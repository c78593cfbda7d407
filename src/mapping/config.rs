use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct MappingConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("unit {0:?} must be 1 to 3 characters")]
    UnitLength(String),
    #[error("unit {0:?} has no spellings")]
    NoSpellings(String),
    #[error("empty spelling for unit {0:?}")]
    EmptySpelling(String),
    #[error("duplicate spelling {spelling:?} for unit {unit:?}")]
    DuplicateSpelling { unit: String, spelling: String },
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<unit, spellings>`.
///
/// Spellings are ordered most-to-least preferred; position implies weight
/// (index + 1).
pub fn parse_mapping_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(MappingConfigError::Empty);
    }

    for (unit, spellings) in &config.mappings {
        let unit_len = unit.chars().count();
        if unit_len == 0 || unit_len > 3 {
            return Err(MappingConfigError::UnitLength(unit.clone()));
        }
        if spellings.is_empty() {
            return Err(MappingConfigError::NoSpellings(unit.clone()));
        }
        let mut seen = HashSet::new();
        for spelling in spellings {
            if spelling.is_empty() {
                return Err(MappingConfigError::EmptySpelling(unit.clone()));
            }
            if !seen.insert(spelling.as_str()) {
                return Err(MappingConfigError::DuplicateSpelling {
                    unit: unit.clone(),
                    spelling: spelling.clone(),
                });
            }
        }
    }

    Ok(config.mappings)
}
