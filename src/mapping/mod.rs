//! The phonetic-unit-to-spellings mapping table.
//!
//! Loaded once from TOML, expanded for multi-character units, then shared
//! immutably across arbitrarily many concurrent callers. Follows the same
//! OnceLock pattern as the rest of the crate's embedded configuration:
//! `init_custom(toml_content)` before the first `global()` call overrides the
//! embedded default table.

mod config;
mod expand;

pub use config::{parse_mapping_toml, MappingConfigError};

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::keystroke::Keystroke;

pub const DEFAULT_MAPPING_TOML: &str = include_str!("default_mapping.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct MappingTable {
    entries: HashMap<String, Vec<Keystroke>>,
}

impl MappingTable {
    /// Build a table from TOML text, running multi-character unit expansion.
    ///
    /// Every declared multi-character unit ends up with its raw candidates
    /// followed by candidates synthesized from its constituent units, weight
    /// numbering continuing after the raw ones, duplicates collapsed to the
    /// best weight.
    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        let raw = config::parse_mapping_toml(toml_str)?;

        let mut entries: HashMap<String, Vec<Keystroke>> = raw
            .iter()
            .map(|(unit, spellings)| {
                let candidates = spellings
                    .iter()
                    .enumerate()
                    .map(|(i, s)| Keystroke::new(s.clone(), i as u32 + 1))
                    .collect();
                (unit.clone(), candidates)
            })
            .collect();

        // Expand 2-character units first, then 3-character units, so the
        // longer keys reuse the just-expanded shorter entries instead of
        // recomputing them.
        for unit_len in [2, 3] {
            expand::expand_units(&mut entries, unit_len);
        }

        debug!(unit_count = entries.len(), "mapping table built");
        Ok(Self { entries })
    }

    /// Set custom TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        config::parse_mapping_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide shared table.
    pub fn global() -> &'static MappingTable {
        static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_MAPPING_TOML);
            MappingTable::from_toml(toml_str).expect("mapping TOML must be valid")
        })
    }

    /// Candidate spellings for a declared unit, best first.
    pub fn lookup(&self, unit: &str) -> Option<&[Keystroke]> {
        self.entries.get(unit).map(Vec::as_slice)
    }

    /// Derive the candidate list for a multi-character unit on demand,
    /// whether or not the unit is declared, by concatenating the expansions
    /// of its constituent units. Returns `None` for single-character units
    /// absent from the table and for units with no covered split.
    pub fn expand_unit(&self, unit: &str) -> Option<Vec<Keystroke>> {
        let unit_len = unit.chars().count();
        if unit_len <= 1 {
            return self.entries.get(unit).cloned();
        }
        expand::derive_unit(&self.entries, unit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &HashMap<String, Vec<Keystroke>> {
        &self.entries
    }
}
