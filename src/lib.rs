//! Keystroke expansion engine for Japanese completion suggesters.
//!
//! Converts a phonetic reading (mostly katakana, possibly interleaved with
//! other text) into a bounded, ranked set of alternative flat spellings
//! ("keystrokes"), plus canonical-keystroke and edge-n-gram views, so a
//! completion index can match typed input across scripts.
//!
//! The mapping table is built once (`MappingTable::global()` or an explicit
//! `MappingTable::from_toml`) and shared immutably; every expansion call is a
//! pure computation bounded by its `max_expansions` argument.

pub mod analyzer;
pub mod combine;
pub mod keystroke;
pub mod mapping;
pub mod ngram;
pub mod segment;
pub mod unicode;

pub use analyzer::{to_canonical_keystroke, to_edge_ngrams, to_keystrokes};
pub use combine::{combine, ExpandError};
pub use keystroke::Keystroke;
pub use mapping::{MappingConfigError, MappingTable};
pub use ngram::edge_ngrams;
pub use segment::{segment, Fragment};
