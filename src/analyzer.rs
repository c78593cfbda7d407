//! Public entry points consumed by the tokenizer/analyzer collaborator.
//!
//! Each call is a pure, synchronous computation over its own local data; the
//! shared mapping table is read-only after init, so callers may run these
//! from any number of threads without locking.

use tracing::{debug, debug_span};

use crate::combine::{combine, ExpandError};
use crate::keystroke::Keystroke;
use crate::mapping::MappingTable;
use crate::ngram;
use crate::segment::segment;
use crate::unicode::hiragana_to_katakana;

/// Expand a reading into at most `max_expansions` ranked keystrokes, best
/// first.
///
/// The reading is hiragana-folded first, since upstream analyzers fall back
/// to hiragana or surface forms for words they cannot read. The folded
/// reading itself is always part of the result as a weight-1 candidate: the
/// analyzer does not always produce a correct reading, so the original input
/// must stay matchable. An empty reading yields an empty result.
pub fn to_keystrokes(
    reading: &str,
    table: &MappingTable,
    max_expansions: usize,
) -> Result<Vec<Keystroke>, ExpandError> {
    if max_expansions == 0 {
        return Err(ExpandError::InvalidMaxExpansions);
    }
    if reading.is_empty() {
        return Ok(Vec::new());
    }
    let _span = debug_span!("to_keystrokes", reading, max_expansions).entered();

    let reading = hiragana_to_katakana(reading);
    let mut keystrokes = combine(&segment(&reading, table), max_expansions)?;

    if !keystrokes.iter().any(|ks| ks.key() == reading) {
        if keystrokes.len() == max_expansions {
            // Full: the self-identity candidate replaces the worst entry so
            // the bound holds.
            keystrokes.pop();
        }
        keystrokes.push(Keystroke::new(reading, 1));
        keystrokes.sort();
    }

    debug!(result_count = keystrokes.len());
    Ok(keystrokes)
}

/// The single globally best keystroke for a reading.
///
/// Exact, not approximate: per-fragment weights are positive and additive,
/// so folding with a one-entry frontier keeps the optimal concatenation.
pub fn to_canonical_keystroke(
    reading: &str,
    table: &MappingTable,
) -> Result<Keystroke, ExpandError> {
    if reading.is_empty() {
        return Err(ExpandError::EmptyReading);
    }
    let _span = debug_span!("to_canonical_keystroke", reading).entered();

    let reading = hiragana_to_katakana(reading);
    let mut best = combine(&segment(&reading, table), 1)?;
    // A non-empty reading always produces at least one fragment.
    best.pop().ok_or(ExpandError::EmptyReading)
}

/// Project ranked keystrokes into their deduplicated edge n-grams.
pub fn to_edge_ngrams(keystrokes: &[Keystroke]) -> Vec<Keystroke> {
    ngram::edge_ngrams(keystrokes)
}
