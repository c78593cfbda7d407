//! The ranked candidate value type produced by expansion.

use std::cmp::Ordering;
use std::fmt;

/// One ranked alternative flat spelling derived from a reading.
///
/// Immutable once created. `weight` is the sum of the per-fragment weights in
/// the history plus any extra weight applied during concatenation; lower
/// weight means more preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    key: String,
    weight: u32,
    history: Vec<u32>,
}

impl Keystroke {
    pub fn new(key: impl Into<String>, weight: u32) -> Self {
        Self {
            key: key.into(),
            weight,
            history: vec![weight],
        }
    }

    /// Concatenate two keystrokes, adding `extra` to the combined weight.
    ///
    /// The suffix contributes its total weight as a single new history entry;
    /// its own per-fragment history is not inlined.
    pub fn concatenate(prefix: &Keystroke, suffix: &Keystroke, extra: u32) -> Keystroke {
        let mut key = String::with_capacity(prefix.key.len() + suffix.key.len());
        key.push_str(&prefix.key);
        key.push_str(&suffix.key);
        let mut history = Vec::with_capacity(prefix.history.len() + 1);
        history.extend_from_slice(&prefix.history);
        history.push(suffix.weight);
        Keystroke {
            key,
            weight: prefix.weight + suffix.weight + extra,
            history,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Ordered per-fragment weights contributing to `weight`, used by the
    /// indexing side to attribute completion candidates.
    pub fn weight_history(&self) -> &[u32] {
        &self.history
    }

    pub fn into_key(self) -> String {
        self.key
    }
}

/// Most-preferred-first total order:
/// 1. ascending total weight;
/// 2. ascending per-position weight over the common history prefix;
/// 3. key descending — the lexicographically greater spelling ranks first.
///    Kept as-is for output compatibility, not a claim about spelling quality;
/// 4. ascending history length, so the order is total and agrees with `Eq`.
///    Rules 1-3 never separate structurally equal keystrokes, and rule 4 only
///    orders entries the earlier rules leave tied.
impl Ord for Keystroke {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| {
                self.history
                    .iter()
                    .zip(&other.history)
                    .map(|(a, b)| a.cmp(b))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.key.cmp(&self.key))
            .then_with(|| self.history.len().cmp(&other.history.len()))
    }
}

impl PartialOrd for Keystroke {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:", self.key, self.weight)?;
        for (i, w) in self.history.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{w}")?;
        }
        write!(f, ")")
    }
}
