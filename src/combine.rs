//! Online bounded folding of per-fragment candidates into ranked keystrokes.

use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, debug_span};

use crate::keystroke::Keystroke;
use crate::segment::Fragment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("max_expansions must be greater than zero")]
    InvalidMaxExpansions,
    #[error("reading is empty")]
    EmptyReading,
}

/// Bounded working set of partial keystrokes.
///
/// The heap's max element is the worst-ranked entry under the keystroke
/// ordering, so a full frontier evicts its worst member whenever a better
/// candidate arrives. Working memory never exceeds `cap` entries regardless
/// of input length or per-fragment fan-out.
pub(crate) struct Frontier {
    heap: BinaryHeap<Keystroke>,
    cap: usize,
}

impl Frontier {
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            cap,
        }
    }

    pub(crate) fn insert(&mut self, ks: Keystroke) {
        if self.heap.len() < self.cap {
            self.heap.push(ks);
        } else if let Some(worst) = self.heap.peek() {
            if ks < *worst {
                self.heap.pop();
                self.heap.push(ks);
            }
        }
    }

    /// Fold one fragment into the frontier: cross every held prefix with
    /// every candidate, keeping only the best `cap` results. An empty
    /// frontier (first fragment) seeds directly from the candidates.
    pub(crate) fn append(self, candidates: &[Keystroke], extra: u32) -> Frontier {
        let mut next = Frontier::new(self.cap);
        if self.heap.is_empty() {
            for suffix in candidates {
                next.insert(suffix.clone());
            }
            return next;
        }
        for prefix in &self.heap {
            for suffix in candidates {
                next.insert(Keystroke::concatenate(prefix, suffix, extra));
            }
        }
        next
    }

    /// Drain into a best-first list with duplicate spellings collapsed to
    /// their best-ranked instance.
    pub(crate) fn into_ranked(self) -> Vec<Keystroke> {
        let mut best: HashMap<String, Keystroke> = HashMap::with_capacity(self.heap.len());
        for ks in self.heap.into_vec() {
            match best.get_mut(ks.key()) {
                Some(current) => {
                    if ks < *current {
                        *current = ks;
                    }
                }
                None => {
                    let key = ks.key().to_owned();
                    best.insert(key, ks);
                }
            }
        }
        let mut ranked: Vec<Keystroke> = best.into_values().collect();
        ranked.sort();
        ranked
    }
}

/// Fold the fragments left to right into at most `max_expansions` ranked
/// keystrokes, best first. Duplicate spellings arising from different
/// derivation paths are collapsed to the best-ranked instance.
pub fn combine(
    fragments: &[Fragment],
    max_expansions: usize,
) -> Result<Vec<Keystroke>, ExpandError> {
    if max_expansions == 0 {
        return Err(ExpandError::InvalidMaxExpansions);
    }
    let _span = debug_span!("combine", fragment_count = fragments.len(), max_expansions).entered();

    let mut frontier = Frontier::new(max_expansions);
    for fragment in fragments {
        frontier = frontier.append(fragment.candidates(), 0);
    }

    let ranked = frontier.into_ranked();
    debug!(result_count = ranked.len());
    Ok(ranked)
}
