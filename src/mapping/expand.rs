//! Multi-character unit expansion.
//!
//! A 2- or 3-character unit keeps its declared candidates and gains
//! synthesized ones built by concatenating the expansions of its constituent
//! splits. Synthesized weights continue after the declared candidates: each
//! concatenation carries the worst declared weight as extra weight.

use std::collections::HashMap;

use crate::combine::Frontier;
use crate::keystroke::Keystroke;

/// Cap on intermediate candidates while expanding a single table entry.
const MAX_UNIT_EXPANSIONS: usize = 256;

/// Replace every declared entry of `unit_len` characters with its expanded
/// candidate list. Run for length 2 before length 3: same-length entries
/// never reference each other, and length 3 reuses the expanded length-2
/// entries through its (1,2) and (2,1) splits.
pub(crate) fn expand_units(entries: &mut HashMap<String, Vec<Keystroke>>, unit_len: usize) {
    let targets: Vec<String> = entries
        .keys()
        .filter(|unit| unit.chars().count() == unit_len)
        .cloned()
        .collect();

    let mut expanded = Vec::with_capacity(targets.len());
    for unit in targets {
        if let Some(candidates) = derive_unit(entries, &unit) {
            expanded.push((unit, candidates));
        }
    }
    for (unit, candidates) in expanded {
        entries.insert(unit, candidates);
    }
}

/// Derive the full candidate list for a multi-character unit: declared
/// candidates (if any) merged with combinations synthesized from every
/// covered split, duplicate spellings collapsed to the best-ranked instance,
/// sorted best first, histories squashed to a single entry.
///
/// Returns `None` when the unit is undeclared and no split is covered.
pub(crate) fn derive_unit(
    entries: &HashMap<String, Vec<Keystroke>>,
    unit: &str,
) -> Option<Vec<Keystroke>> {
    let chars: Vec<char> = unit.chars().collect();
    if !(2..=3).contains(&chars.len()) {
        return None;
    }

    let raw = entries.get(unit);
    // Weight numbering of synthesized candidates continues after the
    // declared ones.
    let base_weight = raw.and_then(|c| c.last()).map_or(0, Keystroke::weight);

    let mut frontier = Frontier::new(MAX_UNIT_EXPANSIONS);
    let mut covered = false;
    for split in 1..chars.len() {
        let left_unit: String = chars[..split].iter().collect();
        let right_unit: String = chars[split..].iter().collect();
        let (Some(left), Some(right)) = (entries.get(&left_unit), entries.get(&right_unit))
        else {
            continue;
        };
        covered = true;
        for prefix in left {
            for suffix in right {
                frontier.insert(Keystroke::concatenate(prefix, suffix, base_weight));
            }
        }
    }
    if !covered && raw.is_none() {
        return None;
    }

    let mut merged: Vec<Keystroke> = raw.cloned().unwrap_or_default();
    merged.extend(frontier.into_ranked());

    Some(dedup_squash(merged))
}

/// Collapse duplicate spellings keeping the best-ranked instance, squash
/// each history so a table candidate reads as a single lookup step, then
/// sort best first. Squashing happens before the sort so the stored order
/// matches the squashed comparison.
fn dedup_squash(candidates: Vec<Keystroke>) -> Vec<Keystroke> {
    let mut best: HashMap<String, Keystroke> = HashMap::with_capacity(candidates.len());
    for ks in candidates {
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
    let mut ranked: Vec<Keystroke> = best
        .into_values()
        .map(|ks| {
            let weight = ks.weight();
            Keystroke::new(ks.into_key(), weight)
        })
        .collect();
    ranked.sort();
    ranked
}
