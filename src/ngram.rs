//! Edge n-gram projection of ranked keystrokes.
//!
//! The index side stores every prefix of every retained keystroke so
//! typeahead queries match without re-deriving expansions per partial input.

use std::collections::HashMap;

use crate::keystroke::Keystroke;

/// Expand each keystroke into all of its prefixes (one per char boundary),
/// inheriting the source weight unchanged. Duplicate prefixes keep the best
/// weight among their sources. Output is ordered best weight first, shorter
/// prefixes before longer ones on ties.
pub fn edge_ngrams(keystrokes: &[Keystroke]) -> Vec<Keystroke> {
    let mut best: HashMap<&str, u32> = HashMap::new();
    for ks in keystrokes {
        for (i, c) in ks.key().char_indices() {
            let prefix = &ks.key()[..i + c.len_utf8()];
            match best.get_mut(prefix) {
                Some(weight) => *weight = (*weight).min(ks.weight()),
                None => {
                    best.insert(prefix, ks.weight());
                }
            }
        }
    }

    let mut ranked: Vec<Keystroke> = best
        .into_iter()
        .map(|(prefix, weight)| Keystroke::new(prefix, weight))
        .collect();
    ranked.sort_by(|a, b| {
        a.weight()
            .cmp(&b.weight())
            .then_with(|| a.key().chars().count().cmp(&b.key().chars().count()))
            .then_with(|| b.key().cmp(a.key()))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_shortest_first() {
        let result = edge_ngrams(&[Keystroke::new("abc", 3)]);
        let pairs: Vec<(&str, u32)> = result.iter().map(|ks| (ks.key(), ks.weight())).collect();
        assert_eq!(pairs, vec![("a", 3), ("ab", 3), ("abc", 3)]);
    }

    #[test]
    fn test_duplicate_prefix_keeps_best_weight() {
        let result = edge_ngrams(&[Keystroke::new("ab", 1), Keystroke::new("abc", 3)]);
        let pairs: Vec<(&str, u32)> = result.iter().map(|ks| (ks.key(), ks.weight())).collect();
        assert_eq!(pairs, vec![("a", 1), ("ab", 1), ("abc", 3)]);
    }

    #[test]
    fn test_weight_orders_before_length() {
        let result = edge_ngrams(&[Keystroke::new("xy", 5), Keystroke::new("b", 1)]);
        let keys: Vec<&str> = result.iter().map(Keystroke::key).collect();
        assert_eq!(keys, vec!["b", "x", "xy"]);
    }

    #[test]
    fn test_multibyte_prefixes_follow_char_boundaries() {
        let result = edge_ngrams(&[Keystroke::new("カナ", 2)]);
        let keys: Vec<&str> = result.iter().map(Keystroke::key).collect();
        assert_eq!(keys, vec!["カ", "カナ"]);
    }

    #[test]
    fn test_no_duplicates() {
        let result = edge_ngrams(&[
            Keystroke::new("syu", 1),
            Keystroke::new("shu", 2),
            Keystroke::new("syu-", 2),
        ]);
        let mut keys: Vec<&str> = result.iter().map(Keystroke::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), result.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(edge_ngrams(&[]).is_empty());
    }
}
