//! End-to-end expansion scenarios over the public API.

use kana_suggest::{
    combine, segment, to_canonical_keystroke, to_edge_ngrams, to_keystrokes, Keystroke,
    MappingTable,
};

#[test]
fn pastry_word_expands_to_romanizations_and_itself() {
    let table = MappingTable::global();
    let result = to_keystrokes("シュークリーム", table, 512).unwrap();

    let identity = result
        .iter()
        .find(|ks| ks.key() == "シュークリーム")
        .expect("reading itself must be a candidate");
    assert_eq!(identity.weight(), 1);

    assert!(result
        .iter()
        .any(|ks| (ks.key().starts_with("syu") || ks.key().starts_with("shu"))
            && ks.key().ends_with("-mu")));

    let canonical = to_canonical_keystroke("シュークリーム", table).unwrap();
    assert_eq!(canonical.key(), "syu-kuri-mu");
    assert_eq!(canonical.weight(), 6);
    // Canonical is the best-weighted romanization.
    let best_romanized = combine(&segment("シュークリーム", table), 512).unwrap();
    assert_eq!(canonical, best_romanized[0]);
}

#[test]
fn declared_pair_candidates_outrank_less_preferred_spellings() {
    let toml = r#"
[mappings]
"ジ" = ["ji", "zi"]
"ョ" = ["xyo"]
"ジョ" = ["jo", "zyo"]
"#;
    let table = MappingTable::from_toml(toml).unwrap();
    let result = combine(&segment("ジジョ", &table), 64).unwrap();
    let keys: Vec<&str> = result.iter().map(Keystroke::key).collect();

    assert_eq!(keys[0], "jijo");
    let pos = |key: &str| keys.iter().position(|k| *k == key).unwrap();
    assert!(pos("jijo") < pos("jizyo"));
    assert!(pos("zijo") < pos("zizyo"));
}

#[test]
fn single_expansion_equals_canonical() {
    let table = MappingTable::global();
    for reading in ["シュークリーム", "カキクケコ", "ジャンプ", "アabアcd"] {
        let single = combine(&segment(reading, table), 1).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0], to_canonical_keystroke(reading, table).unwrap());
    }
}

#[test]
fn edge_ngrams_are_prefixes_shortest_first() {
    let result = to_edge_ngrams(&[Keystroke::new("abc", 3)]);
    let pairs: Vec<(&str, u32)> = result.iter().map(|ks| (ks.key(), ks.weight())).collect();
    assert_eq!(pairs, vec![("a", 3), ("ab", 3), ("abc", 3)]);
}

#[test]
fn undeclared_pair_derives_synthesized_candidates() {
    let toml = r#"
[mappings]
"キ" = ["ki"]
"ャ" = ["xya", "ya"]
"#;
    let table = MappingTable::from_toml(toml).unwrap();
    let derived = table.expand_unit("キャ").unwrap();
    let keys: Vec<&str> = derived.iter().map(Keystroke::key).collect();
    assert!(keys.contains(&"kixya"));
    assert!(keys.contains(&"kiya"));
    assert_eq!(derived.len(), 2);
}

#[test]
fn edge_ngrams_cover_expanded_pastry_word() {
    let table = MappingTable::global();
    let keystrokes = to_keystrokes("シュークリーム", table, 512).unwrap();
    let ngrams = to_edge_ngrams(&keystrokes);

    // Every keystroke's first char must appear as a 1-gram.
    assert!(ngrams.iter().any(|ks| ks.key() == "s"));
    assert!(ngrams.iter().any(|ks| ks.key() == "syu-kuri-mu"));
    // The canonical keystroke's prefixes inherit its weight or better.
    let syu = ngrams.iter().find(|ks| ks.key() == "syu").unwrap();
    assert!(syu.weight() <= 6);
}
