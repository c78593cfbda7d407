//! Character-level Unicode classification for readings.

/// Check the full Katakana block (U+30A0..=U+30FF). Includes rarely-used
/// symbols (゠ U+30A0, ヿ U+30FF) and the prolonged sound mark ー, which the
/// mapping table covers explicitly.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Check the full Hiragana block (U+3040..U+309F). This includes a few
/// unassigned codepoints (U+3040, U+3097-3098) but these never appear in
/// readings, so the simpler block-level check is preferred.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, kanji, etc.) pass through unchanged.
/// Upstream analyzers fall back to hiragana or surface forms for words they
/// have no katakana reading for.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_katakana('ヴ'));
        assert!(!is_katakana('あ'));
        assert!(!is_katakana('a'));
        assert!(!is_katakana('漢'));
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("しゅーくりーむ"), "シュークリーム");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
    }
}
