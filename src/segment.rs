//! Left-to-right segmentation of a reading into candidate fragments.

use crate::keystroke::Keystroke;
use crate::mapping::MappingTable;
use crate::unicode::is_katakana;

/// All known spellings for one maximal segment of the reading.
#[derive(Debug, Clone)]
pub struct Fragment {
    text: String,
    candidates: Vec<Keystroke>,
}

impl Fragment {
    fn from_table(text: String, candidates: &[Keystroke]) -> Self {
        Self {
            text,
            candidates: candidates.to_vec(),
        }
    }

    fn literal(text: String) -> Self {
        let candidate = Keystroke::new(text.clone(), 1);
        Self {
            text,
            candidates: vec![candidate],
        }
    }

    /// The reading span this fragment covers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Candidate keystrokes, best first for table fragments.
    pub fn candidates(&self) -> &[Keystroke] {
        &self.candidates
    }

    #[cfg(test)]
    pub(crate) fn for_tests(text: String, candidates: Vec<Keystroke>) -> Self {
        Self { text, candidates }
    }
}

/// Split `reading` into ordered fragments whose concatenated spans
/// reconstruct it exactly.
///
/// Katakana positions try longest-match table lookups (3, 2, then 1
/// characters). Katakana absent from the table and maximal runs of
/// non-katakana text fall back to single-candidate literal fragments with
/// weight 1; an unmapped character is not an error, the table is known to be
/// incomplete for some rare phonetic symbols.
pub fn segment(reading: &str, table: &MappingTable) -> Vec<Fragment> {
    let chars: Vec<char> = reading.chars().collect();
    let mut fragments = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if is_katakana(chars[pos]) {
            let mut matched = None;
            for len in (1..=3).rev() {
                if pos + len > chars.len() {
                    continue;
                }
                let unit: String = chars[pos..pos + len].iter().collect();
                if let Some(candidates) = table.lookup(&unit) {
                    matched = Some((unit, len, candidates));
                    break;
                }
            }
            match matched {
                Some((unit, len, candidates)) => {
                    fragments.push(Fragment::from_table(unit, candidates));
                    pos += len;
                }
                None => {
                    fragments.push(Fragment::literal(chars[pos].to_string()));
                    pos += 1;
                }
            }
        } else {
            let from = pos;
            pos += 1;
            while pos < chars.len() && !is_katakana(chars[pos]) {
                pos += 1;
            }
            let run: String = chars[from..pos].iter().collect();
            fragments.push(Fragment::literal(run));
        }
    }

    fragments
}
