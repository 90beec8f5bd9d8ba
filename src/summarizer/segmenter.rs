//! Sentence segmentation
//!
//! A sentence ends at `.`, `!` or `?` when that character is followed by a
//! whitespace run. The byte order mark U+FEFF counts as whitespace. The punctuation stays with its sentence and the
//! whitespace run is consumed by the split.

use std::sync::OnceLock;

use regex::Regex;

fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?][\s\x{FEFF}]+").expect("valid regex"))
}

/// Split text into sentences, in order of appearance.
///
/// Segments that are empty after trimming are dropped; kept segments retain
/// their internal spacing. Text without terminal punctuation followed by
/// whitespace comes back as a single segment.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in boundary_regex().find_iter(text) {
        // terminal punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        push_non_blank(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_non_blank(&mut sentences, &text[start..]);

    sentences
}

fn push_non_blank<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    if !candidate.trim().is_empty() {
        sentences.push(candidate);
    }
}
