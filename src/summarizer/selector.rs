//! Top-k sentence selection with original order restored

use std::cmp::Ordering;

use super::frequency::FrequencyMap;
use super::scorer::{score_sentences, ScoredSentence};

/// Pick at most `max_count` sentences by score, returned in text order.
///
/// When there are no more sentences than `max_count`, every sentence is
/// returned. Equal scores rank the earlier sentence first.
pub fn select<'a>(
    sentences: &[&'a str],
    frequency: &FrequencyMap,
    max_count: usize,
) -> Vec<ScoredSentence<'a>> {
    let mut scored = score_sentences(sentences, frequency);
    if scored.len() <= max_count {
        return scored;
    }

    scored.sort_by(by_rank);
    scored.truncate(max_count);
    scored.sort_by_key(|s| s.index);
    scored
}

/// Descending score, then ascending index
fn by_rank(a: &ScoredSentence<'_>, b: &ScoredSentence<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}
