//! Extractive summarization
//!
//! A linear pipeline: segment the text into sentences, count word
//! frequencies over the whole text, score each sentence, then keep the
//! highest-scoring ones in their original order. Pure and synchronous; no
//! I/O and no state shared between calls.

pub mod frequency;
pub mod scorer;
pub mod segmenter;
pub mod selector;

pub use frequency::{build_frequency, tokenize, FrequencyMap};
pub use scorer::{length_score, position_score, score, score_sentences, ScoredSentence};
pub use segmenter::segment;
pub use selector::select;

/// Sentence count used when a caller does not specify one
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Outcome of one summarization with the details behind it
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport<'a> {
    /// The summary string returned to callers
    pub summary: String,

    /// Number of sentences found in the input
    pub total_sentences: usize,

    /// True when the input had no more sentences than requested and was
    /// returned verbatim
    pub passthrough: bool,

    /// Selected sentences in text order
    pub selected: Vec<ScoredSentence<'a>>,
}

/// Summarize `text` down to at most `max_sentences` sentences.
///
/// Input with no more sentences than `max_sentences` (including empty input)
/// is returned unchanged. Otherwise the selected sentences are joined with a
/// single space.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    summarize_with_report(text, max_sentences).summary
}

/// Like [`summarize`], also reporting which sentences were kept and why
pub fn summarize_with_report(text: &str, max_sentences: usize) -> SummaryReport<'_> {
    let sentences = segment(text);
    let frequency = build_frequency(text);
    let selected = select(&sentences, &frequency, max_sentences);
    let passthrough = sentences.len() <= max_sentences;

    tracing::trace!(
        total = sentences.len(),
        distinct_words = frequency.len(),
        selected = selected.len(),
        passthrough,
        "summarized text"
    );

    let summary = if passthrough {
        text.to_owned()
    } else {
        selected
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    };

    SummaryReport {
        summary,
        total_sentences: sentences.len(),
        passthrough,
        selected,
    }
}
