//! Sentence importance scoring
//!
//! `score = (frequency * 0.5 + length * 0.3) * position`. The position
//! factor multiplies the weighted sum rather than adding a third term.

use super::frequency::{tokenize, FrequencyMap};

/// Weight of the summed global word frequencies
pub const FREQUENCY_WEIGHT: f64 = 0.5;

/// Weight of the capped length score
pub const LENGTH_WEIGHT: f64 = 0.3;

/// Token count at which the length score saturates
pub const LENGTH_CAP: usize = 20;

/// Multiplier for the first and last sentence
pub const EDGE_BOOST: f64 = 1.5;

/// Multiplier for sentences strictly inside the leading or trailing fifth
pub const NEAR_EDGE_BOOST: f64 = 1.2;

/// Positions strictly below this fraction of the total are near the start
pub const LEADING_FRACTION: f64 = 0.2;

/// Positions strictly above this fraction of the total are near the end
pub const TRAILING_FRACTION: f64 = 0.8;

/// A sentence with its score and original position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub score: f64,
    pub index: usize,
}

/// `min(token_count, 20) / 20`
pub fn length_score(token_count: usize) -> f64 {
    token_count.min(LENGTH_CAP) as f64 / LENGTH_CAP as f64
}

/// Positional multiplier for the sentence at `index` out of `total`.
///
/// The near-edge comparison is strict against the unrounded fractional
/// boundary, so a sentence sitting exactly at 20% or 80% is not boosted.
pub fn position_score(index: usize, total: usize) -> f64 {
    if index == 0 || index + 1 == total {
        return EDGE_BOOST;
    }

    let position = index as f64;
    let total = total as f64;
    if position < total * LEADING_FRACTION || position > total * TRAILING_FRACTION {
        NEAR_EDGE_BOOST
    } else {
        1.0
    }
}

/// Score one sentence against the global frequency model.
///
/// Repeated words inside the sentence each contribute their global count.
pub fn score(sentence: &str, frequency: &FrequencyMap, index: usize, total: usize) -> f64 {
    let words = tokenize(sentence);
    let frequency_score: usize = words.iter().map(|word| frequency.count(word)).sum();

    (frequency_score as f64 * FREQUENCY_WEIGHT + length_score(words.len()) * LENGTH_WEIGHT)
        * position_score(index, total)
}

/// Score every sentence, keeping original order
pub fn score_sentences<'a>(sentences: &[&'a str], frequency: &FrequencyMap) -> Vec<ScoredSentence<'a>> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(index, &text)| ScoredSentence {
            text,
            score: score(text, frequency, index, total),
            index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::frequency::build_frequency;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_length_score_caps_at_twenty() {
        assert!(approx_eq(length_score(0), 0.0));
        assert!(approx_eq(length_score(1), 0.05));
        assert!(approx_eq(length_score(10), 0.5));
        assert!(approx_eq(length_score(20), 1.0));
        assert!(approx_eq(length_score(45), 1.0));
    }

    #[test]
    fn test_position_score_edges() {
        assert_eq!(position_score(0, 10), EDGE_BOOST);
        assert_eq!(position_score(9, 10), EDGE_BOOST);
        assert_eq!(position_score(0, 1), EDGE_BOOST);
    }

    #[test]
    fn test_position_score_fractional_boundaries() {
        // total 10: boundaries at 2.0 and 8.0, both exclusive
        assert_eq!(position_score(1, 10), NEAR_EDGE_BOOST);
        assert_eq!(position_score(2, 10), 1.0);
        assert_eq!(position_score(5, 10), 1.0);
        assert_eq!(position_score(8, 10), 1.0);

        // total 20: boundaries at 4.0 and 16.0
        assert_eq!(position_score(3, 20), NEAR_EDGE_BOOST);
        assert_eq!(position_score(4, 20), 1.0);
        assert_eq!(position_score(16, 20), 1.0);
        assert_eq!(position_score(17, 20), NEAR_EDGE_BOOST);
    }

    #[test]
    fn test_position_score_small_texts() {
        // total 5: boundaries at 1.0 and 4.0, so only the edges are boosted
        assert_eq!(position_score(1, 5), 1.0);
        assert_eq!(position_score(3, 5), 1.0);
        assert_eq!(position_score(4, 5), EDGE_BOOST);
    }

    #[test]
    fn test_score_formula() {
        let freq = build_frequency("Owl hops. Owl.");
        // owl=2, hops=1 -> frequency 3, length 2/20, edge boost at index 0
        let expected = (3.0 * 0.5 + 0.1 * 0.3) * 1.5;
        assert!(approx_eq(score("Owl hops.", &freq, 0, 2), expected));
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let freq = build_frequency("beta beta gamma");
        // beta appears twice globally and twice in the sentence: 2 + 2
        let s = score("beta beta", &freq, 2, 5);
        assert!(approx_eq(s, 4.0 * 0.5 + 0.1 * 0.3));
    }

    #[test]
    fn test_score_of_unknown_words_is_length_only() {
        let freq = build_frequency("alpha");
        let s = score("zeta eta", &freq, 2, 5);
        assert!(approx_eq(s, 0.1 * 0.3));
    }

    #[test]
    fn test_score_sentences_keeps_order() {
        let sentences = ["A.", "B.", "C."];
        let freq = build_frequency("A. B. C.");
        let scored = score_sentences(&sentences, &freq);
        assert_eq!(scored.len(), 3);
        assert_eq!(
            scored.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(scored[1].text, "B.");
        assert!(scored[0].score > scored[1].score);
    }
}
