//! Word normalization and the global frequency model

use std::collections::HashMap;

/// Characters removed from text before splitting it into words
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Whitespace for word splitting; U+FEFF is included alongside Unicode
/// `White_Space`
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Normalize text into words: lower-case, strip punctuation, split on
/// whitespace runs, drop empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    cleaned
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Occurrence count of every word in a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
}

impl FrequencyMap {
    /// Count occurrences of already-normalized words
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = HashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Global count for a normalized word, zero when absent
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Build the frequency model over an entire text
pub fn build_frequency(text: &str) -> FrequencyMap {
    FrequencyMap::from_words(tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_normalizes() {
        assert_eq!(
            tokenize("Hello, World! (Nested) [brackets] {braces}; \"quoted\" it's: done."),
            vec!["hello", "world", "nested", "brackets", "braces", "quoted", "its", "done"]
        );
    }

    #[test]
    fn test_tokenize_drops_punctuation_only_tokens() {
        assert_eq!(tokenize("a - b ... c"), vec!["a", "-", "b", "c"]);
        assert!(tokenize("?! ...").is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_unicode_whitespace() {
        assert_eq!(
            tokenize("alpha\u{feff}beta\u{a0}gamma\u{feff}\u{feff} delta"),
            vec!["alpha", "beta", "gamma", "delta"]
        );
    }

    #[test]
    fn test_case_and_punctuation_insensitive_counts() {
        let freq = build_frequency("Cat cat, CAT. dog");
        assert_eq!(freq.count("cat"), 3);
        assert_eq!(freq.count("dog"), 1);
        assert_eq!(freq.count("bird"), 0);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        let freq = build_frequency("");
        assert!(freq.is_empty());
        assert_eq!(freq.iter().count(), 0);
    }

    #[test]
    fn test_punctuation_joins_words() {
        // stripping happens before splitting, so "end.start" becomes one word
        let freq = build_frequency("end.start end");
        assert_eq!(freq.count("endstart"), 1);
        assert_eq!(freq.count("end"), 1);
    }
}
