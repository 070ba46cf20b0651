//! Query/chunk tokenization shared by index build and search.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words that carry no retrieval signal.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "ought", "me", "my", "you", "your", "he", "she", "it", "its", "we", "they", "this",
    "that", "these", "those", "what", "which", "who", "how", "and", "but", "or", "not", "no",
    "of", "in", "on", "at", "to", "for", "with", "from", "by", "as", "if", "then", "so", "than",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

/// Lower-cased unigrams and bigrams with stop words removed.
///
/// Bigrams are formed from the surviving token stream, so stop words
/// never appear inside a bigram either. Single-letter fragments are
/// dropped along with the stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1 && !is_stop_word(w))
        .collect();

    let mut terms: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    terms.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_dropped() {
        let terms = tokenize("What is the revenue of the company");
        assert!(!terms.iter().any(|t| t == "the"));
        assert!(!terms.iter().any(|t| t == "is"));
        assert!(terms.iter().any(|t| t == "revenue"));
        assert!(terms.iter().any(|t| t == "company"));
    }

    #[test]
    fn test_bigrams_skip_stop_words() {
        let terms = tokenize("revenue of growth");
        assert!(terms.iter().any(|t| t == "revenue growth"));
        assert!(!terms.iter().any(|t| t.contains(" of ")));
    }

    #[test]
    fn test_case_and_punctuation_folding() {
        let terms = tokenize("EBITDA: 12.5%");
        assert!(terms.iter().any(|t| t == "ebitda"));
        assert!(terms.iter().any(|t| t == "12"));
    }

    #[test]
    fn test_empty_and_stop_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("is the of a").is_empty());
    }
}
