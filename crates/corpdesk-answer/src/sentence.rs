//! Heuristic sentence boundary detection.

/// Tokens that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "ltd", "inc", "rs", "vs", "etc", "no", "co"];

/// Split text into trimmed sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace (or end of
/// input) whose preceding word is not a known abbreviation. Decimal
/// numbers ("64.73%") never split because the terminator is followed
/// by a digit, not whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((pos, c)) = iter.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let next_is_break = iter.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if next_is_break && !ends_with_abbreviation(&text[start..pos]) {
            let end = pos + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let last_word = prefix
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    ABBREVIATIONS.contains(&last_word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("Revenue grew. Profit fell! Did exports rise?");
        assert_eq!(sentences, vec!["Revenue grew.", "Profit fell!", "Did exports rise?"]);
    }

    #[test]
    fn test_decimals_do_not_split() {
        let sentences = split_sentences("Promoters hold 64.73% of shares. Public holds the rest.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("64.73%"));
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = split_sentences("Revenue was Rs. 1200 crore in the year. Growth continued.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Rs. 1200 crore"));
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = split_sentences("First sentence. trailing fragment");
        assert_eq!(sentences, vec!["First sentence.", "trailing fragment"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
