//! Answer composition over retrieved chunks.

use corpdesk_core::types::{Answer, Chunk};
use std::collections::HashSet;

use crate::classify::{QuestionCategory, classify};
use crate::extract::{FINANCIAL_RULES, SHAREHOLDING_RULES, extract_facts};
use crate::sentence::split_sentences;

/// How many leading sentences of each chunk the general category keeps.
const GENERAL_SENTENCES_PER_CHUNK: usize = 3;
/// How many deduplicated sentences the prose fallback emits.
const FALLBACK_SENTENCES: usize = 10;

/// Compose a formatted answer from a question and its retrieved chunks.
///
/// Pure function over its inputs; never fails. An empty chunk list, a
/// selection that matches nothing, and extraction patterns that find
/// nothing all degrade to fallback text rather than an error.
pub fn compose(question: &str, chunks: &[Chunk]) -> Answer {
    if chunks.is_empty() {
        return Answer::no_information();
    }

    let rule = classify(question);
    tracing::debug!("Question classified as {:?}", rule.category);

    let context: String =
        chunks.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join("\n");
    let context_sentences = split_sentences(&context);

    let selected: Vec<String> = if rule.category == QuestionCategory::General {
        chunks
            .iter()
            .flat_map(|c| split_sentences(&c.text).into_iter().take(GENERAL_SENTENCES_PER_CHUNK))
            .collect()
    } else {
        context_sentences
            .iter()
            .filter(|s| {
                let lower = s.to_lowercase();
                rule.context_keywords.iter().any(|k| lower.contains(k))
            })
            .cloned()
            .collect()
    };
    let deduped = dedup_preserving_order(selected);

    let context_lower = context.to_lowercase();
    let facts = match rule.category {
        QuestionCategory::Shareholding => extract_facts(SHAREHOLDING_RULES, &context_lower),
        QuestionCategory::Financial => extract_facts(FINANCIAL_RULES, &context_lower),
        _ => Vec::new(),
    };

    let mut lines = vec![rule.heading.to_string()];
    if !facts.is_empty() {
        lines.extend(facts);
    } else {
        // No targeted facts: first ten deduplicated sentences as prose.
        // When the keyword selection came up empty, draw from the whole
        // context so a retrieved chunk still yields an answer.
        let pool = if deduped.is_empty() {
            dedup_preserving_order(context_sentences)
        } else {
            deduped
        };
        if pool.is_empty() {
            return Answer::no_information();
        }
        let prose: Vec<String> = pool.into_iter().take(FALLBACK_SENTENCES).collect();
        lines.push(prose.join(" "));
    }

    Answer { text: lines.join("\n"), evidence: chunks.to_vec() }
}

/// Remove exact duplicate sentences, keeping first occurrences in order.
fn dedup_preserving_order(sentences: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    sentences.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpdesk_core::types::Section;

    fn chunk(id: u32, text: &str, section: Section) -> Chunk {
        Chunk::new(id, text, section)
    }

    #[test]
    fn test_empty_chunks_yield_generic_answer() {
        let answer = compose("What is the revenue?", &[]);
        assert!(answer.evidence.is_empty());
        assert!(answer.text.contains("don't have information"));
    }

    #[test]
    fn test_shareholding_bullet_extraction() {
        let chunks = vec![chunk(
            0,
            "Promoter & Promoter Group: 64.73% of the equity. Public: 35.27% of the equity.",
            Section::Shareholding,
        )];
        let answer = compose("What is the shareholding breakdown?", &chunks);
        assert!(answer.text.starts_with("Shareholding pattern:"));
        assert!(answer.text.contains("64.73%"));
        assert!(answer.text.contains("35.27%"));
    }

    #[test]
    fn test_financial_question_without_financial_keywords_falls_back() {
        let chunks = vec![chunk(
            0,
            "The company operates cold chain logistics across several states. \
             Its distribution fleet reaches most urban centres.",
            Section::General,
        )];
        let answer = compose("What is the revenue trend?", &chunks);
        assert!(answer.text.starts_with("Financial performance:"));
        assert!(answer.text.contains("cold chain logistics"));
    }

    #[test]
    fn test_general_question_takes_leading_sentences() {
        let chunks = vec![chunk(
            0,
            "One. Two. Three. Four. Five.",
            Section::General,
        )];
        let answer = compose("Tell me something", &chunks);
        assert!(answer.text.contains("Three."));
        assert!(!answer.text.contains("Four."));
    }

    #[test]
    fn test_duplicate_sentences_are_deduplicated_in_order() {
        let repeated = "Growth in the industry has been steady.";
        let chunks = vec![
            chunk(0, &format!("{repeated} Demand for the market rose."), Section::IndustryTrends),
            chunk(1, repeated, Section::IndustryTrends),
        ];
        let answer = compose("What are the industry trends?", &chunks);
        assert_eq!(answer.text.matches(repeated).count(), 1);
        let growth_pos = answer.text.find("Growth").unwrap();
        let demand_pos = answer.text.find("Demand").unwrap();
        assert!(growth_pos < demand_pos);
    }

    #[test]
    fn test_evidence_carries_retrieved_chunks() {
        let chunks = vec![chunk(0, "Plant capacity rose at the facility. More production units.", Section::General)];
        let answer = compose("How much plant capacity?", &chunks);
        assert_eq!(answer.evidence.len(), 1);
        assert_eq!(answer.evidence[0].id, 0);
    }

    #[test]
    fn test_compose_never_panics_on_odd_input() {
        let chunks = vec![chunk(0, "???!!!...", Section::General)];
        let _ = compose("", &chunks);
        let _ = compose("promoter % % %", &chunks);
    }
}
