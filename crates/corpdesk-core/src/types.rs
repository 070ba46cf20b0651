//! Shared data types for the corpus → retrieval → answer pipeline.

use serde::{Deserialize, Serialize};

/// Coarse topic label assigned to a chunk at split time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    General,
    CompanyOverview,
    FinancialPerformance,
    Shareholding,
    Competitors,
    IndustryTrends,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::General => write!(f, "general"),
            Section::CompanyOverview => write!(f, "company overview"),
            Section::FinancialPerformance => write!(f, "financial performance"),
            Section::Shareholding => write!(f, "shareholding"),
            Section::Competitors => write!(f, "competitors"),
            Section::IndustryTrends => write!(f, "industry trends"),
        }
    }
}

/// A contiguous, labeled unit of corpus text — the atomic retrieval item.
///
/// Chunks are immutable once built. The whole set is discarded and
/// rebuilt whenever a new corpus is supplied; ids restart from 0 in
/// document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: u32,
    pub text: String,
    pub section: Section,
}

impl Chunk {
    pub fn new(id: u32, text: impl Into<String>, section: Section) -> Self {
        Self { id, text: text.into(), section }
    }
}

/// A composed answer: formatted text plus the chunks used as evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub evidence: Vec<Chunk>,
}

impl Answer {
    /// The generic response when nothing relevant was retrieved.
    pub fn no_information() -> Self {
        Self {
            text: "I don't have information on that in the current corpus. \
                   Try rephrasing the question or loading a corpus that covers the topic."
                .into(),
            evidence: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display() {
        assert_eq!(Section::Shareholding.to_string(), "shareholding");
        assert_eq!(Section::CompanyOverview.to_string(), "company overview");
    }

    #[test]
    fn test_section_serde_roundtrip() {
        let json = serde_json::to_string(&Section::IndustryTrends).unwrap();
        assert_eq!(json, "\"industry_trends\"");
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::IndustryTrends);
    }

    #[test]
    fn test_no_information_answer_has_no_evidence() {
        let answer = Answer::no_information();
        assert!(answer.evidence.is_empty());
        assert!(!answer.text.is_empty());
    }
}
