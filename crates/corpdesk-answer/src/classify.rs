//! Question classification — an ordered keyword rule table.
//!
//! Rules are evaluated top to bottom; the first rule whose trigger
//! list contains a substring of the lower-cased question wins. The
//! general rule is the explicit fallback when nothing matches.

use serde::Serialize;

/// The six fixed question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Shareholding,
    Competitor,
    Financial,
    IndustryTrend,
    Facility,
    General,
}

/// One classification rule: the question keywords that trigger it, the
/// context keywords used for sentence selection, and the heading the
/// composer emits for it.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: QuestionCategory,
    pub heading: &'static str,
    /// Lower-cased substrings tested against the lower-cased question.
    pub triggers: &'static [&'static str],
    /// Lower-cased substrings a context sentence must contain to be
    /// selected for this category.
    pub context_keywords: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, question_lower: &str) -> bool {
        self.triggers.iter().any(|t| question_lower.contains(t))
    }
}

/// Keyed rules in priority order. The general fallback lives outside
/// the table so the priority walk stays a plain `find`.
pub static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: QuestionCategory::Shareholding,
        heading: "Shareholding pattern:",
        triggers: &["shareholding", "share holding", "stake", "promoter", "ownership", "shareholder"],
        context_keywords: &["promoter", "shareholding", "stake", "holding", "fii", "dii", "public", "%"],
    },
    CategoryRule {
        category: QuestionCategory::Competitor,
        heading: "Competitive landscape:",
        triggers: &["competitor", "competition", "rival", "compare", "versus", " vs "],
        context_keywords: &["competitor", "competition", "market share", "rival", "brand", "player"],
    },
    CategoryRule {
        category: QuestionCategory::Financial,
        heading: "Financial performance:",
        triggers: &["revenue", "profit", "financial", "ebitda", "turnover", "income", "margin"],
        context_keywords: &["crore", "revenue", "profit", "ebitda", "fy", "financial", "₹"],
    },
    CategoryRule {
        category: QuestionCategory::IndustryTrend,
        heading: "Industry trends:",
        triggers: &["trend", "industry", "market size", "growth", "outlook", "sector"],
        context_keywords: &["industry", "trend", "market", "growth", "cagr", "demand"],
    },
    CategoryRule {
        category: QuestionCategory::Facility,
        heading: "Facilities and manufacturing:",
        triggers: &["facility", "facilities", "plant", "factory", "manufacturing", "capacity", "production"],
        context_keywords: &["plant", "facility", "capacity", "manufacturing", "production", "unit"],
    },
];

/// Fallback when no keyed rule matches: the composer takes the first
/// sentences of each retrieved chunk instead of keyword selection.
pub static GENERAL_RULE: CategoryRule = CategoryRule {
    category: QuestionCategory::General,
    heading: "Here is what the corpus says:",
    triggers: &[],
    context_keywords: &[],
};

/// Classify a question. Exactly one category is chosen — the first
/// matching rule in priority order, or the general fallback.
pub fn classify(question: &str) -> &'static CategoryRule {
    let question_lower = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&question_lower))
        .unwrap_or(&GENERAL_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_triggers() {
        let cases = [
            ("What is the shareholding breakdown?", QuestionCategory::Shareholding),
            ("Who are the main competitors?", QuestionCategory::Competitor),
            ("How did revenue develop?", QuestionCategory::Financial),
            ("What are the industry trends?", QuestionCategory::IndustryTrend),
            ("Where are the manufacturing plants?", QuestionCategory::Facility),
            ("Tell me about the company", QuestionCategory::General),
        ];
        for (question, expected) in cases {
            assert_eq!(classify(question).category, expected, "question: {question}");
        }
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "promoter" (shareholding) outranks "revenue" (financial).
        let rule = classify("How does promoter revenue look?");
        assert_eq!(rule.category, QuestionCategory::Shareholding);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("SHAREHOLDING?").category, QuestionCategory::Shareholding);
    }

    #[test]
    fn test_industry_before_facility() {
        // "industry" appears earlier in the table than "capacity".
        let rule = classify("What is the industry capacity outlook?");
        assert_eq!(rule.category, QuestionCategory::IndustryTrend);
    }

    #[test]
    fn test_general_fallback_has_no_triggers() {
        assert!(GENERAL_RULE.triggers.is_empty());
        assert_eq!(classify("").category, QuestionCategory::General);
    }
}
