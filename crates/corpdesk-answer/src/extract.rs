//! Named regex fact extraction rules.
//!
//! Each rule is an independent, unit-testable pattern plus a bullet
//! formatter, applied to the lower-cased context blob. A rule that
//! fails to match contributes nothing — the bullet is simply omitted.

use regex::Regex;
use std::sync::LazyLock;

/// A single extraction rule.
pub struct FactRule {
    pub name: &'static str,
    /// Human-readable bullet label.
    pub label: &'static str,
    pub pattern: &'static LazyLock<Option<Regex>>,
    /// Unit appended to the captured value ("%" or " crore").
    pub unit: &'static str,
}

impl FactRule {
    /// Apply the rule to a lower-cased context; the first match wins.
    pub fn extract(&self, context_lower: &str) -> Option<String> {
        let regex = self.pattern.as_ref()?;
        let captures = regex.captures(context_lower)?;
        let value = captures.get(1)?.as_str();
        Some(format!("- {}: {}{}", self.label, value, self.unit))
    }
}

macro_rules! fact_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

fact_pattern!(RE_PROMOTER, r"promoter.*?(\d+\.\d+)\s*%");
fact_pattern!(RE_PUBLIC, r"public.*?(\d+\.\d+)\s*%");
fact_pattern!(RE_FII, r"(?:fii|foreign institutional).*?(\d+\.\d+)\s*%");
fact_pattern!(RE_DII, r"(?:dii|domestic institutional).*?(\d+\.\d+)\s*%");

fact_pattern!(RE_REVENUE, r"revenue[^.]*?(?:rs\.?|₹)?\s*([\d,]+(?:\.\d+)?)\s*crore");
fact_pattern!(RE_NET_PROFIT, r"net profit[^.]*?(?:rs\.?|₹)?\s*([\d,]+(?:\.\d+)?)\s*crore");
fact_pattern!(RE_EBITDA, r"ebitda[^.]*?(\d+(?:\.\d+)?)\s*%");

/// Shareholding facts, in emission order.
pub static SHAREHOLDING_RULES: &[FactRule] = &[
    FactRule {
        name: "promoter_holding",
        label: "Promoter & promoter group holding",
        pattern: &RE_PROMOTER,
        unit: "%",
    },
    FactRule { name: "public_holding", label: "Public holding", pattern: &RE_PUBLIC, unit: "%" },
    FactRule { name: "fii_holding", label: "FII holding", pattern: &RE_FII, unit: "%" },
    FactRule { name: "dii_holding", label: "DII holding", pattern: &RE_DII, unit: "%" },
];

/// Financial facts, in emission order.
pub static FINANCIAL_RULES: &[FactRule] = &[
    FactRule { name: "revenue", label: "Revenue", pattern: &RE_REVENUE, unit: " crore" },
    FactRule { name: "net_profit", label: "Net profit", pattern: &RE_NET_PROFIT, unit: " crore" },
    FactRule { name: "ebitda_margin", label: "EBITDA margin", pattern: &RE_EBITDA, unit: "%" },
];

/// Run every rule in a set against the context; non-matching rules are
/// skipped silently.
pub fn extract_facts(rules: &[FactRule], context_lower: &str) -> Vec<String> {
    rules.iter().filter_map(|rule| rule.extract(context_lower)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static FactRule {
        SHAREHOLDING_RULES
            .iter()
            .chain(FINANCIAL_RULES.iter())
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn test_promoter_holding() {
        let bullet = rule("promoter_holding")
            .extract("promoter & promoter group: 64.73% of total shares")
            .unwrap();
        assert_eq!(bullet, "- Promoter & promoter group holding: 64.73%");
    }

    #[test]
    fn test_public_holding() {
        let bullet = rule("public_holding").extract("public shareholding stood at 35.27 %").unwrap();
        assert!(bullet.contains("35.27%"));
    }

    #[test]
    fn test_fii_spelled_out() {
        let bullet = rule("fii_holding")
            .extract("foreign institutional investors held 4.10% at year end")
            .unwrap();
        assert!(bullet.contains("4.10%"));
    }

    #[test]
    fn test_revenue_with_currency_prefix() {
        let bullet = rule("revenue").extract("revenue for fy24 came in at rs. 1,120 crore").unwrap();
        assert_eq!(bullet, "- Revenue: 1,120 crore");
    }

    #[test]
    fn test_ebitda_margin() {
        let bullet = rule("ebitda_margin").extract("ebitda margin improved to 14.2% in fy24").unwrap();
        assert!(bullet.contains("14.2%"));
    }

    #[test]
    fn test_no_match_is_none() {
        assert!(rule("promoter_holding").extract("nothing about ownership here").is_none());
        assert!(rule("net_profit").extract("profit without figures").is_none());
    }

    #[test]
    fn test_extract_facts_skips_non_matching_rules() {
        let context = "promoter & promoter group: 64.73% and nothing else";
        let facts = extract_facts(SHAREHOLDING_RULES, context);
        assert_eq!(facts.len(), 1);
        assert!(facts[0].contains("64.73%"));
    }
}
