//! Savings insight tiers
//!
//! The advice shown next to the savings rate is a pure lookup in an ordered
//! table. Rules are scanned from the highest threshold down and the first rule
//! whose threshold the rate reaches wins.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl fmt::Display for InsightTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        write!(f, "{}", label)
    }
}

/// One row of the tier table
#[derive(Debug, Clone, Copy)]
pub struct InsightRule {
    /// Inclusive lower bound of the savings rate, in percent
    pub min_rate: f64,
    pub tier: InsightTier,
    pub title: &'static str,
    pub message: &'static str,
}

/// Tier table, highest threshold first. The last rule catches everything.
pub const INSIGHT_RULES: [InsightRule; 4] = [
    InsightRule {
        min_rate: 30.0,
        tier: InsightTier::Excellent,
        title: "Excellent Savings Rate!",
        message: "You're saving more than 30% of your income. \
                  Consider investing some of it for long-term growth.",
    },
    InsightRule {
        min_rate: 20.0,
        tier: InsightTier::Good,
        title: "Good Progress",
        message: "You're on track! Consider automating your savings to reach your goals faster.",
    },
    InsightRule {
        min_rate: 10.0,
        tier: InsightTier::Fair,
        title: "Room for Improvement",
        message: "Try to save at least 20% of your income. \
                  Review your subscriptions and cut unnecessary expenses.",
    },
    InsightRule {
        min_rate: f64::NEG_INFINITY,
        tier: InsightTier::Poor,
        title: "Need to Save More",
        message: "Your savings rate is low. \
                  Create a budget and track your spending to improve your financial health.",
    },
];

/// Advice derived from a savings rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInsight {
    pub savings_rate: f64,
    pub tier: InsightTier,
    pub title: String,
    pub message: String,
}

/// Classify a savings rate (percent). Total over all inputs: NaN lands in the
/// catch-all rule.
pub fn classify_savings_insight(savings_rate: f64) -> SavingsInsight {
    let rule = INSIGHT_RULES
        .iter()
        .find(|rule| savings_rate >= rule.min_rate)
        .unwrap_or(&INSIGHT_RULES[INSIGHT_RULES.len() - 1]);

    SavingsInsight {
        savings_rate,
        tier: rule.tier,
        title: rule.title.to_string(),
        message: rule.message.to_string(),
    }
}
