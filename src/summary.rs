//! Summary selection
//!
//! Turns an aggregate sentiment score into the opening sentence of a
//! horoscope.

use crate::error::{HoroscopeError, Result};
use crate::sentiment::SentimentCategory;
use rand::seq::IndexedRandom;
use rand::Rng;

const VERY_NEGATIVE: &str =
    "This could be a very challenging week, but through courage you can overcome it.";
const NEGATIVE: &str =
    "This may be a difficult week, but remember that adversity presents an opportunity for growth.";
const POSITIVE: &str = "This week appears promising, so try to make the most of it.";
const VERY_POSITIVE: &str = "This should be a very positive week, full of opportunity.";
const UNCERTAIN: &str = "This week is shrouded in the fog of uncertainty.";

const DEFAULT_NEUTRAL_SUMMARIES: &[&str] = &[
    "This week will feature difficult moments but joyous ones too.",
    "Like many, this week will have its ups and downs.",
    "The events of this week will be a mixed bag.",
    "This week will be productive but not without its challenges.",
];

/// Summary sentences keyed by sentiment category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    very_negative: String,
    negative: String,
    neutral: Vec<String>,
    positive: String,
    very_positive: String,
    uncertain: String,
}

impl SummaryTable {
    /// Build a summary table. A single neutral entry makes the neutral
    /// summary fixed instead of random.
    pub fn new(
        very_negative: String,
        negative: String,
        neutral: Vec<String>,
        positive: String,
        very_positive: String,
        uncertain: String,
    ) -> Result<Self> {
        if neutral.is_empty() {
            return Err(HoroscopeError::Config(
                "neutral summary table is empty".to_string(),
            ));
        }

        Ok(Self {
            very_negative,
            negative,
            neutral,
            positive,
            very_positive,
            uncertain,
        })
    }

    /// Summary for a rounded sentiment score
    pub fn summary_for<R: Rng + ?Sized>(&self, score: i32, rng: &mut R) -> &str {
        match SentimentCategory::from_score(score) {
            SentimentCategory::VeryNegative => self.very_negative.as_str(),
            SentimentCategory::Negative => self.negative.as_str(),
            SentimentCategory::Neutral => self
                .neutral
                .choose(rng)
                .map(String::as_str)
                .unwrap_or(self.uncertain.as_str()),
            SentimentCategory::Positive => self.positive.as_str(),
            SentimentCategory::VeryPositive => self.very_positive.as_str(),
            SentimentCategory::Uncertain => self.uncertain.as_str(),
        }
    }

    /// Fallback sentence used when no score can be computed
    pub fn uncertain(&self) -> &str {
        &self.uncertain
    }

    pub fn neutral(&self) -> &[String] {
        &self.neutral
    }

    /// The fixed sentence for a category; `None` for the randomized neutral one
    pub fn fixed(&self, category: SentimentCategory) -> Option<&str> {
        match category {
            SentimentCategory::VeryNegative => Some(self.very_negative.as_str()),
            SentimentCategory::Negative => Some(self.negative.as_str()),
            SentimentCategory::Neutral => None,
            SentimentCategory::Positive => Some(self.positive.as_str()),
            SentimentCategory::VeryPositive => Some(self.very_positive.as_str()),
            SentimentCategory::Uncertain => Some(self.uncertain.as_str()),
        }
    }

    /// Whether `sentence` could have been produced by this table
    #[cfg(test)]
    pub(crate) fn contains(&self, sentence: &str) -> bool {
        self.neutral.iter().any(|s| s == sentence)
            || [
                &self.very_negative,
                &self.negative,
                &self.positive,
                &self.very_positive,
                &self.uncertain,
            ]
            .iter()
            .any(|s| s.as_str() == sentence)
    }
}

impl Default for SummaryTable {
    fn default() -> Self {
        Self {
            very_negative: VERY_NEGATIVE.to_string(),
            negative: NEGATIVE.to_string(),
            neutral: DEFAULT_NEUTRAL_SUMMARIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            positive: POSITIVE.to_string(),
            very_positive: VERY_POSITIVE.to_string(),
            uncertain: UNCERTAIN.to_string(),
        }
    }
}
