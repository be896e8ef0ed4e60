//! Sentiment aggregation
//!
//! Reduces a selection of statements to one rounded score and classifies
//! that score into a [`SentimentCategory`].

use crate::error::{HoroscopeError, Result};
use crate::tables::Statement;
use serde::Serialize;

/// Typed form of a rounded sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
    /// Anything outside [-2, 2]; unreachable with a validated table
    Uncertain,
}

impl SentimentCategory {
    pub fn from_score(score: i32) -> Self {
        match score {
            -2 => Self::VeryNegative,
            -1 => Self::Negative,
            0 => Self::Neutral,
            1 => Self::Positive,
            2 => Self::VeryPositive,
            _ => Self::Uncertain,
        }
    }
}

/// Mean sentiment of `statements`, rounded half away from zero.
///
/// A mean of exactly -0.5 becomes -1, not 0 as round-half-up
/// would give, so `[0, -1]` reads as a negative week.
pub fn average_sentiment(statements: &[Statement]) -> Result<i32> {
    if statements.is_empty() {
        return Err(HoroscopeError::EmptySelection);
    }

    let total: i64 = statements.iter().map(|s| i64::from(s.sentiment)).sum();
    let mean = total as f64 / statements.len() as f64;

    // `as` turns -0.0 into 0
    let score = mean.round() as i32;

    tracing::debug!(total, count = statements.len(), mean, score, "Averaged sentiment");
    Ok(score)
}
