//! Horoscope assembly
//!
//! [`HoroscopeGenerator`] ties the stages together: sample statements,
//! average their sentiment, pick a summary, and join the sentences.
//!
//! # Usage
//!
//! ```ignore
//! let tables = Arc::new(HoroscopeTables::default());
//! let mut generator = HoroscopeGenerator::with_seed(tables, 42);
//!
//! let horoscope = generator.generate(4)?;
//! println!("{}", horoscope);
//! ```


use crate::error::{HoroscopeError, Result};
use crate::sampler::sample_statements;
use crate::sentiment::average_sentiment;
use crate::tables::{HoroscopeTables, Statement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How the requested sentence count is spent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoroscopeStyle {
    /// One summary sentence followed by `count - 1` statements
    #[default]
    Summarized,
    /// `count` statements, no summary
    Plain,
}

/// A generated horoscope. `Display` renders the final text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Horoscope {
    pub summary: Option<String>,
    /// Rounded average sentiment; absent in plain style or when nothing was sampled
    pub sentiment: Option<i32>,
    pub statements: Vec<Statement>,
}

impl Horoscope {
    /// Sentences in output order, summary first
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.summary
            .as_deref()
            .into_iter()
            .chain(self.statements.iter().map(|s| s.text.as_str()))
    }

    pub fn sentence_count(&self) -> usize {
        self.summary.iter().count() + self.statements.len()
    }
}

impl fmt::Display for Horoscope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sentence) in self.sentences().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(sentence)?;
        }
        Ok(())
    }
}

/// Generates horoscopes from shared, immutable tables
///
/// Each generator owns its random source, so one seeded generator always
/// produces the same sequence of horoscopes.
pub struct HoroscopeGenerator<R = StdRng> {
    tables: Arc<HoroscopeTables>,
    style: HoroscopeStyle,
    rng: R,
}

impl HoroscopeGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new(tables: Arc<HoroscopeTables>) -> Self {
        Self::with_rng(tables, StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible output
    pub fn with_seed(tables: Arc<HoroscopeTables>, seed: u64) -> Self {
        Self::with_rng(tables, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HoroscopeGenerator<R> {
    pub fn with_rng(tables: Arc<HoroscopeTables>, rng: R) -> Self {
        Self {
            tables,
            style: HoroscopeStyle::default(),
            rng,
        }
    }

    pub fn with_style(mut self, style: HoroscopeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> HoroscopeStyle {
        self.style
    }

    /// Generate a horoscope of `sentence_count` sentences.
    ///
    /// In summarized style the count includes the summary, so `1` yields the
    /// summary alone. Counts beyond what the table can supply are clamped.
    pub fn generate(&mut self, sentence_count: usize) -> Result<Horoscope> {
        if sentence_count < 1 {
            return Err(HoroscopeError::InvalidArgument(format!(
                "sentence count must be at least 1, got {}",
                sentence_count
            )));
        }

        let horoscope = match self.style {
            HoroscopeStyle::Summarized => self.generate_summarized(sentence_count)?,
            HoroscopeStyle::Plain => Horoscope {
                summary: None,
                sentiment: None,
                statements: sample_statements(
                    &self.tables.statements,
                    sentence_count,
                    &mut self.rng,
                ),
            },
        };

        tracing::debug!(
            requested = sentence_count,
            produced = horoscope.sentence_count(),
            sentiment = ?horoscope.sentiment,
            style = ?self.style,
            "Generated horoscope"
        );
        Ok(horoscope)
    }

    fn generate_summarized(&mut self, sentence_count: usize) -> Result<Horoscope> {
        // One slot is reserved for the summary
        let statements =
            sample_statements(&self.tables.statements, sentence_count - 1, &mut self.rng);

        let (summary, sentiment) = match average_sentiment(&statements) {
            Ok(score) => {
                let summary = self.tables.summaries.summary_for(score, &mut self.rng);
                (summary.to_string(), Some(score))
            }
            Err(HoroscopeError::EmptySelection) => {
                (self.tables.summaries.uncertain().to_string(), None)
            }
            Err(e) => return Err(e),
        };

        Ok(Horoscope {
            summary: Some(summary),
            sentiment,
            statements,
        })
    }
}

/// One-shot horoscope text from the built-in tables
pub fn generate_horoscope(sentence_count: usize) -> Result<String> {
    let mut generator = HoroscopeGenerator::new(Arc::new(HoroscopeTables::default()));
    generator.generate(sentence_count).map(|h| h.to_string())
}
