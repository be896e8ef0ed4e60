//! Statement tables
//!
//! Holds the immutable data a generator draws from: the sentiment-tagged
//! statements and the summary sentences. Tables are validated once when
//! they are built and never mutated afterwards, so they can be shared
//! behind an `Arc` by any number of generators.

use crate::error::{HoroscopeError, Result};
use crate::summary::SummaryTable;
use serde::{Deserialize, Serialize};

/// Most negative sentiment a statement may carry
pub const MIN_SENTIMENT: i32 = -2;
/// Most positive sentiment a statement may carry
pub const MAX_SENTIMENT: i32 = 2;

const DEFAULT_STATEMENTS: &[(&str, i32)] = &[
    ("Life often presents us with challenges, and these are coming your way.", -2),
    ("There are difficult and important choices ahead, so be sure to choose your path carefully.", -2),
    ("Be careful not to spend too much effort on things that don't deserve it.", -1),
    ("Regardless of how life is treating you, remember to be cautious; not everything is what it seems.", -1),
    ("Those you are close to will need your support, but remember to look after yourself too.", -1),
    ("Spontaneity can be a good thing, but be mindful of being too impulsive.", -1),
    ("Don't be afraid to ask questions of yourself and others.", 0),
    ("Try not to be overly critical of yourself; overcoming failure is a part of life.", 0),
    ("Be sure to practice self-care and remember to set healthy boundaries.", 0),
    ("Remember that you are an independent thinker who can be proud of doing things differently to others.", 1),
    ("You possess a great deal of untapped potential, so seize the day!", 1),
    ("Challenges have come your way recently, but the future is looking brighter.", 1),
    ("Acknowledging and accepting your emotions will help you to navigate whatever life throws your way.", 1),
    ("You may find your energy levels improving over the next few days, along with a renewed enthusiasm for life.", 2),
    ("There will be a great opportunity in the days to come, but it may not be obvious so you must seek it out!", 2),
    ("This is a great time to ignite your relationships, both old and new!", 2),
];

/// A fixed text fragment tagged with how optimistic it is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    /// -2 is very bad, 0 is neutral, 2 is very positive
    pub sentiment: i32,
}

impl Statement {
    pub fn new(text: impl Into<String>, sentiment: i32) -> Self {
        Self {
            text: text.into(),
            sentiment,
        }
    }
}

/// Ordered, non-empty set of statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementTable {
    statements: Vec<Statement>,
}

impl StatementTable {
    /// Build a table, rejecting empty input and out-of-range sentiments
    pub fn new(statements: Vec<Statement>) -> Result<Self> {
        if statements.is_empty() {
            return Err(HoroscopeError::Config("statement table is empty".to_string()));
        }

        if let Some(bad) = statements
            .iter()
            .find(|s| !(MIN_SENTIMENT..=MAX_SENTIMENT).contains(&s.sentiment))
        {
            return Err(HoroscopeError::Config(format!(
                "sentiment {} of {:?} is outside [{}, {}]",
                bad.sentiment, bad.text, MIN_SENTIMENT, MAX_SENTIMENT
            )));
        }

        Ok(Self { statements })
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }
}

impl Default for StatementTable {
    fn default() -> Self {
        Self {
            statements: DEFAULT_STATEMENTS
                .iter()
                .map(|(text, sentiment)| Statement::new(*text, *sentiment))
                .collect(),
        }
    }
}

/// Everything a generator reads: statements plus summaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoroscopeTables {
    pub statements: StatementTable,
    pub summaries: SummaryTable,
}

impl HoroscopeTables {
    pub fn new(statements: StatementTable, summaries: SummaryTable) -> Self {
        Self {
            statements,
            summaries,
        }
    }
}
