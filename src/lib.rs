//! Horoscope Generator
//!
//! Builds randomized horoscopes from sentiment-tagged statements, opened by
//! a summary sentence that reflects their average sentiment.

pub mod config;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod sentiment;
pub mod summary;
pub mod tables;

#[cfg(test)]
mod error_tests;

pub use error::{HoroscopeError, Result};
pub use generator::{generate_horoscope, Horoscope, HoroscopeGenerator, HoroscopeStyle};
pub use tables::{HoroscopeTables, Statement, StatementTable};
