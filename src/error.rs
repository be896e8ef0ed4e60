//! Error types for the horoscope generator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoroscopeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot average the sentiment of an empty selection")]
    EmptySelection,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, HoroscopeError>;
