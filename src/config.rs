//! Configuration management

use crate::error::{HoroscopeError, Result};
use crate::generator::HoroscopeStyle;
use crate::summary::SummaryTable;
use crate::tables::{HoroscopeTables, Statement, StatementTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Replacement tables; the built-in ones are used when absent
    pub tables: Option<TablesConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Whether the sentence count includes a summary
    pub style: HoroscopeStyle,
    /// Fixed seed for reproducible output (OS entropy when unset)
    pub seed: Option<u64>,
    /// Sentence counts printed when no count is given on the command line
    pub default_counts: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TablesConfig {
    #[serde(default)]
    pub neutral_summaries: Option<Vec<String>>,
    #[serde(default)]
    pub very_negative: Option<String>,
    #[serde(default)]
    pub negative: Option<String>,
    #[serde(default)]
    pub positive: Option<String>,
    #[serde(default)]
    pub very_positive: Option<String>,
    #[serde(default)]
    pub uncertain: Option<String>,
    /// Replacement statements; the built-in table is used when absent
    #[serde(default)]
    pub statements: Option<Vec<Statement>>,
}

impl Config {
    /// Load configuration from file (optional) and `HOROSCOPE_*` environment
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("HOROSCOPE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load from the first default location that exists. The environment
    /// is still applied when no file is found.
    pub fn load_default() -> Result<Self> {
        let paths = [
            "horoscope.toml",
            "horoscope.yaml",
            "~/.config/horoscope/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using built-in defaults");
        Self::load(paths[0])
    }

    /// Validated tables for the generator
    pub fn tables(&self) -> Result<HoroscopeTables> {
        match &self.tables {
            Some(tables) => tables.build(),
            None => Ok(HoroscopeTables::default()),
        }
    }
}

impl TablesConfig {
    /// Build tables, filling unset summaries from the built-in ones
    pub fn build(&self) -> Result<HoroscopeTables> {
        use crate::sentiment::SentimentCategory as C;

        let defaults = SummaryTable::default();
        let pick = |custom: &Option<String>, category: C| -> Result<String> {
            match custom {
                Some(text) => Ok(text.clone()),
                None => defaults.fixed(category).map(str::to_string).ok_or_else(|| {
                    HoroscopeError::Config(format!("no built-in summary for {:?}", category))
                }),
            }
        };

        let summaries = SummaryTable::new(
            pick(&self.very_negative, C::VeryNegative)?,
            pick(&self.negative, C::Negative)?,
            self.neutral_summaries
                .clone()
                .unwrap_or_else(|| defaults.neutral().to_vec()),
            pick(&self.positive, C::Positive)?,
            pick(&self.very_positive, C::VeryPositive)?,
            pick(&self.uncertain, C::Uncertain)?,
        )?;

        let statements = match &self.statements {
            Some(statements) => StatementTable::new(statements.clone())?,
            None => StatementTable::default(),
        };
        Ok(HoroscopeTables::new(statements, summaries))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            style: HoroscopeStyle::Summarized,
            seed: None,
            default_counts: vec![2, 3, 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Loading reads `HOROSCOPE_*`, so tests that load must not overlap with
    // the one that sets it
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "horoscope-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.style, HoroscopeStyle::Summarized);
        assert_eq!(config.generator.seed, None);
        assert_eq!(config.generator.default_counts, vec![2, 3, 4]);
        assert_eq!(config.tables().unwrap(), HoroscopeTables::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = std::env::temp_dir().join("horoscope-does-not-exist.toml");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.generator.default_counts, vec![2, 3, 4]);
        assert!(config.tables.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_config(
            "load",
            r#"
[generator]
style = "plain"
seed = 9
default_counts = [5]

[tables]
statements = [
    { text = "Water the plants.", sentiment = 0 },
    { text = "Call an old friend.", sentiment = 2 },
]
neutral_summaries = ["Balanced."]
positive = "Bright days."
"#,
        );

        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.generator.style, HoroscopeStyle::Plain);
        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.generator.default_counts, vec![5]);

        let tables = config.tables().unwrap();
        assert_eq!(tables.statements.len(), 2);
        assert_eq!(tables.summaries.neutral(), ["Balanced.".to_string()]);
        assert_eq!(
            tables.summaries.fixed(crate::sentiment::SentimentCategory::Positive),
            Some("Bright days.")
        );
        assert_eq!(tables.summaries.uncertain(), SummaryTable::default().uncertain());
    }

    #[test]
    fn test_serialized_config_round_trips_through_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = Config {
            generator: GeneratorConfig {
                seed: Some(123),
                ..Default::default()
            },
            tables: Some(TablesConfig {
                statements: Some(vec![Statement::new("Take a walk.", 1)]),
                neutral_summaries: None,
                very_negative: None,
                negative: None,
                positive: None,
                very_positive: None,
                uncertain: Some("Who knows.".to_string()),
            }),
        };
        let path = temp_config("serialized", &toml::to_string(&config).unwrap());

        let loaded = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.generator.seed, Some(123));
        let tables = loaded.tables().unwrap();
        assert_eq!(tables.summaries.uncertain(), "Who knows.");
        assert_eq!(tables.summaries.neutral(), SummaryTable::default().neutral());
    }

    #[test]
    fn test_invalid_sentiment_rejected() {
        let tables = TablesConfig {
            statements: Some(vec![Statement::new("Too much.", 5)]),
            neutral_summaries: None,
            very_negative: None,
            negative: None,
            positive: None,
            very_positive: None,
            uncertain: None,
        };
        let err = tables.build().unwrap_err();
        assert!(matches!(err, HoroscopeError::Config(_)));
    }

    #[test]
    fn test_empty_neutral_rejected() {
        let tables = TablesConfig {
            statements: Some(vec![Statement::new("Fine.", 0)]),
            neutral_summaries: Some(Vec::new()),
            very_negative: None,
            negative: None,
            positive: None,
            very_positive: None,
            uncertain: None,
        };
        assert!(tables.build().is_err());
    }

    #[test]
    fn test_malformed_file_errors() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_config("malformed", "[generator]\nseed = \"not a number\"\n");
        let result = Config::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(HoroscopeError::ConfigLoad(_))));
    }

    #[test]
    fn test_summary_only_tables_keep_builtin_statements() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_config("summaries-only", "[tables]\npositive = \"Sunny spells.\"\n");

        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).ok();

        let tables = config.tables().unwrap();
        assert_eq!(tables.statements, StatementTable::default());
        assert_eq!(
            tables.summaries.fixed(crate::sentiment::SentimentCategory::Positive),
            Some("Sunny spells.")
        );
    }

    #[test]
    fn test_environment_applies_without_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("HOROSCOPE_GENERATOR__SEED", "7");
        std::env::set_var("HOROSCOPE_GENERATOR__STYLE", "plain");

        let missing = std::env::temp_dir().join("horoscope-env-does-not-exist.toml");
        let from_missing = Config::load(&missing);
        let from_default = Config::load_default();

        std::env::remove_var("HOROSCOPE_GENERATOR__SEED");
        std::env::remove_var("HOROSCOPE_GENERATOR__STYLE");

        let from_missing = from_missing.unwrap();
        assert_eq!(from_missing.generator.seed, Some(7));
        assert_eq!(from_missing.generator.style, HoroscopeStyle::Plain);

        let from_default = from_default.unwrap();
        assert_eq!(from_default.generator.seed, Some(7));
        assert_eq!(from_default.generator.style, HoroscopeStyle::Plain);
    }
}
