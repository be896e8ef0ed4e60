//! Horoscope Generator
//!
//! Prints randomized horoscopes to stdout.

use clap::{Parser, Subcommand};
use horoscope::{
    config::Config,
    sentiment::SentimentCategory,
    HoroscopeGenerator, HoroscopeStyle, HoroscopeTables,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "horoscope")]
#[command(about = "Generate randomized horoscopes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (searches default locations when omitted)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one horoscope per requested count
    Generate {
        /// Number of sentences, summary included (repeatable)
        #[arg(short = 'n', long = "count")]
        counts: Vec<usize>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Statements only, no summary sentence
        #[arg(long)]
        plain: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the active statement and summary tables
    Table,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let tables = Arc::new(config.tables()?);

    match cli.command {
        None => run_generate(&config, tables, Vec::new(), None, false, false),
        Some(Commands::Generate {
            counts,
            seed,
            plain,
            json,
        }) => run_generate(&config, tables, counts, seed, plain, json),
        Some(Commands::Table) => {
            show_table(&tables);
            Ok(())
        }
    }
}

fn run_generate(
    config: &Config,
    tables: Arc<HoroscopeTables>,
    counts: Vec<usize>,
    seed: Option<u64>,
    plain: bool,
    json: bool,
) -> anyhow::Result<()> {
    let counts = if counts.is_empty() {
        config.generator.default_counts.clone()
    } else {
        counts
    };
    let style = if plain {
        HoroscopeStyle::Plain
    } else {
        config.generator.style
    };

    let mut generator = match seed.or(config.generator.seed) {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            HoroscopeGenerator::with_seed(tables, seed)
        }
        None => HoroscopeGenerator::new(tables),
    }
    .with_style(style);

    for count in counts {
        let horoscope = generator.generate(count)?;

        if json {
            let value = serde_json::json!({
                "text": horoscope.to_string(),
                "horoscope": horoscope,
            });
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", horoscope);
            println!();
        }
    }

    Ok(())
}

fn show_table(tables: &HoroscopeTables) {
    println!("\n🔮 Statements ({}):\n", tables.statements.len());
    println!("{:>9}  {}", "Sentiment", "Text");
    println!("{}", "-".repeat(80));

    for statement in tables.statements.iter() {
        println!("{:>9}  {}", statement.sentiment, statement.text);
    }

    println!("\n📜 Summaries:\n");
    let fixed = [
        (-2, SentimentCategory::VeryNegative),
        (-1, SentimentCategory::Negative),
        (1, SentimentCategory::Positive),
        (2, SentimentCategory::VeryPositive),
    ];
    for (score, category) in fixed {
        if let Some(text) = tables.summaries.fixed(category) {
            println!("{:>9}  {}", score, text);
        }
    }
    for text in tables.summaries.neutral() {
        println!("{:>9}  {}", 0, text);
    }
    println!("{:>9}  {}", "other", tables.summaries.uncertain());
}
