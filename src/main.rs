//! Product Review Sentiment Analyzer
//!
//! Command-line front end: single reviews, review files and a built-in demo.

use clap::{Parser, Subcommand};
use review_sentiment::{
    config::Config,
    error::ReviewError,
    ingest::load_reviews,
    report::{render_batch, render_categorized, render_single},
    sentiment::{BatchResult, ReviewAnalyzer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample comments used by `demo`
const DEMO_COMMENTS: [&str; 8] = [
    "This product is amazing! Really satisfied with the quality.",
    "Worst purchase ever, completely disappointed.",
    "The product is okay, nothing special.",
    "Excellent customer service and fast delivery!",
    "The product broke after two days.",
    "It meets my expectations.",
    "Absolutely love this product, worth every penny!",
    "Not sure if I like it or not.",
];

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Lexicon-based sentiment analysis for product reviews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to review-sentiment.toml if present)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single review
    Analyze {
        /// Review text
        text: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a JSON, CSV or TXT file of reviews
    Batch {
        /// Path to the reviews file
        file: String,
        /// Print the full dashboard report instead of the bucket listing
        #[arg(long, conflicts_with = "json")]
        report: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample comments
    Demo,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let analyzer = ReviewAnalyzer::new();

    match cli.command {
        Commands::Analyze { text, json } => {
            if text.trim().is_empty() {
                return Err(ReviewError::Input("review text is empty".to_string()).into());
            }
            let result = analyzer.analyze_review(&text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_single(&result, &config.ui));
            }
        }
        Commands::Batch { file, report, json } => {
            tracing::info!("Analyzing reviews from {}", file);
            let reviews = load_reviews(&file)?;
            let batch = analyzer.analyze_reviews(&reviews)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else if report {
                print!("{}", render_batch(&batch, &config.ui));
            } else {
                print_categorized(&batch);
            }
        }
        Commands::Demo => {
            let batch = analyzer.analyze_reviews(&DEMO_COMMENTS)?;
            print_categorized(&batch);
        }
    }

    Ok(())
}

fn print_categorized(batch: &BatchResult) {
    print!("{}", render_categorized(batch));
}
