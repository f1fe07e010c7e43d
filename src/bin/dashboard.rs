//! Review Dashboard
//!
//! Interactive terminal dashboard with "Enter Text" and "Upload File"
//! modes. Applies optional remote UI customization on startup.

use clap::Parser;
use review_sentiment::{
    config::Config,
    customization::load_settings,
    dashboard::Dashboard,
    sentiment::ReviewAnalyzer,
};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "review-dashboard")]
#[command(about = "Interactive product review sentiment dashboard")]
struct Cli {
    /// Config file path (defaults to review-sentiment.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Skip the remote customization request
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let settings = if cli.offline {
        config.ui.clone()
    } else {
        load_settings(&config).await
    };

    tracing::info!(title = %settings.app_title, "Starting dashboard");

    let analyzer = ReviewAnalyzer::new();
    let stdout = std::io::stdout();
    let dashboard = Dashboard::new(&analyzer, settings).styled(stdout.is_terminal());

    // Interactive input blocks; keep it off the async workers
    tokio::task::block_in_place(|| dashboard.run(std::io::stdin().lock(), stdout.lock()))?;

    Ok(())
}
