use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bannerloop_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "bannerloop")]
#[command(author, version, about = "An infinitely-looping banner carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma-separated banner items (overrides the config file)
    #[arg(short = 'i', long = "items", value_delimiter = ',')]
    items: Option<Vec<String>>,

    /// Auto-scroll interval in seconds
    #[arg(short = 't', long = "interval")]
    interval: Option<f64>,

    /// Padded index auto-scroll starts from (sentinels are clamped away)
    #[arg(long = "start-index")]
    start_index: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo screen
    Run,
    /// Write the default configuration file and print its path
    InitConfig,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration and apply CLI overrides
    let mut config = AppConfig::load()?;
    if let Some(items) = cli.items {
        config.banner.items = items;
    }
    if let Some(interval) = cli.interval {
        config.banner.scrolling_time = interval;
    }
    if let Some(start_index) = cli.start_index {
        config.banner.auto_scroll_index = start_index;
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::InitConfig) => commands::init_config::run(),
    }
}
