use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nestscroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "nestscroll")]
#[command(author, version, about = "Scroll elements into view through nested scroll containers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/nestscroll/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scroll tasks for a target without applying them
    Plan {
        #[command(flatten)]
        target: TargetArgs,
        /// Print tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scroll a target into view and print the resulting offsets
    Run {
        #[command(flatten)]
        target: TargetArgs,
        /// Easing curve: linear, easeIn, easeOut, easeInOut
        #[arg(short = 'e', long)]
        easing: Option<String>,
        /// Animation duration in milliseconds
        #[arg(short = 't', long)]
        timeout: Option<f64>,
    },
}

#[derive(Args)]
pub struct TargetArgs {
    /// Scene description (TOML)
    #[arg(short = 's', long)]
    scene: PathBuf,
    /// Id of the element to bring into view
    #[arg(short = 'n', long)]
    target: String,
    /// Alignment tokens, e.g. "left bottom"
    #[arg(short = 'a', long)]
    align: Option<String>,
    /// Scroll even when the target is already visible
    #[arg(short = 'f', long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Plan { target, json } => commands::plan::run(&config, &target, json),
        Commands::Run {
            target,
            easing,
            timeout,
        } => commands::run::run(&config, &target, easing, timeout).await,
    }
}
