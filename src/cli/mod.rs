//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod search;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Find nearby cafes, libraries and coworking spaces with Wi-Fi
#[derive(Parser)]
#[command(name = "wifi-finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for venues around a location
    Search(search::SearchArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show version, sources and server status
    Status(status::StatusArgs),
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            init_logging("warn");
            search::run(args).await
        }
        Commands::Serve(args) => {
            init_logging("info");
            serve::run(args).await
        }
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
