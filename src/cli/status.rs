//! Status command handler
//!
//! Shows version, configured sources and optionally server status.

use crate::config::Config;
use crate::error::Result;
use crate::venue::{get_venue_source, VenueSource};
use crate::wifi::synthetic::SyntheticWifiSource;
use crate::wifi::WifiSource;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    println!("wifi-finder v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let venue_source = get_venue_source(&config)?;
    println!("Venue source: {}", venue_source.name());
    if !config.sources.offline {
        println!("  Endpoint: {}", config.sources.overpass_url);
        println!("  Timeout:  {}s", config.sources.timeout_secs);
    }
    println!("Wi-Fi source: {}", SyntheticWifiSource.name());
    println!();

    if args.server {
        check_server_status(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    for field in ["version", "venue_source", "wifi_source"] {
                        if let Some(value) = status.get(field).and_then(|v| v.as_str()) {
                            println!("  {}: {}", field, value);
                        }
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
