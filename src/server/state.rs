//! Server shared state
//!
//! Holds the venue and Wi-Fi sources used by every request.

use crate::config::Config;
use crate::error::Result;
use crate::venue::{get_venue_source, VenueBackend, VenueSource};
use crate::wifi::synthetic::SyntheticWifiSource;
use crate::wifi::WifiSource;

/// Shared state for the HTTP server
#[derive(Debug)]
pub struct AppState {
    /// Configured venue source
    pub venues: VenueBackend,

    /// Wi-Fi observation source
    pub wifi: SyntheticWifiSource,
}

impl AppState {
    /// Create new application state
    ///
    /// Fails if the venue source cannot be built (e.g. the HTTP client).
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            venues: get_venue_source(config)?,
            wifi: SyntheticWifiSource,
        })
    }

    /// Name of the configured venue source
    pub fn venue_source_name(&self) -> &'static str {
        self.venues.name()
    }

    /// Name of the Wi-Fi source
    pub fn wifi_source_name(&self) -> &'static str {
        self.wifi.name()
    }
}
