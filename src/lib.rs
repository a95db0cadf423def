//! wifi-finder: venue discovery with Wi-Fi enrichment
//!
//! A library and CLI tool that finds cafes, libraries and coworking spaces
//! near a point and annotates each with the closest observed Wi-Fi network.
//!
//! ## Features
//!
//! - Live POI lookup through the Overpass API
//! - Deterministic fallback venues when the lookup fails
//! - Proximity merge of Wi-Fi observations (100 m match radius)
//! - Distance-sorted results with category filtering
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use wifi_finder::coord::Coordinates;
//! use wifi_finder::discover::{discover, VenueQuery};
//! use wifi_finder::venue::fallback::FallbackSource;
//! use wifi_finder::wifi::synthetic::SyntheticWifiSource;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let query = VenueQuery::new(Coordinates::new(40.7128, -74.0060), 1000.0);
//! let response = discover(&query, &FallbackSource, &SyntheticWifiSource)
//!     .await
//!     .unwrap();
//!
//! for venue in &response.venues {
//!     println!("{} ({:.0} m)", venue.name, venue.distance_meters);
//! }
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod discover;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;
pub mod venue;
pub mod wifi;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use discover::{discover, CategoryFilter, DiscoveryResponse, VenueQuery};
pub use error::{Error, Result};
pub use venue::{Category, Venue, VenueSource};
pub use wifi::{WifiAnnotation, WifiObservation, WifiSource};
