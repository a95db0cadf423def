//! Geocoding module
//!
//! Resolves a search origin for the CLI: place names via Nominatim, or the
//! caller's approximate position via IP geolocation.

pub mod ip_location;
pub mod nominatim;

use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Display name (address or description)
    pub display_name: String,
}

impl GeoLocation {
    /// Coordinates of this location
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a location string to coordinates
    ///
    /// Returns the best match for the query, or None if not found
    fn geocode(&self, query: &str) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder() -> Result<nominatim::NominatimBackend> {
    nominatim::NominatimBackend::new()
}

/// Get the IP location service
pub fn get_ip_locator() -> Result<ip_location::IpLocator> {
    ip_location::IpLocator::new()
}
