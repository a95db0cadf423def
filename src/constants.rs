//! Centralized constants for the wifi-finder crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Average walking speed in meters per hour (5 km/h)
    pub const WALKING_SPEED_METERS_PER_HOUR: f64 = 5_000.0;
}

/// External API endpoints
pub mod api {
    /// Overpass API interpreter (OpenStreetMap POI index)
    pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";

    /// User-Agent sent to OpenStreetMap services
    pub const USER_AGENT: &str = concat!("wifi-finder/", env!("CARGO_PKG_VERSION"));
}

/// Venue lookup settings
pub mod venue {
    /// Upper bound for a single POI index query, in seconds
    pub const OVERPASS_TIMEOUT_SECS: u64 = 25;

    /// Name used when a POI carries neither a name nor a brand tag
    pub const UNNAMED_VENUE: &str = "Unnamed Venue";

    /// Hours shown when a POI has no opening_hours tag
    pub const UNKNOWN_HOURS: &str = "Unknown";
}

/// Wi-Fi matching settings
pub mod wifi {
    /// An observation must be strictly closer than this to annotate a venue
    pub const MATCH_RADIUS_METERS: f64 = 100.0;

    /// SSID attached when no observation qualifies
    pub const DEFAULT_SSID: &str = "Free WiFi";

    /// Signal strength attached when no observation qualifies
    pub const DEFAULT_SIGNAL_DBM: i32 = -65;
}
