//! Synthetic Wi-Fi observations
//!
//! A fixed set of three networks with varied signal strength and recency,
//! anchored a few meters away from neighborhood venues around the query
//! point. Stands in for a real survey source.

use crate::coord::distance::offset;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::wifi::{WifiObservation, WifiSource};
use chrono::{DateTime, Duration, Utc};

/// (ssid, dBm, minutes ago, delta lat, delta lon)
const NETWORKS: &[(&str, i32, i64, f64, f64)] = &[
    ("CentralCoffee_Free", -45, 60, 0.0022, 0.001),
    ("Library_Public_WiFi", -55, 30, -0.001, 0.0031),
    ("WorkSpace_Guest", -40, 10, 0.001, -0.0021),
];

/// Build the synthetic observation set relative to `center` and `now`
pub fn observations_at(center: Coordinates, now: DateTime<Utc>) -> Vec<WifiObservation> {
    NETWORKS
        .iter()
        .map(|&(ssid, dbm, minutes_ago, delta_lat, delta_lon)| WifiObservation {
            ssid: ssid.to_string(),
            signal_strength_dbm: dbm,
            location: offset(center, delta_lat, delta_lon),
            last_seen: now - Duration::minutes(minutes_ago),
        })
        .collect()
}

/// Wi-Fi source returning the synthetic observation set
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticWifiSource;

impl WifiSource for SyntheticWifiSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn observations(&self, center: Coordinates) -> Result<Vec<WifiObservation>> {
        Ok(observations_at(center, Utc::now()))
    }
}
