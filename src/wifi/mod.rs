//! Wi-Fi observations
//!
//! Defines observation and annotation types, the `WifiSource` trait, and the
//! proximity merge that attaches observations to venues.

pub mod merge;
pub mod synthetic;

use crate::constants::wifi::{DEFAULT_SIGNAL_DBM, DEFAULT_SSID};
use crate::coord::Coordinates;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Wi-Fi network seen at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiObservation {
    pub ssid: String,
    pub signal_strength_dbm: i32,
    #[serde(flatten)]
    pub location: Coordinates,
    pub last_seen: DateTime<Utc>,
}

/// Wi-Fi details attached to a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiAnnotation {
    pub ssid: String,
    pub signal_strength_dbm: i32,
    pub last_seen: DateTime<Utc>,
}

impl WifiAnnotation {
    /// Annotation used when no observation is close enough to a venue
    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self {
            ssid: DEFAULT_SSID.to_string(),
            signal_strength_dbm: DEFAULT_SIGNAL_DBM,
            last_seen: now,
        }
    }

    /// Whether this is the "no observation matched" annotation
    pub fn is_default(&self) -> bool {
        self.ssid == DEFAULT_SSID && self.signal_strength_dbm == DEFAULT_SIGNAL_DBM
    }

    /// Signal strength as 1-4 bars
    pub fn bars(&self) -> u8 {
        match self.signal_strength_dbm {
            s if s > -50 => 4,
            s if s > -60 => 3,
            s if s > -70 => 2,
            _ => 1,
        }
    }
}

impl From<&WifiObservation> for WifiAnnotation {
    fn from(observation: &WifiObservation) -> Self {
        Self {
            ssid: observation.ssid.clone(),
            signal_strength_dbm: observation.signal_strength_dbm,
            last_seen: observation.last_seen,
        }
    }
}

/// Trait for Wi-Fi observation sources
///
/// Observations carry no guaranteed spatial correlation to the query point;
/// the merge step decides which ones belong to which venue.
pub trait WifiSource: Send + Sync {
    /// Returns the source name (e.g., "synthetic")
    fn name(&self) -> &'static str;

    /// Fetch observations around `center`
    fn observations(
        &self,
        center: Coordinates,
    ) -> impl std::future::Future<Output = Result<Vec<WifiObservation>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(dbm: i32) -> WifiAnnotation {
        WifiAnnotation {
            ssid: "Test".to_string(),
            signal_strength_dbm: dbm,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn test_bars() {
        assert_eq!(annotation(-40).bars(), 4);
        assert_eq!(annotation(-50).bars(), 3);
        assert_eq!(annotation(-55).bars(), 3);
        assert_eq!(annotation(-65).bars(), 2);
        assert_eq!(annotation(-70).bars(), 1);
        assert_eq!(annotation(-90).bars(), 1);
    }

    #[test]
    fn test_default_annotation() {
        let now = Utc::now();
        let default = WifiAnnotation::default_at(now);

        assert_eq!(default.ssid, "Free WiFi");
        assert_eq!(default.signal_strength_dbm, -65);
        assert_eq!(default.last_seen, now);
        assert!(default.is_default());
        assert!(!annotation(-40).is_default());
    }

    #[test]
    fn test_annotation_from_observation() {
        let observation = WifiObservation {
            ssid: "Cafe_Guest".to_string(),
            signal_strength_dbm: -48,
            location: Coordinates::new(40.0, -73.0),
            last_seen: Utc::now(),
        };
        let annotation = WifiAnnotation::from(&observation);

        assert_eq!(annotation.ssid, "Cafe_Guest");
        assert_eq!(annotation.signal_strength_dbm, -48);
        assert_eq!(annotation.last_seen, observation.last_seen);
    }

    #[test]
    fn test_last_seen_serializes_as_rfc3339() {
        let json = serde_json::to_value(annotation(-50)).unwrap();
        let last_seen = json["last_seen"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(last_seen).is_ok());
    }
}
