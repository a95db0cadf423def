//! Geographic coordinates
//!
//! This module handles:
//! - The coordinate type shared by venues, observations and queries
//! - Boundary validation of user-supplied coordinates
//! - Great-circle distance (see [`distance`])

pub mod distance;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in decimal degrees, WGS84
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate user-supplied coordinates
    ///
    /// A latitude or longitude of exactly 0 is treated as missing, which is
    /// how absent query parameters arrive at the boundary. Non-finite values
    /// count as missing too. Range is not checked.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Coordinates ({}, {}) are not numbers",
                self.lat, self.lon
            )));
        }
        if self.lat == 0.0 || self.lon == 0.0 {
            return Err(Error::InvalidInput(
                "Latitude and longitude are required".to_string(),
            ));
        }
        Ok(())
    }
}
