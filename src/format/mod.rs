//! Output formatters
//!
//! Provides trait-based output formatting for discovery results.

pub mod gpx;
pub mod json;
pub mod text;

use crate::constants::geo::WALKING_SPEED_METERS_PER_HOUR;
use crate::discover::{DiscoveryResponse, VenueQuery};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a discovery response
    ///
    /// # Arguments
    /// * `response` - The discovery result to format
    /// * `query` - The query that produced it
    fn format(&self, response: &DiscoveryResponse, query: &VenueQuery) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
        &gpx::GpxFormatter,
    ]
    .into_iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}

/// Format a distance for display: "450m", "2.3km", "18.4km"
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Walking time in whole minutes, never less than one
pub fn walk_minutes(meters: f64) -> u64 {
    let minutes = (meters / WALKING_SPEED_METERS_PER_HOUR * 60.0).round();
    (minutes as u64).max(1)
}
