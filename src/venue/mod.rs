//! Venues and venue sources
//!
//! This module defines the `Venue` model and the `VenueSource` trait. Each
//! source is a single file implementing the trait:
//! - [`overpass`]: live lookup against the OpenStreetMap Overpass API
//! - [`fallback`]: deterministic synthetic venues, tiered by search radius

pub mod fallback;
pub mod overpass;

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::wifi::WifiAnnotation;
use serde::{Deserialize, Serialize};

/// Venue categories
///
/// Closed set: anything the POI index reports that is not a library or a
/// coworking space lands in the cafe bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cafe,
    Library,
    Coworking,
}

impl Category {
    /// Map an OpenStreetMap `amenity`/`leisure` tag value to a category
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("library") => Self::Library,
            Some("coworking_space") | Some("hackerspace") => Self::Coworking,
            _ => Self::Cafe,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cafe => "Cafe",
            Self::Library => "Library",
            Self::Coworking => "Coworking",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cafe => write!(f, "cafe"),
            Self::Library => write!(f, "library"),
            Self::Coworking => write!(f, "coworking"),
        }
    }
}

/// List all categories
pub fn available_categories() -> Vec<Category> {
    vec![Category::Cafe, Category::Library, Category::Coworking]
}

/// Opening information for a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningInfo {
    pub is_open: bool,
    pub hours: String,
}

/// A public venue that may offer Wi-Fi
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique within a single result set
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub location: Coordinates,
    pub category: Category,
    /// Distance from the query point; only meaningful after assembly
    pub distance_meters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<OpeningInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiAnnotation>,
}

impl Venue {
    /// Create a venue with no distance, opening info or Wi-Fi yet
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinates,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            category,
            distance_meters: 0.0,
            opening: None,
            wifi: None,
        }
    }

    /// Attach opening information
    pub fn with_opening(mut self, is_open: bool, hours: impl Into<String>) -> Self {
        self.opening = Some(OpeningInfo {
            is_open,
            hours: hours.into(),
        });
        self
    }

    /// Whether the venue is open; venues without opening data count as open
    pub fn is_open(&self) -> bool {
        self.opening.as_ref().map_or(true, |o| o.is_open)
    }
}

/// Trait for venue sources
pub trait VenueSource: Send + Sync {
    /// Returns the source name (e.g., "overpass", "fallback")
    fn name(&self) -> &'static str;

    /// Fetch candidate venues within `radius` meters of `center`
    ///
    /// Distances on the returned venues are not trusted by callers.
    fn fetch(
        &self,
        center: Coordinates,
        radius: f64,
    ) -> impl std::future::Future<Output = Result<Vec<Venue>>> + Send;
}

/// The configured venue source
#[derive(Debug, Clone)]
pub enum VenueBackend {
    Overpass(overpass::OverpassSource),
    Fallback(fallback::FallbackSource),
}

impl VenueSource for VenueBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Overpass(source) => source.name(),
            Self::Fallback(source) => source.name(),
        }
    }

    async fn fetch(&self, center: Coordinates, radius: f64) -> Result<Vec<Venue>> {
        match self {
            Self::Overpass(source) => source.fetch(center, radius).await,
            Self::Fallback(source) => source.fetch(center, radius).await,
        }
    }
}

/// Build the venue source described by the config
///
/// Offline mode uses the synthetic generator directly.
pub fn get_venue_source(config: &Config) -> Result<VenueBackend> {
    if config.sources.offline {
        return Ok(VenueBackend::Fallback(fallback::FallbackSource));
    }
    let source = overpass::OverpassSource::new(
        &config.sources.overpass_url,
        std::time::Duration::from_secs(config.sources.timeout_secs),
    )?;
    Ok(VenueBackend::Overpass(source))
}
