//! Venue discovery pipeline
//!
//! Validates the query, fetches venues and Wi-Fi observations concurrently,
//! merges them by proximity, then assembles the sorted (and optionally
//! filtered) result.
//!
//! Upstream failures never reach the caller: a failed venue lookup is
//! replaced by the fallback generator and a failed Wi-Fi lookup by the
//! synthetic observation set. The response looks the same either way; the
//! actual origin is kept in [`DiscoveryResponse::source`], which is not
//! serialized.

pub mod assemble;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::venue::fallback::{self, FallbackSource};
use crate::venue::{Venue, VenueSource};
use crate::wifi::merge::merge;
use crate::wifi::synthetic;
use crate::wifi::{WifiObservation, WifiSource};
use assemble::assemble;
pub use assemble::CategoryFilter;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn, Instrument};

/// A discovery request
#[derive(Debug, Clone, PartialEq)]
pub struct VenueQuery {
    pub center: Coordinates,
    /// Search radius in meters
    pub radius: f64,
    /// Category filter; `None` returns every category
    pub filter: Option<CategoryFilter>,
}

impl VenueQuery {
    /// Create a query without a category filter
    pub fn new(center: Coordinates, radius: f64) -> Self {
        Self {
            center,
            radius,
            filter: None,
        }
    }

    /// Restrict results to the categories the filter includes
    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Validate coordinates and radius
    ///
    /// Any finite radius is accepted; zero or negative radii reach the
    /// sources unchanged and select the smallest fallback tier.
    pub fn validate(&self) -> Result<()> {
        self.center.validate()?;
        if !self.radius.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Radius must be a number of meters, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Discovery result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub venues: Vec<Venue>,
    pub count: usize,
    /// Name of the source the venues came from
    #[serde(skip)]
    pub source: String,
}

impl DiscoveryResponse {
    /// Wrap an assembled venue list; `count` follows the list length
    pub fn new(venues: Vec<Venue>, source: &str) -> Self {
        Self {
            count: venues.len(),
            venues,
            source: source.to_string(),
        }
    }
}

/// Run the discovery pipeline
///
/// # Errors
/// * `Error::InvalidInput` if the query is rejected; no source is contacted
/// * `Error::Assembly` if the merged result cannot be assembled
pub async fn discover<V, W>(
    query: &VenueQuery,
    venue_source: &V,
    wifi_source: &W,
) -> Result<DiscoveryResponse>
where
    V: VenueSource,
    W: WifiSource,
{
    query.validate()?;

    let span = info_span!(
        "discover",
        request_id = %uuid::Uuid::new_v4(),
        lat = query.center.lat,
        lon = query.center.lon,
        radius = query.radius,
    );

    run(query, venue_source, wifi_source).instrument(span).await
}

async fn run<V, W>(query: &VenueQuery, venue_source: &V, wifi_source: &W) -> Result<DiscoveryResponse>
where
    V: VenueSource,
    W: WifiSource,
{
    let ((venues, source), observations) = tokio::join!(
        fetch_venues(venue_source, query.center, query.radius),
        fetch_observations(wifi_source, query.center),
    );

    let merged = merge(&venues, &observations);
    let mut venues = assemble(query.center, merged).map_err(|e| {
        error!(error = %e, "Failed to assemble venues");
        e
    })?;

    if let Some(filter) = query.filter.filter(|f| !f.includes_all()) {
        venues = filter.apply(&venues);
    }

    info!(source, count = venues.len(), "Discovery complete");
    Ok(DiscoveryResponse::new(venues, source))
}

/// Fetch venues, substituting fallback venues on any failure
async fn fetch_venues<V: VenueSource>(
    source: &V,
    center: Coordinates,
    radius: f64,
) -> (Vec<Venue>, &'static str) {
    match source.fetch(center, radius).await {
        Ok(venues) => (venues, source.name()),
        Err(e) => {
            warn!(source = source.name(), error = %e, "Venue lookup failed, using fallback venues");
            (fallback::generate(center, radius), FallbackSource.name())
        }
    }
}

/// Fetch observations, substituting the synthetic set on any failure
async fn fetch_observations<W: WifiSource>(source: &W, center: Coordinates) -> Vec<WifiObservation> {
    match source.observations(center).await {
        Ok(observations) => observations,
        Err(e) => {
            warn!(source = source.name(), error = %e, "Wi-Fi lookup failed, using synthetic observations");
            synthetic::observations_at(center, Utc::now())
        }
    }
}
