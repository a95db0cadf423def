//! Proximity merge of venues and Wi-Fi observations
//!
//! Each venue takes the first observation, in input order, that lies strictly
//! within [`MATCH_RADIUS_METERS`]. There is no ranking among several
//! qualifying observations. Venues with no match get the default annotation.

use crate::constants::wifi::MATCH_RADIUS_METERS;
use crate::coord::distance::haversine_distance;
use crate::venue::Venue;
use crate::wifi::{WifiAnnotation, WifiObservation};
use chrono::{DateTime, Utc};

/// Annotate venues with Wi-Fi, stamping default annotations with the current time
///
/// Returns new venues in the same order; the inputs are left untouched.
pub fn merge(venues: &[Venue], observations: &[WifiObservation]) -> Vec<Venue> {
    merge_at(venues, observations, Utc::now())
}

/// Annotate venues with Wi-Fi using an explicit clock for default annotations
pub fn merge_at(
    venues: &[Venue],
    observations: &[WifiObservation],
    now: DateTime<Utc>,
) -> Vec<Venue> {
    venues
        .iter()
        .map(|venue| {
            let wifi = first_match(venue, observations)
                .map(WifiAnnotation::from)
                .unwrap_or_else(|| WifiAnnotation::default_at(now));

            Venue {
                wifi: Some(wifi),
                ..venue.clone()
            }
        })
        .collect()
}

fn first_match<'a>(venue: &Venue, observations: &'a [WifiObservation]) -> Option<&'a WifiObservation> {
    observations
        .iter()
        .find(|o| haversine_distance(venue.location, o.location) < MATCH_RADIUS_METERS)
}
