//! Result assembly
//!
//! Recomputes distances from the query point, sorts venues nearest first,
//! and applies category filters.

use crate::coord::distance::haversine_distance;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::venue::{Category, Venue};
use serde::{Deserialize, Serialize};

/// Which categories to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    #[serde(default = "include")]
    pub cafe: bool,
    #[serde(default = "include")]
    pub library: bool,
    #[serde(default = "include")]
    pub coworking: bool,
}

fn include() -> bool {
    true
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            cafe: true,
            library: true,
            coworking: true,
        }
    }
}

impl CategoryFilter {
    /// Whether venues of `category` are kept
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Cafe => self.cafe,
            Category::Library => self.library,
            Category::Coworking => self.coworking,
        }
    }

    /// Whether every category is kept
    pub fn includes_all(&self) -> bool {
        self.cafe && self.library && self.coworking
    }

    /// Filtered copy of `venues`, order preserved
    pub fn apply(&self, venues: &[Venue]) -> Vec<Venue> {
        venues
            .iter()
            .filter(|v| self.includes(v.category))
            .cloned()
            .collect()
    }
}

/// Recompute distances from `center` and sort ascending
///
/// Upstream distances are discarded. The sort is stable, so venues at equal
/// distance keep their input order. Fails if a distance cannot be computed.
pub fn assemble(center: Coordinates, venues: Vec<Venue>) -> Result<Vec<Venue>> {
    let mut venues: Vec<Venue> = venues
        .into_iter()
        .map(|mut venue| {
            venue.distance_meters = haversine_distance(center, venue.location);
            venue
        })
        .collect();

    if let Some(bad) = venues.iter().find(|v| !v.distance_meters.is_finite()) {
        return Err(Error::Assembly(format!(
            "No distance for venue {} at ({}, {})",
            bad.id, bad.location.lat, bad.location.lon
        )));
    }

    venues.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    Ok(venues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, lat: f64, lon: f64, category: Category) -> Venue {
        Venue::new(id, id, Coordinates::new(lat, lon), category)
    }

    #[test]
    fn test_recomputes_distance() {
        let center = Coordinates::new(40.0, -73.0);
        let mut stale = venue("a", 40.01, -73.0, Category::Cafe);
        stale.distance_meters = 42.0;

        let venues = assemble(center, vec![stale]).unwrap();

        assert_eq!(
            venues[0].distance_meters,
            haversine_distance(center, Coordinates::new(40.01, -73.0))
        );
    }

    #[test]
    fn test_sorted_ascending() {
        let center = Coordinates::new(40.0, -73.0);
        let venues = assemble(
            center,
            vec![
                venue("far", 40.05, -73.0, Category::Cafe),
                venue("near", 40.001, -73.0, Category::Cafe),
                venue("mid", 40.01, -73.0, Category::Cafe),
            ],
        )
        .unwrap();

        let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert!(venues
            .windows(2)
            .all(|w| w[0].distance_meters <= w[1].distance_meters));
    }

    #[test]
    fn test_sort_is_stable() {
        let center = Coordinates::new(40.0, -73.0);
        let venues = assemble(
            center,
            vec![
                venue("second-far", 40.02, -73.0, Category::Cafe),
                venue("tie-1", 40.01, -73.0, Category::Library),
                venue("tie-2", 40.01, -73.0, Category::Cafe),
                venue("tie-3", 40.01, -73.0, Category::Coworking),
            ],
        )
        .unwrap();

        let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["tie-1", "tie-2", "tie-3", "second-far"]);
    }

    #[test]
    fn test_no_truncation() {
        let center = Coordinates::new(40.0, -73.0);
        let input: Vec<Venue> = (0..200)
            .map(|i| venue(&i.to_string(), 40.0 + i as f64 * 0.001, -73.0, Category::Cafe))
            .collect();

        assert_eq!(assemble(center, input).unwrap().len(), 200);
    }

    #[test]
    fn test_non_finite_location_fails() {
        let center = Coordinates::new(40.0, -73.0);
        let result = assemble(center, vec![venue("bad", f64::NAN, -73.0, Category::Cafe)]);
        assert!(matches!(result, Err(Error::Assembly(_))));
    }

    #[test]
    fn test_filter_excludes_library() {
        let filter = CategoryFilter {
            cafe: true,
            library: false,
            coworking: true,
        };
        let venues = vec![
            venue("1", 40.0, -73.0, Category::Cafe),
            venue("2", 40.0, -73.0, Category::Library),
            venue("3", 40.0, -73.0, Category::Coworking),
        ];

        let kept = filter.apply(&venues);

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|v| v.category != Category::Library));
        // Unfiltered view is still available
        assert_eq!(venues.len(), 3);
    }

    #[test]
    fn test_filter_default_keeps_everything() {
        let filter = CategoryFilter::default();
        assert!(filter.includes_all());
        for category in crate::venue::available_categories() {
            assert!(filter.includes(category));
        }
    }

    #[test]
    fn test_filter_deserialize_missing_flags() {
        let filter: CategoryFilter = serde_json::from_str(r#"{"library": false}"#).unwrap();
        assert!(filter.cafe);
        assert!(!filter.library);
        assert!(filter.coworking);
    }
}
