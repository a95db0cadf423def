//! Synthetic fallback venues
//!
//! Used whenever the live POI index cannot be reached. Venues are laid out at
//! fixed degree offsets from the query point. Larger search radii unlock
//! additional fixture sets so result density scales with the search area:
//! 4 venues up to 5 km, 8 up to 15 km, 12 beyond.

use crate::coord::distance::offset;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::venue::{Category, Venue, VenueSource};

/// A fixed venue placed relative to the query point
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub id: &'static str,
    pub name: &'static str,
    pub delta_lat: f64,
    pub delta_lon: f64,
    pub category: Category,
    pub is_open: bool,
    pub hours: &'static str,
}

impl Fixture {
    fn place(&self, center: Coordinates) -> Venue {
        Venue::new(
            self.id,
            self.name,
            offset(center, self.delta_lat, self.delta_lon),
            self.category,
        )
        .with_opening(self.is_open, self.hours)
    }
}

/// A fixture set and the radius it requires
#[derive(Debug, Clone, Copy)]
pub struct FallbackTier {
    /// The tier applies when the search radius is strictly greater than this.
    /// `None` means it always applies.
    pub above_radius: Option<f64>,
    pub fixtures: &'static [Fixture],
}

impl FallbackTier {
    /// Whether this tier contributes venues at the given radius
    pub fn applies(&self, radius: f64) -> bool {
        self.above_radius.map_or(true, |threshold| radius > threshold)
    }
}

const NEIGHBORHOOD: &[Fixture] = &[
    Fixture {
        id: "1",
        name: "Central Coffee House",
        delta_lat: 0.002,
        delta_lon: 0.001,
        category: Category::Cafe,
        is_open: true,
        hours: "7:00-22:00",
    },
    Fixture {
        id: "2",
        name: "City Public Library",
        delta_lat: -0.001,
        delta_lon: 0.003,
        category: Category::Library,
        is_open: true,
        hours: "9:00-18:00",
    },
    Fixture {
        id: "3",
        name: "WorkSpace Co-op",
        delta_lat: 0.001,
        delta_lon: -0.002,
        category: Category::Coworking,
        is_open: true,
        hours: "24/7",
    },
    Fixture {
        id: "4",
        name: "Bean & Brew Cafe",
        delta_lat: -0.003,
        delta_lon: -0.001,
        category: Category::Cafe,
        is_open: false,
        hours: "6:00-20:00",
    },
];

const DISTRICT: &[Fixture] = &[
    Fixture {
        id: "5",
        name: "Downtown Library Branch",
        delta_lat: 0.015,
        delta_lon: 0.008,
        category: Category::Library,
        is_open: true,
        hours: "9:00-20:00",
    },
    Fixture {
        id: "6",
        name: "Tech Hub Coworking",
        delta_lat: -0.012,
        delta_lon: 0.015,
        category: Category::Coworking,
        is_open: true,
        hours: "6:00-24:00",
    },
    Fixture {
        id: "7",
        name: "University Cafe",
        delta_lat: 0.008,
        delta_lon: -0.018,
        category: Category::Cafe,
        is_open: true,
        hours: "6:30-23:00",
    },
    Fixture {
        id: "8",
        name: "Innovation Center",
        delta_lat: -0.02,
        delta_lon: -0.01,
        category: Category::Coworking,
        is_open: true,
        hours: "24/7",
    },
];

const CITY_WIDE: &[Fixture] = &[
    Fixture {
        id: "9",
        name: "Airport Business Lounge",
        delta_lat: 0.045,
        delta_lon: 0.032,
        category: Category::Coworking,
        is_open: true,
        hours: "5:00-24:00",
    },
    Fixture {
        id: "10",
        name: "Suburban Library",
        delta_lat: -0.038,
        delta_lon: 0.041,
        category: Category::Library,
        is_open: true,
        hours: "10:00-18:00",
    },
    Fixture {
        id: "11",
        name: "Mall Food Court Cafe",
        delta_lat: 0.025,
        delta_lon: -0.055,
        category: Category::Cafe,
        is_open: true,
        hours: "10:00-22:00",
    },
    Fixture {
        id: "12",
        name: "Business District Hub",
        delta_lat: -0.051,
        delta_lon: -0.028,
        category: Category::Coworking,
        is_open: false,
        hours: "7:00-19:00",
    },
];

/// Fallback tiers, ordered by threshold
pub const TIERS: &[FallbackTier] = &[
    FallbackTier {
        above_radius: None,
        fixtures: NEIGHBORHOOD,
    },
    FallbackTier {
        above_radius: Some(5_000.0),
        fixtures: DISTRICT,
    },
    FallbackTier {
        above_radius: Some(15_000.0),
        fixtures: CITY_WIDE,
    },
];

/// Generate the fallback venue set for a query
///
/// Deterministic: the same center and radius always give the same venues in
/// the same order. `radius` only selects tiers; offsets never scale with it.
pub fn generate(center: Coordinates, radius: f64) -> Vec<Venue> {
    TIERS
        .iter()
        .filter(|tier| tier.applies(radius))
        .flat_map(|tier| tier.fixtures.iter().map(|fixture| fixture.place(center)))
        .collect()
}

/// Venue source backed by the synthetic generator (offline mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl VenueSource for FallbackSource {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn fetch(&self, center: Coordinates, radius: f64) -> Result<Vec<Venue>> {
        Ok(generate(center, radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn center() -> Coordinates {
        Coordinates::new(40.0, -73.0)
    }

    #[test]
    fn test_tier_counts() {
        assert_eq!(generate(center(), 500.0).len(), 4);
        assert_eq!(generate(center(), 1000.0).len(), 4);
        assert_eq!(generate(center(), 5000.0).len(), 4);
        assert_eq!(generate(center(), 5000.5).len(), 8);
        assert_eq!(generate(center(), 15_000.0).len(), 8);
        assert_eq!(generate(center(), 15_001.0).len(), 12);
        assert_eq!(generate(center(), 50_000.0).len(), 12);
    }

    #[test]
    fn test_count_is_monotonic_in_radius() {
        let mut previous = 0;
        for radius in (0..40).map(|i| i as f64 * 1000.0) {
            let count = generate(center(), radius).len();
            assert!(count >= previous, "count dropped at radius {}", radius);
            previous = count;
        }
    }

    #[test]
    fn test_base_tier_stays_close() {
        let c = center();
        for venue in generate(c, 1000.0) {
            assert!((venue.location.lat - c.lat).abs() <= 0.003 + 1e-9);
            assert!((venue.location.lon - c.lon).abs() <= 0.003 + 1e-9);
        }
    }

    #[test]
    fn test_base_tier_covers_all_categories_and_a_closed_venue() {
        let venues = generate(center(), 1000.0);
        let categories: HashSet<Category> = venues.iter().map(|v| v.category).collect();

        assert_eq!(categories.len(), 3);
        assert_eq!(venues.iter().filter(|v| !v.is_open()).count(), 1);
    }

    #[test]
    fn test_ids_unique() {
        let venues = generate(center(), 20_000.0);
        let ids: HashSet<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), venues.len());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(center(), 20_000.0), generate(center(), 20_000.0));
    }

    #[test]
    fn test_larger_tiers_extend_smaller_ones() {
        let small = generate(center(), 1000.0);
        let large = generate(center(), 20_000.0);
        assert_eq!(&large[..small.len()], &small[..]);
    }

    #[tokio::test]
    async fn test_fallback_source() {
        let venues = FallbackSource.fetch(center(), 6000.0).await.unwrap();
        assert_eq!(venues.len(), 8);
        assert_eq!(FallbackSource.name(), "fallback");
    }
}
