//! Human-readable text output formatter

use crate::discover::{DiscoveryResponse, VenueQuery};
use crate::error::Result;
use crate::format::{format_distance, walk_minutes, OutputFormatter};
use crate::venue::Venue;

/// Text formatter - one block per venue, nearest first
pub struct TextFormatter;

impl TextFormatter {
    fn signal(venue: &Venue) -> String {
        match &venue.wifi {
            Some(wifi) => {
                let bars = wifi.bars() as usize;
                format!(
                    "{} [{}{}] {} dBm",
                    wifi.ssid,
                    "|".repeat(bars),
                    ".".repeat(4 - bars),
                    wifi.signal_strength_dbm
                )
            }
            None => "no Wi-Fi data".to_string(),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, response: &DiscoveryResponse, query: &VenueQuery) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "Venues near ({:.6}, {:.6}) within {}\n",
            query.center.lat,
            query.center.lon,
            format_distance(query.radius)
        ));
        output.push_str(&format!("{} venues found\n", response.count));

        if response.venues.is_empty() {
            output.push_str("\nNo venues match your current filters.\n");
            return Ok(output);
        }

        for venue in &response.venues {
            let status = if venue.is_open() { "Open" } else { "Closed" };
            let status = match &venue.opening {
                Some(opening) => format!("{} ({})", status, opening.hours),
                None => status.to_string(),
            };

            output.push('\n');
            output.push_str(&format!("{} [{}]\n", venue.name, venue.category.label()));
            output.push_str(&format!(
                "  {} · {} min walk · {}\n",
                format_distance(venue.distance_meters),
                walk_minutes(venue.distance_meters),
                status
            ));
            output.push_str(&format!("  Wi-Fi: {}\n", Self::signal(venue)));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;
    use crate::discover::assemble::assemble;
    use crate::discover::CategoryFilter;
    use crate::venue::fallback;
    use crate::wifi::merge::merge;
    use crate::wifi::synthetic::observations_at;
    use chrono::Utc;

    fn create_test_response() -> (DiscoveryResponse, VenueQuery) {
        let query = VenueQuery::new(Coordinates::new(40.7128, -74.0060), 1000.0);
        let venues = merge(
            &fallback::generate(query.center, query.radius),
            &observations_at(query.center, Utc::now()),
        );
        let venues = assemble(query.center, venues).unwrap();
        (DiscoveryResponse::new(venues, "fallback"), query)
    }

    #[test]
    fn test_text_format() {
        let (response, query) = create_test_response();

        let output = TextFormatter.format(&response, &query).unwrap();

        assert!(output.contains("Venues near (40.712800, -74.006000) within 1.0km"));
        assert!(output.contains("4 venues found"));
        assert!(output.contains("Central Coffee House [Cafe]"));
        assert!(output.contains("City Public Library [Library]"));
        assert!(output.contains("Closed (6:00-20:00)"));
        assert!(output.contains("min walk"));
        assert!(output.contains("Wi-Fi: WorkSpace_Guest [||||] -40 dBm"));
        assert!(output.contains("Wi-Fi: Free WiFi [||..] -65 dBm"));
    }

    #[test]
    fn test_text_format_empty() {
        let (response, query) = create_test_response();
        let filter = CategoryFilter {
            cafe: false,
            library: false,
            coworking: false,
        };
        let empty = DiscoveryResponse::new(filter.apply(&response.venues), "fallback");

        let output = TextFormatter.format(&empty, &query).unwrap();

        assert!(output.contains("0 venues found"));
        assert!(output.contains("No venues match"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
