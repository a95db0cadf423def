//! GPX output formatter

use crate::discover::{DiscoveryResponse, VenueQuery};
use crate::error::Result;
use crate::format::{format_distance, OutputFormatter};
use crate::venue::Category;

/// GPX formatter - outputs one waypoint per venue
pub struct GpxFormatter;

/// Escape text for inclusion in XML element content
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, response: &DiscoveryResponse, query: &VenueQuery) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="wifi-finder">"#);
        gpx.push('\n');

        // Metadata
        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>Wi-Fi venues within {}</name>\n",
            format_distance(query.radius)
        ));
        gpx.push_str(&format!("    <time>{}</time>\n", chrono::Utc::now().to_rfc3339()));
        gpx.push_str("  </metadata>\n");

        // Center waypoint
        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            query.center.lat, query.center.lon
        ));
        gpx.push('\n');
        gpx.push_str("    <name>Search origin</name>\n");
        gpx.push_str("  </wpt>\n");

        for venue in &response.venues {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                venue.location.lat, venue.location.lon
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(&venue.name)));

            if let Some(wifi) = &venue.wifi {
                gpx.push_str(&format!(
                    "    <desc>{} · Wi-Fi {} ({} dBm)</desc>\n",
                    format_distance(venue.distance_meters),
                    escape_xml(&wifi.ssid),
                    wifi.signal_strength_dbm
                ));
            }

            let symbol = match venue.category {
                Category::Cafe => "Restaurant",
                Category::Library => "Library",
                Category::Coworking => "Building",
            };
            gpx.push_str(&format!("    <sym>{}</sym>\n", symbol));
            gpx.push_str(&format!("    <type>{}</type>\n", venue.category));

            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
