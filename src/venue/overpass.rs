//! Overpass venue source (OpenStreetMap)
//!
//! Issues a single bounded Overpass QL query for cafes, restaurants,
//! libraries, coworking spaces and hackerspaces around the query point.
//! Any failure is reported as `Error::UpstreamUnavailable`; callers fall back
//! to synthetic venues.

use crate::constants::api::USER_AGENT;
use crate::constants::venue::{OVERPASS_TIMEOUT_SECS, UNKNOWN_HOURS, UNNAMED_VENUE};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::venue::{Category, Venue, VenueSource};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::debug;

/// Overpass venue source
#[derive(Debug, Clone)]
pub struct OverpassSource {
    client: reqwest::Client,
    url: String,
}

/// Overpass JSON response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

/// A single Overpass element. Everything but the id is optional.
#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassSource {
    /// Create a new Overpass source against `url` with a request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Build the Overpass QL query for a search circle
    fn build_query(center: Coordinates, radius: f64) -> String {
        let around = format!("around:{},{},{}", radius, center.lat, center.lon);
        format!(
            "[out:json][timeout:{timeout}];\n\
             (\n\
             \x20 node[\"amenity\"~\"^(cafe|restaurant|library)$\"]({around});\n\
             \x20 node[\"amenity\"=\"coworking_space\"]({around});\n\
             \x20 node[\"leisure\"=\"hackerspace\"]({around});\n\
             );\n\
             out;\n",
            timeout = OVERPASS_TIMEOUT_SECS,
            around = around,
        )
    }

    /// Map raw elements to venues
    ///
    /// Elements without coordinates are dropped; repeated ids keep the first
    /// occurrence.
    fn parse_venues(response: OverpassResponse) -> Vec<Venue> {
        let mut seen = HashSet::new();

        response
            .elements
            .into_iter()
            .filter_map(|element| {
                let (lat, lon) = (element.lat?, element.lon?);
                if !seen.insert(element.id) {
                    return None;
                }

                let tags = &element.tags;
                let name = tags
                    .get("name")
                    .or_else(|| tags.get("brand"))
                    .cloned()
                    .unwrap_or_else(|| UNNAMED_VENUE.to_string());
                let tag = tags.get("amenity").or_else(|| tags.get("leisure"));
                let hours = tags
                    .get("opening_hours")
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_HOURS.to_string());

                Some(
                    Venue::new(
                        element.id.to_string(),
                        name,
                        Coordinates::new(lat, lon),
                        Category::from_tag(tag.map(String::as_str)),
                    )
                    .with_opening(true, hours),
                )
            })
            .collect()
    }
}

impl VenueSource for OverpassSource {
    fn name(&self) -> &'static str {
        "overpass"
    }

    async fn fetch(&self, center: Coordinates, radius: f64) -> Result<Vec<Venue>> {
        let query = Self::build_query(center, radius);
        debug!(url = %self.url, "Querying Overpass");

        let response = self
            .client
            .post(&self.url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(format!("data={}", urlencoding::encode(&query)))
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Overpass request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::UpstreamUnavailable(format!(
                "Overpass returned status: {}",
                response.status()
            )));
        }

        let data: OverpassResponse = response.json().await.map_err(|e| {
            Error::UpstreamUnavailable(format!("Failed to parse Overpass response: {}", e))
        })?;

        let venues = Self::parse_venues(data);
        debug!(count = venues.len(), "Overpass returned venues");
        Ok(venues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::{discover, VenueQuery};
    use crate::wifi::synthetic::SyntheticWifiSource;
    use axum::{http::StatusCode, routing::post, Router};

    fn parse(json: &str) -> Vec<Venue> {
        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        OverpassSource::parse_venues(response)
    }

    #[test]
    fn test_build_query() {
        let query = OverpassSource::build_query(Coordinates::new(40.5, -73.25), 1500.0);

        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.contains("around:1500,40.5,-73.25"));
        assert!(query.contains(r#"node["amenity"~"^(cafe|restaurant|library)$"]"#));
        assert!(query.contains(r#"node["amenity"="coworking_space"]"#));
        assert!(query.contains(r#"node["leisure"="hackerspace"]"#));
        assert!(query.trim_end().ends_with("out;"));
    }

    #[test]
    fn test_parse_tagged_elements() {
        let venues = parse(
            r#"{"elements": [
                {"type": "node", "id": 101, "lat": 40.001, "lon": -73.001,
                 "tags": {"amenity": "library", "name": "Branch Library", "opening_hours": "Mo-Fr 09:00-17:00"}},
                {"type": "node", "id": 102, "lat": 40.002, "lon": -73.002,
                 "tags": {"leisure": "hackerspace", "name": "Hack Lab"}},
                {"type": "node", "id": 103, "lat": 40.003, "lon": -73.003,
                 "tags": {"amenity": "restaurant", "brand": "Chain Diner"}}
            ]}"#,
        );

        assert_eq!(venues.len(), 3);

        assert_eq!(venues[0].id, "101");
        assert_eq!(venues[0].name, "Branch Library");
        assert_eq!(venues[0].category, Category::Library);
        assert_eq!(venues[0].opening.as_ref().unwrap().hours, "Mo-Fr 09:00-17:00");

        assert_eq!(venues[1].category, Category::Coworking);

        assert_eq!(venues[2].name, "Chain Diner");
        assert_eq!(venues[2].category, Category::Cafe);
    }

    #[test]
    fn test_parse_untagged_element() {
        let venues = parse(r#"{"elements": [{"type": "node", "id": 7, "lat": 1.5, "lon": 2.5}]}"#);

        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, UNNAMED_VENUE);
        assert_eq!(venues[0].category, Category::Cafe);
        let opening = venues[0].opening.as_ref().unwrap();
        assert!(opening.is_open);
        assert_eq!(opening.hours, UNKNOWN_HOURS);
    }

    #[test]
    fn test_parse_ignores_upstream_distance_and_bad_elements() {
        let venues = parse(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 40.0, "lon": -73.0, "distance": 5},
                {"type": "way", "id": 2},
                {"type": "node", "id": 1, "lat": 41.0, "lon": -74.0}
            ]}"#,
        );

        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].location, Coordinates::new(40.0, -73.0));
        assert_eq!(venues[0].distance_meters, 0.0);
    }

    #[test]
    fn test_source_creation() {
        let source =
            OverpassSource::new("http://localhost:1/api", Duration::from_secs(1)).unwrap();
        assert_eq!(source.name(), "overpass");
        assert!(format!("{:?}", source).contains("OverpassSource"));
    }

    /// Serve canned Overpass responses on a random local port
    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route(
                "/slow",
                post(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    r#"{"elements": []}"#
                }),
            )
            .route(
                "/busy",
                post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
            )
            .route("/garbled", post(|| async { "<html>not json</html>" }))
            .route(
                "/ok",
                post(|| async {
                    r#"{"elements": [{"type": "node", "id": 42, "lat": 40.001, "lon": -73.001,
                        "tags": {"amenity": "cafe", "name": "Corner Cafe"}}]}"#
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_failures_are_upstream_unavailable() {
        let base = spawn_upstream().await;
        let center = Coordinates::new(40.0, -73.0);

        for path in ["/slow", "/busy", "/garbled"] {
            let source =
                OverpassSource::new(format!("{}{}", base, path), Duration::from_millis(300))
                    .unwrap();

            let started = std::time::Instant::now();
            let err = source.fetch(center, 1000.0).await.unwrap_err();

            assert!(matches!(err, Error::UpstreamUnavailable(_)), "{}: {:?}", path, err);
            assert!(started.elapsed() < Duration::from_secs(3), "{} was not bounded", path);
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_in_pipeline() {
        let base = spawn_upstream().await;
        let query = VenueQuery::new(Coordinates::new(40.0, -73.0), 1000.0);

        for path in ["/slow", "/busy", "/garbled"] {
            let source =
                OverpassSource::new(format!("{}{}", base, path), Duration::from_millis(300))
                    .unwrap();

            let response = discover(&query, &source, &SyntheticWifiSource).await.unwrap();

            assert_eq!(response.source, "fallback", "{}", path);
            assert_eq!(response.count, 4, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let base = spawn_upstream().await;
        let source =
            OverpassSource::new(format!("{}/ok", base), Duration::from_millis(300)).unwrap();
        let query = VenueQuery::new(Coordinates::new(40.0, -73.0), 1000.0);

        let response = discover(&query, &source, &SyntheticWifiSource).await.unwrap();

        assert_eq!(response.source, "overpass");
        assert_eq!(response.count, 1);
        assert_eq!(response.venues[0].name, "Corner Cafe");
        assert!(response.venues[0].distance_meters > 0.0);
    }
}
