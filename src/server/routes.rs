//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::config::defaults::DEFAULT_RADIUS;
use crate::coord::Coordinates;
use crate::discover::{discover, CategoryFilter, DiscoveryResponse, VenueQuery};
use crate::error::Error;
use crate::server::state::AppState;
use crate::venue::{available_categories, Category};

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/venues", get(venues_handler))
        .route("/api/status", get(status_handler))
        .route("/api/categories", get(categories_handler))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Venue search query string
///
/// Every field is taken as raw text so malformed numbers fall through to
/// the same validation as missing ones.
#[derive(Debug, Default, Deserialize)]
pub struct VenuesParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius: Option<String>,
    pub cafe: Option<String>,
    pub library: Option<String>,
    pub coworking: Option<String>,
}

/// Parse a finite number; "NaN", "inf" and garbage count as absent
fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// A flag is on unless it is literally "false"
fn parse_flag(value: Option<&str>) -> bool {
    !matches!(value, Some(v) if v.trim().eq_ignore_ascii_case("false"))
}

impl VenuesParams {
    /// Build the pipeline query
    ///
    /// Missing or malformed coordinates become 0 and are rejected by
    /// validation; a missing or malformed radius becomes the default. Range
    /// is not checked.
    pub fn to_query(&self) -> VenueQuery {
        let center = Coordinates::new(
            parse_number(self.lat.as_deref()).unwrap_or(0.0),
            parse_number(self.lon.as_deref()).unwrap_or(0.0),
        );
        let radius = parse_number(self.radius.as_deref()).unwrap_or(DEFAULT_RADIUS);
        let query = VenueQuery::new(center, radius);

        if self.cafe.is_none() && self.library.is_none() && self.coworking.is_none() {
            return query;
        }

        query.with_filter(CategoryFilter {
            cafe: parse_flag(self.cafe.as_deref()),
            library: parse_flag(self.library.as_deref()),
            coworking: parse_flag(self.coworking.as_deref()),
        })
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

/// Map a pipeline error to a status code and body
///
/// Only input errors are described to the caller.
fn api_error(err: Error) -> (StatusCode, Json<ApiError>) {
    match err {
        Error::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: message,
                code: "INVALID_INPUT".to_string(),
            }),
        ),
        other => {
            error!(error = %other, "Venue request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError {
                    error: "Failed to fetch venues".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
        }
    }
}

/// Venue search endpoint
///
/// GET /api/venues
async fn venues_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VenuesParams>,
) -> Result<Json<DiscoveryResponse>, (StatusCode, Json<ApiError>)> {
    let query = params.to_query();
    let response = discover(&query, &state.venues, &state.wifi)
        .await
        .map_err(api_error)?;
    Ok(Json(response))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Configured venue source
    pub venue_source: String,
    /// Wi-Fi observation source
    pub wifi_source: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        venue_source: state.venue_source_name().to_string(),
        wifi_source: state.wifi_source_name().to_string(),
    })
}

/// Categories list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: Category,
    pub label: String,
    pub description: String,
}

/// List venue categories
///
/// GET /api/categories
async fn categories_handler() -> Json<CategoriesResponse> {
    let categories = available_categories()
        .into_iter()
        .map(|c| CategoryInfo {
            name: c,
            label: c.label().to_string(),
            description: match c {
                Category::Cafe => "Coffee shops and cafes".to_string(),
                Category::Library => "Public and university libraries".to_string(),
                Category::Coworking => "Coworking spaces".to_string(),
            },
        })
        .collect();

    Json(CategoriesResponse { categories })
}
