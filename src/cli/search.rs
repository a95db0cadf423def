//! Search command handler
//!
//! Runs the discovery pipeline once and prints the result.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::discover::{discover, CategoryFilter, VenueQuery};
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::{get_geocoder, get_ip_locator, GeoBackend};
use crate::venue::{get_venue_source, VenueSource};
use crate::wifi::synthetic::SyntheticWifiSource;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Latitude
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Named location (geocoded)
    #[arg(long, conflicts_with_all = ["lat", "lon", "here"])]
    pub location: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lon", "location"])]
    pub here: bool,

    /// Search radius in meters
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Exclude cafes
    #[arg(long)]
    pub no_cafe: bool,

    /// Exclude libraries
    #[arg(long)]
    pub no_library: bool,

    /// Exclude coworking spaces
    #[arg(long)]
    pub no_coworking: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Skip the POI service and use generated venues
    #[arg(long)]
    pub offline: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl SearchArgs {
    /// Category filter from the exclusion flags, if any were given
    fn filter(&self) -> Option<CategoryFilter> {
        if !(self.no_cafe || self.no_library || self.no_coworking) {
            return None;
        }
        Some(CategoryFilter {
            cafe: !self.no_cafe,
            library: !self.no_library,
            coworking: !self.no_coworking,
        })
    }
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;
    if args.offline {
        config.sources.offline = true;
    }

    let center = resolve_center(&args).await?;
    let radius = args
        .radius
        .filter(|r| r.is_finite())
        .unwrap_or(config.defaults.radius);

    let mut query = VenueQuery::new(center, radius);
    if let Some(filter) = args.filter() {
        query = query.with_filter(filter);
    }

    let format = args.format.clone().unwrap_or(config.defaults.format.clone());
    let formatter =
        get_formatter(&format).ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let venue_source = get_venue_source(&config)?;
    let response = discover(&query, &venue_source, &SyntheticWifiSource).await?;

    if response.source != venue_source.name() {
        eprintln!("Venue service unavailable; showing sample venues");
    }

    let output = formatter.format(&response, &query)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Determine the search origin from the location arguments
async fn resolve_center(args: &SearchArgs) -> Result<Coordinates> {
    if args.here {
        let location = get_ip_locator()?.locate().await?;
        eprintln!("Using IP location: {}", location.display_name);
        return Ok(location.coordinates());
    }

    if let Some(location_query) = &args.location {
        return match get_geocoder()?.geocode(location_query).await? {
            Some(location) => {
                eprintln!("Geocoded to: {}", location.display_name);
                Ok(location.coordinates())
            }
            None => Err(Error::Geo(format!("Could not geocode '{}'", location_query))),
        };
    }

    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
        _ => Err(Error::InvalidInput(
            "No location specified. Use --lat/--lon, --location, or --here".to_string(),
        )),
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
