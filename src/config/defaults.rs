//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::OVERPASS_URL;
use crate::constants::venue::OVERPASS_TIMEOUT_SECS;

/// Default search radius in meters
pub const DEFAULT_RADIUS: f64 = 1000.0;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8787;

/// Default Overpass interpreter endpoint
pub const DEFAULT_OVERPASS_URL: &str = OVERPASS_URL;

/// Default Overpass request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = OVERPASS_TIMEOUT_SECS;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "wifi-finder";
