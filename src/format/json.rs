//! JSON output formatter

use crate::discover::{DiscoveryResponse, VenueQuery};
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the `{ venues, count }` response pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &DiscoveryResponse, _query: &VenueQuery) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}
