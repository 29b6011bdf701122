//! Application configuration for the dashboard core.

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::{Error, dashboard::aggregation::ChartWindow, timezone::local_offset};

/// Settings the embedding application passes to the dashboard core.
///
/// Deserialisable from the application's config file; missing fields fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The local timezone as a canonical timezone name, e.g.
    /// "America/Sao_Paulo". All date bucketing happens in this timezone.
    pub timezone: String,
    /// How many days of history the daily chart covers.
    pub chart_window: ChartWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: "America/Sao_Paulo".to_owned(),
            chart_window: ChartWindow::Month,
        }
    }
}

impl AppConfig {
    /// Resolve the configured timezone to a UTC offset.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the configured name is not a
    /// known canonical timezone.
    pub fn utc_offset(&self) -> Result<UtcOffset, Error> {
        local_offset(&self.timezone)
    }
}
