mod api;
mod dashboard;
pub mod definitions;

pub use api::*;
pub use dashboard::*;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub api: BookingApiConfig,

    #[serde(default)]
    pub dashboard: BookingDashboardConfig,
}

impl BookingConfig {
    /// Parses a yaml document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).map_err(|e| anyhow!("invalid configuration: {e}"))
    }

    pub fn debug_info(&self) -> Vec<String> {
        vec![
            format!("api > base_url: {}", self.api.base()),
            format!("dashboard > peak_hour: {}", self.dashboard.peak_hour),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::BookingConfig;
    use crate::definitions;

    #[test]
    fn empty_document_uses_defaults() {
        let config = BookingConfig::from_yaml("  \n").unwrap();
        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.api.base(), definitions::DEFAULT_API_BASE_URL);
        assert_eq!(config.dashboard.peak_hour, definitions::DEFAULT_PEAK_HOUR);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = BookingConfig::from_yaml("dashboard:\n  peak_hour: \"13:00-14:00\"\n").unwrap();
        assert_eq!(config.api.base(), definitions::DEFAULT_API_BASE_URL);
        assert_eq!(config.dashboard.peak_hour, "13:00-14:00");

        let config = BookingConfig::from_yaml("api: {}\n").unwrap();
        assert_eq!(config.api.base(), definitions::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = BookingConfig::from_yaml("api:\n  base_url: https://booking.campus.ac.id/api/\n").unwrap();
        assert_eq!(config.api.base(), "https://booking.campus.ac.id/api");
        assert_eq!(config.api.rooms_url(), "https://booking.campus.ac.id/api/rooms");
        assert_eq!(config.api.bookings_url(), "https://booking.campus.ac.id/api/bookings");
        assert_eq!(
            config.api.monthly_report_url(),
            "https://booking.campus.ac.id/api/reports/monthly"
        );
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(BookingConfig::from_yaml("api: [1, 2").is_err());
        assert!(BookingConfig::from_yaml("api:\n  base_url: [1]\n").is_err());
    }
}
