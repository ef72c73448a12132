use crate::definitions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDashboardConfig {
    #[serde(default = "BookingDashboardConfig::default_peak_hour")]
    pub peak_hour: String,
}

impl BookingDashboardConfig {
    fn default_peak_hour() -> String {
        definitions::DEFAULT_PEAK_HOUR.to_owned()
    }
}

impl Default for BookingDashboardConfig {
    fn default() -> Self {
        Self {
            peak_hour: Self::default_peak_hour(),
        }
    }
}
