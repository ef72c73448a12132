use crate::definitions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingApiConfig {
    #[serde(default = "BookingApiConfig::default_base_url")]
    pub base_url: String,
}

impl BookingApiConfig {
    fn default_base_url() -> String {
        definitions::DEFAULT_API_BASE_URL.to_owned()
    }

    /// Base url without any trailing slash so that routes can be appended.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base())
    }

    pub fn rooms_url(&self) -> String {
        self.url(definitions::ROOMS_ROUTE)
    }

    pub fn bookings_url(&self) -> String {
        self.url(definitions::BOOKINGS_ROUTE)
    }

    pub fn monthly_report_url(&self) -> String {
        self.url(definitions::MONTHLY_REPORT_ROUTE)
    }
}

impl Default for BookingApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}
