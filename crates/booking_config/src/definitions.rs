pub const CONFIG_FILE_ROUTE: &str = "/booking.yaml";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PEAK_HOUR: &str = "10:00-11:00";

pub const ROOMS_ROUTE: &str = "/rooms";
pub const BOOKINGS_ROUTE: &str = "/bookings";
pub const MONTHLY_REPORT_ROUTE: &str = "/reports/monthly";

pub const ACTIVE_SECTION_STORAGE_KEY: &str = "active_section";
