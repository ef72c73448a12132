use anyhow::{anyhow, bail, Result};
use booking_config::{definitions, BookingApiConfig, BookingConfig};
use booking_models::dtos::{Booking, DashboardKpis, MonthlyReportQueryParams, Room};
use leptos::leptos_dom::logging;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("response of {url} could not be decoded: {message}")]
    Decode { url: String, message: String },
}

/// Decodes a JSON array of records. A `null` body is an empty collection and
/// a record that is not an object renders with every field missing.
pub fn decode_collection<T: DeserializeOwned + Default>(
    url: &str,
    status: u16,
    body: &str,
) -> Result<Vec<T>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
            body: body.to_string(),
        });
    }
    let records: Option<Vec<Value>> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(|x| serde_json::from_value(x).unwrap_or_default())
        .collect())
}

async fn fetch_collection<T: DeserializeOwned + Default>(
    url: String,
) -> Result<Vec<T>, FetchError> {
    let request_error = |e: reqwest::Error| FetchError::Request {
        url: url.clone(),
        message: e.to_string(),
    };

    let res = Client::builder()
        .build()
        .map_err(request_error)?
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(request_error)?;

    let status = res.status().as_u16();
    let body = res.text().await.map_err(request_error)?;
    decode_collection(&url, status, &body)
}

pub async fn rooms(config: &BookingApiConfig) -> Result<Vec<Room>, FetchError> {
    fetch_collection(config.rooms_url()).await
}

pub async fn bookings(config: &BookingApiConfig) -> Result<Vec<Booking>, FetchError> {
    fetch_collection(config.bookings_url()).await
}

/// Result of one dashboard load. A failed request leaves its collection empty
/// and its message in `errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub errors: Vec<String>,
}

impl DashboardData {
    pub fn from_results(
        rooms: Result<Vec<Room>, FetchError>,
        bookings: Result<Vec<Booking>, FetchError>,
    ) -> Self {
        let mut errors = vec![];
        let rooms = rooms.unwrap_or_else(|e| {
            errors.push(e.to_string());
            vec![]
        });
        let bookings = bookings.unwrap_or_else(|e| {
            errors.push(e.to_string());
            vec![]
        });
        Self {
            rooms,
            bookings,
            errors,
        }
    }

    pub fn kpis(&self, peak_hour: &str) -> DashboardKpis {
        DashboardKpis::new(self.rooms.len(), self.bookings.len(), peak_hour)
    }
}

/// Fetches rooms and bookings together. Never fails.
pub async fn load_dashboard(config: BookingApiConfig) -> DashboardData {
    let (rooms, bookings) = futures::join!(rooms(&config), bookings(&config));
    let data = DashboardData::from_results(rooms, bookings);
    for error in &data.errors {
        logging::console_error(error);
    }
    data
}

pub fn monthly_report_url(
    config: &BookingApiConfig,
    params: &MonthlyReportQueryParams,
) -> Result<String> {
    let url = Url::parse_with_params(&config.monthly_report_url(), params.pairs())?;
    Ok(url.to_string())
}

/// Config file served next to the page.
fn config_file_url() -> Result<String> {
    let origin = leptos::window()
        .location()
        .origin()
        .map_err(|_| anyhow!("page origin not available"))?;
    Ok(format!("{origin}{}", definitions::CONFIG_FILE_ROUTE))
}

async fn fetch_config() -> Result<BookingConfig> {
    let url = config_file_url()?;
    let res = Client::builder().build()?.get(&url).send().await?;
    let status = res.status();
    if status.is_success() {
        BookingConfig::from_yaml(&res.text().await?)
    } else {
        bail!("Request to {url} failed with status: {status}")
    }
}

pub async fn load_config() -> BookingConfig {
    match fetch_config().await {
        Ok(config) => {
            for line in config.debug_info() {
                logging::console_log(&line);
            }
            config
        }
        Err(e) => {
            logging::console_error(&format!("Using default configuration: {e}"));
            BookingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_models::dtos::{RecordId, ReportFormat};

    const ROOMS_URL: &str = "http://localhost:8080/api/rooms";

    #[test]
    fn decode_collection_reads_json_arrays() {
        let body = r#"[{"id":1,"name":"Kelas A","capacity":40,"type":"Kelas"},{"id":2}]"#;
        let rooms: Vec<Room> = decode_collection(ROOMS_URL, 200, body).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].id, Some(RecordId::Number(2)));
    }

    #[test]
    fn decode_collection_rejects_error_status() {
        let res = decode_collection::<Room>(ROOMS_URL, 500, r#"{"error":"db down"}"#);
        assert_eq!(
            res,
            Err(FetchError::Status {
                url: ROOMS_URL.to_string(),
                status: 500,
                body: r#"{"error":"db down"}"#.to_string(),
            })
        );
    }

    #[test]
    fn decode_collection_rejects_non_array_bodies() {
        let res = decode_collection::<Room>(ROOMS_URL, 200, "<html></html>");
        assert!(matches!(res, Err(FetchError::Decode { .. })));
        let res = decode_collection::<Room>(ROOMS_URL, 200, r#"{"id":1}"#);
        assert!(matches!(res, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn null_body_is_an_empty_collection() {
        let rooms: Vec<Room> = decode_collection(ROOMS_URL, 200, "null").unwrap();
        assert!(rooms.is_empty());
        let rooms: Vec<Room> = decode_collection(ROOMS_URL, 200, "[]").unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn odd_fields_do_not_empty_the_collection() {
        let body = r#"[
            {"id":1,"name":"Kelas A","capacity":"30","type":"Kelas"},
            {"id":2,"name":"Kelas B","capacity":40.0},
            {"id":3,"name":"Lab Komputer","capacity":{"max":25}},
            "Lab Teknik"
        ]"#;
        let rooms: Vec<Room> = decode_collection(ROOMS_URL, 200, body).unwrap();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].capacity, Some(30));
        assert_eq!(rooms[1].capacity, Some(40));
        assert_eq!(rooms[2].name.as_deref(), Some("Lab Komputer"));
        assert!(rooms[2].capacity.is_none());
        assert_eq!(rooms[3], Room::default());

        let body = r#"[{"id":1,"room_id":2,"status":3},{"id":2,"status":"approved"}]"#;
        let bookings: Vec<Booking> =
            decode_collection("http://localhost:8080/api/bookings", 200, body).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].status.as_deref(), Some("3"));
        assert_eq!(bookings[1].status.as_deref(), Some("approved"));
    }

    #[test]
    fn failed_fetch_degrades_only_its_own_collection() {
        let rooms_error = FetchError::Request {
            url: ROOMS_URL.to_string(),
            message: "connection refused".to_string(),
        };
        let bookings = vec![Booking::default(), Booking::default()];
        let data = DashboardData::from_results(Err(rooms_error.clone()), Ok(bookings.clone()));
        assert!(data.rooms.is_empty());
        assert_eq!(data.bookings, bookings);
        assert_eq!(data.errors, vec![rooms_error.to_string()]);

        let rooms = vec![Room::default()];
        let data = DashboardData::from_results(
            Ok(rooms.clone()),
            Err(FetchError::Decode {
                url: "http://localhost:8080/api/bookings".to_string(),
                message: "expected a sequence".to_string(),
            }),
        );
        assert_eq!(data.rooms, rooms);
        assert!(data.bookings.is_empty());
        assert_eq!(data.errors.len(), 1);
    }

    #[test]
    fn kpis_follow_the_loaded_collections() {
        let data = DashboardData::from_results(Ok(vec![]), Ok(vec![]));
        let kpis = data.kpis("10:00-11:00");
        assert_eq!(kpis.total_rooms, 0);
        assert_eq!(kpis.total_bookings, 0);
        assert_eq!(kpis.peak_hour, "10:00-11:00");
        assert_eq!(kpis.utilization_label(), "0%");

        let data = DashboardData::from_results(
            Ok(vec![Room::default(); 5]),
            Ok(vec![Booking::default(); 10]),
        );
        assert_eq!(data.kpis("10:00-11:00").utilization_label(), "20%");
        assert!(data.errors.is_empty());
    }

    #[test]
    fn monthly_report_url_carries_query_params() {
        let config = BookingApiConfig::default();
        let params = MonthlyReportQueryParams::new(2024, 5, ReportFormat::Pdf);
        assert_eq!(
            monthly_report_url(&config, &params).unwrap(),
            "http://localhost:8080/api/reports/monthly?year=2024&month=5&format=pdf"
        );
        let params = MonthlyReportQueryParams::new(2025, 12, ReportFormat::Excel);
        assert_eq!(
            monthly_report_url(&config, &params).unwrap(),
            "http://localhost:8080/api/reports/monthly?year=2025&month=12&format=excel"
        );
    }
}
