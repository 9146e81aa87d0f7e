use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skycast_core::NetworkError;

/// Label shown when the position came from the device
pub const DEVICE_LOCATION_LABEL: &str = "Your Location";

/// Geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A resolved lookup target: where to fetch and what to call it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinates: Coordinates,
    pub label: String,
}

/// Current conditions. Optional readings are often omitted by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub weather_code: i32,
}

/// One row of the daily series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub uv_index_max: Option<f64>,
}

/// Everything one forecast request returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    /// IANA zone inferred from the coordinates, e.g. "America/New_York"
    pub timezone: String,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// The four failure kinds a lookup can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    NotFound,
    Network,
    LocationUnavailable,
}

/// Lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No city name entered")]
    EmptyInput,
    #[error("No match for city: {0}")]
    NotFound(String),
    #[error("Geocoding request failed: {0}")]
    Geocode(#[source] NetworkError),
    #[error("Forecast request failed: {0}")]
    Forecast(#[source] NetworkError),
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Geocode(_) | Self::Forecast(_) => ErrorKind::Network,
            Self::LocationUnavailable(_) => ErrorKind::LocationUnavailable,
        }
    }

    /// Message for the status slot. Network failures are worded by stage.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter a city name.",
            Self::NotFound(_) => "City not found. Please try a different name.",
            Self::Geocode(_) => "Failed to find city. Please check the name and try again.",
            Self::Forecast(_) => "Failed to fetch weather data. Please try again later.",
            Self::LocationUnavailable(LocationError::ServiceUnavailable) => {
                "Geolocation is not supported on this device."
            }
            Self::LocationUnavailable(_) => {
                "Unable to retrieve your location. Please ensure location services are enabled and permissions are granted."
            }
        }
    }
}
