use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use skycast_core::{NetworkError, ReqwestErrorExt};
use tracing::instrument;

use crate::types::{Coordinates, CurrentConditions, DailyForecast, ForecastPayload, WeatherError};

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,uv_index_max,weathercode";

#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    #[serde(default)]
    timezone: String,
    current_weather: ApiCurrentWeather,
    #[serde(default)]
    daily: ApiDaily,
}

#[derive(Debug, Deserialize)]
struct ApiCurrentWeather {
    temperature: f64,
    #[serde(default)]
    relativehumidity_2m: Option<f64>,
    #[serde(default)]
    windspeed: Option<f64>,
    #[serde(default)]
    pressure_msl: Option<f64>,
    weathercode: i32,
}

/// Parallel arrays, one index per day. Entries may be `null`.
#[derive(Debug, Default, Deserialize)]
struct ApiDaily {
    #[serde(default)]
    time: Vec<NaiveDate>,
    #[serde(default)]
    weathercode: Vec<Option<i32>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    uv_index_max: Vec<Option<f64>>,
}

fn at<T: Copy>(series: &[Option<T>], index: usize) -> Option<T> {
    series.get(index).copied().flatten()
}

impl From<ApiForecastResponse> for ForecastPayload {
    fn from(api: ApiForecastResponse) -> Self {
        let daily = &api.daily;
        let rows = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| DailyForecast {
                date: *date,
                weather_code: at(&daily.weathercode, i),
                temp_max: at(&daily.temperature_2m_max, i),
                temp_min: at(&daily.temperature_2m_min, i),
                uv_index_max: at(&daily.uv_index_max, i),
            })
            .collect();

        let current = api.current_weather;
        Self {
            timezone: api.timezone,
            current: CurrentConditions {
                temperature: current.temperature,
                humidity: current.relativehumidity_2m,
                wind_speed: current.windspeed,
                pressure: current.pressure_msl,
                weather_code: current.weathercode,
            },
            daily: rows,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch current conditions and the daily series for a position.
    ///
    /// A single attempt; any failure is reported as `WeatherError::Forecast`.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<ForecastPayload, WeatherError> {
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();
        let query_params = [
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current_weather", "true"),
            ("daily", DAILY_FIELDS),
            ("timezone", "auto"),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&query_params)
            .send()
            .await
            .map_err(|e| WeatherError::Forecast(e.into_network_error()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Forecast request returned status {}", status);
            return Err(WeatherError::Forecast(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            }));
        }

        let body: ApiForecastResponse = response.json().await.map_err(|e| {
            WeatherError::Forecast(NetworkError::InvalidResponse(e.to_string()))
        })?;

        let payload = ForecastPayload::from(body);
        tracing::info!(
            "Fetched forecast for {} ({} days)",
            payload.timezone,
            payload.daily.len()
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_arrays_zip_into_rows() {
        let api: ApiForecastResponse = serde_json::from_value(serde_json::json!({
            "timezone": "Europe/Berlin",
            "current_weather": { "temperature": 4.2, "windspeed": 11.5, "weathercode": 3 },
            "daily": {
                "time": ["2024-01-01", "2024-01-02", "2024-01-03"],
                "weathercode": [0, null, 61],
                "temperature_2m_max": [10.4, 5.6],
                "temperature_2m_min": [2.1, -1.2, 0.0],
                "uv_index_max": [1.5, 0.9, null]
            }
        }))
        .unwrap();

        let payload = ForecastPayload::from(api);
        assert_eq!(payload.timezone, "Europe/Berlin");
        assert_eq!(payload.current.wind_speed, Some(11.5));
        assert_eq!(payload.current.humidity, None);
        assert_eq!(payload.daily.len(), 3);
        assert_eq!(payload.daily[1].weather_code, None);
        assert_eq!(payload.daily[2].temp_max, None);
        assert_eq!(payload.daily[2].temp_min, Some(0.0));
        assert_eq!(payload.daily[2].uv_index_max, None);
        assert_eq!(
            payload.daily[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_daily_block_yields_no_rows() {
        let api: ApiForecastResponse = serde_json::from_value(serde_json::json!({
            "timezone": "UTC",
            "current_weather": { "temperature": 0.0, "weathercode": 0 }
        }))
        .unwrap();

        assert!(ForecastPayload::from(api).daily.is_empty());
    }
}
