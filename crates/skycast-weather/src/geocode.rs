//! Forward geocoding: convert a city name to coordinates.
//! Uses the Open-Meteo geocoding search - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::{NetworkError, ReqwestErrorExt};
use tracing::instrument;

use crate::types::{Coordinates, Place, WeatherError};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    /// Absent entirely when nothing matched
    #[serde(default)]
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country: Option<String>,
}

impl GeocodeResult {
    fn into_place(self) -> Place {
        let label = match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name,
        };
        Place {
            coordinates: Coordinates::new(self.latitude, self.longitude),
            label,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up the single best match for `name`.
    ///
    /// Blank input is rejected before any request is made.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, name: &str) -> Result<Place, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::EmptyInput);
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await
            .map_err(|e| WeatherError::Geocode(e.into_network_error()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Geocoding returned status {}", status);
            return Err(WeatherError::Geocode(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            }));
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            WeatherError::Geocode(NetworkError::InvalidResponse(e.to_string()))
        })?;

        let place = body
            .results
            .and_then(|results| results.into_iter().next())
            .map(GeocodeResult::into_place)
            .ok_or_else(|| WeatherError::NotFound(name.to_string()))?;

        tracing::info!(
            "Geocoded '{}' to {} ({}, {})",
            name,
            place.label,
            place.coordinates.latitude,
            place.coordinates.longitude
        );
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_includes_country() {
        let result = GeocodeResult {
            latitude: 52.52,
            longitude: 13.41,
            name: "Berlin".into(),
            country: Some("Germany".into()),
        };
        let place = result.into_place();
        assert_eq!(place.label, "Berlin, Germany");
        assert_eq!(place.coordinates, Coordinates::new(52.52, 13.41));
    }

    #[test]
    fn test_label_without_country() {
        let result = GeocodeResult {
            latitude: 0.0,
            longitude: 0.0,
            name: "Null Island".into(),
            country: None,
        };
        assert_eq!(result.into_place().label, "Null Island");
    }

    #[test]
    fn test_response_without_results_key() {
        let body: GeocodeResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(body.results.is_none());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_without_request() {
        // Unroutable base URL: any request would fail as a network error instead.
        let geocoder = Geocoder::new(Client::new(), "http://127.0.0.1:9/v1/search");
        let err = geocoder.search("   \t ").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyInput));
    }
}
