//! Weather backend: async lookups.
//! All network work runs off the owning thread; views are sent back via mpsc.

use std::sync::Arc;

use skycast_core::{Config, NetworkError};
use skycast_weather::{
    build_client, locator_from_config, Coordinates, DeviceLocator, Geocoder, WeatherError,
    WeatherProvider, DEVICE_LOCATION_LABEL,
};

use crate::presenter::{self, FETCHING_WEATHER, FINDING_CITY, GETTING_LOCATION};
use crate::view::{ViewModel, WeatherPanel};

/// Identifies one lookup. Issued in increasing order by `WeatherModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowToken(pub(crate) u64);

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum LookupRequest {
    /// Free-text city name, as typed
    City(String),
    /// Ask the device for its position
    DeviceLocation,
    /// Known position with no label; the forecast timezone names it
    Coordinates(Coordinates),
}

/// Messages sent from a running lookup back to the owning thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Intermediate state (status message, panel hidden)
    Progress { token: FlowToken, view: ViewModel },
    /// Final state of the lookup
    Done { token: FlowToken, view: ViewModel },
}

impl WeatherServiceMessage {
    pub fn token(&self) -> FlowToken {
        match self {
            Self::Progress { token, .. } | Self::Done { token, .. } => *token,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}

pub struct WeatherService {
    geocoder: Geocoder,
    provider: WeatherProvider,
    locator: Arc<dyn DeviceLocator>,
}

impl WeatherService {
    pub fn new(geocoder: Geocoder, provider: WeatherProvider, locator: Arc<dyn DeviceLocator>) -> Self {
        Self {
            geocoder,
            provider,
            locator,
        }
    }

    /// Build the clients from configuration
    pub fn from_config(config: &Config) -> Result<Self, NetworkError> {
        let client = build_client(config.weather.request_timeout())?;
        Ok(Self::new(
            Geocoder::new(client.clone(), config.weather.geocoding_url.clone()),
            WeatherProvider::new(client, config.weather.forecast_url.clone()),
            locator_from_config(&config.location),
        ))
    }

    /// Run one lookup to completion.
    ///
    /// Intermediate views go to `on_progress`; the returned view is final.
    /// Errors never escape: they become an error view.
    pub async fn lookup<F>(&self, request: LookupRequest, mut on_progress: F) -> ViewModel
    where
        F: FnMut(ViewModel) + Send,
    {
        match self.run(request, &mut on_progress).await {
            Ok(panel) => ViewModel::ready(panel),
            Err(e) => ViewModel::failed(&e),
        }
    }

    async fn run<F>(&self, request: LookupRequest, on_progress: &mut F) -> Result<WeatherPanel, WeatherError>
    where
        F: FnMut(ViewModel) + Send,
    {
        let (coordinates, label) = match request {
            LookupRequest::City(text) => {
                if text.trim().is_empty() {
                    return Err(WeatherError::EmptyInput);
                }
                on_progress(ViewModel::busy(FINDING_CITY));
                let place = self.geocoder.search(&text).await?;
                (place.coordinates, Some(place.label))
            }
            LookupRequest::DeviceLocation => {
                on_progress(ViewModel::busy(GETTING_LOCATION));
                let position = self.locator.current_position().await?;
                tracing::info!("Got location: {}, {}", position.latitude, position.longitude);
                (position, Some(DEVICE_LOCATION_LABEL.to_string()))
            }
            LookupRequest::Coordinates(position) => (position, None),
        };

        on_progress(ViewModel::busy(FETCHING_WEATHER));
        let payload = self.provider.fetch(coordinates).await?;
        Ok(presenter::present(&payload, label.as_deref()))
    }
}

/// Start a lookup on `runtime`.
/// Sends `Progress` messages as it goes and exactly one `Done` at the end.
pub fn request_lookup(
    runtime: &tokio::runtime::Handle,
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    service: Arc<WeatherService>,
    token: FlowToken,
    request: LookupRequest,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let progress_tx = tx.clone();
        let view = service
            .lookup(request, move |view| {
                let _ = progress_tx.send(WeatherServiceMessage::Progress { token, view });
            })
            .await;
        let _ = tx.send(WeatherServiceMessage::Done { token, view });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::UnsupportedLocator;

    fn offline_service() -> WeatherService {
        let client = reqwest::Client::new();
        WeatherService::new(
            Geocoder::new(client.clone(), "http://127.0.0.1:9/v1/search"),
            WeatherProvider::new(client, "http://127.0.0.1:9/v1/forecast"),
            Arc::new(UnsupportedLocator),
        )
    }

    #[tokio::test]
    async fn test_blank_city_reports_empty_input_without_progress() {
        let service = offline_service();
        let mut progress = Vec::new();
        let view = service
            .lookup(LookupRequest::City("   ".into()), |v| progress.push(v))
            .await;

        assert!(progress.is_empty());
        assert_eq!(view.status().unwrap().text, "Please enter a city name.");
        assert!(view.panel().is_none());
    }

    #[tokio::test]
    async fn test_unsupported_device_location() {
        let service = offline_service();
        let mut progress = Vec::new();
        let view = service
            .lookup(LookupRequest::DeviceLocation, |v| progress.push(v))
            .await;

        assert_eq!(progress, vec![ViewModel::busy(GETTING_LOCATION)]);
        assert_eq!(
            view.status().unwrap().text,
            "Geolocation is not supported on this device."
        );
    }

    #[test]
    fn test_message_accessors() {
        let msg = WeatherServiceMessage::Done {
            token: FlowToken(7),
            view: ViewModel::cleared(),
        };
        assert!(msg.is_done());
        assert_eq!(msg.token(), FlowToken(7));
    }
}
