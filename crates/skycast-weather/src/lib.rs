//! Weather lookup for SkyCast
//!
//! Resolves a city name or device position to coordinates and fetches current
//! conditions plus a daily forecast from the Open-Meteo API.

pub mod catalog;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;

pub use catalog::Bucket;
pub use geocode::Geocoder;
pub use location::{locator_from_config, DeviceLocator, FixedLocator, UnsupportedLocator};
pub use provider::WeatherProvider;
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use skycast_core::{NetworkError, ReqwestErrorExt};

const USER_AGENT: &str = concat!("SkyCast/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the geocoder and the forecast provider.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, NetworkError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ReqwestErrorExt::into_network_error)
}
