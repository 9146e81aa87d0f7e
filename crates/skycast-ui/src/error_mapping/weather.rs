use skycast_weather::{ErrorKind, WeatherError};

use crate::view::StatusMessage;

impl From<&WeatherError> for StatusMessage {
    fn from(e: &WeatherError) -> Self {
        StatusMessage::error(log_failure(e))
    }
}

/// Log a failed lookup at a level chosen by its kind; returns the status text.
fn log_failure(e: &WeatherError) -> &'static str {
    let kind = e.kind();
    match kind {
        ErrorKind::Network => tracing::error!(?kind, "Lookup failed: {}", e),
        ErrorKind::EmptyInput | ErrorKind::NotFound | ErrorKind::LocationUnavailable => {
            tracing::warn!(?kind, "Lookup failed: {}", e)
        }
    }
    e.user_message()
}
