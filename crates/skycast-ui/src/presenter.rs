//! Builds the result panel from a forecast payload.

use chrono::NaiveDate;
use skycast_weather::{catalog, DailyForecast, ForecastPayload};

use crate::view::{CurrentCard, ForecastRow, WeatherPanel, PLACEHOLDER};

pub const FINDING_CITY: &str = "Finding city...";
pub const GETTING_LOCATION: &str = "Getting your location...";
pub const FETCHING_WEATHER: &str = "Fetching weather data...";

const CARD_BASE_CLASS: &str =
    "rounded-2xl p-6 shadow-inner border border-gray-700 text-white transition-all duration-500";

/// Round to the nearest integer, halves toward positive infinity (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn rounded(value: Option<f64>) -> String {
    value
        .map(|v| round_half_up(v).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn as_received(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// "America/New_York" -> "New York"
pub fn timezone_label(timezone: &str) -> String {
    timezone
        .rsplit('/')
        .next()
        .unwrap_or(timezone)
        .replace('_', " ")
}

/// Short en-US weekday name
pub fn weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

fn forecast_row(day: &DailyForecast) -> ForecastRow {
    // A missing code is treated like an unrecognized one.
    let code = day.weather_code.unwrap_or(i32::MIN);
    ForecastRow {
        weekday: weekday(day.date),
        icon: catalog::icon(code),
        description: catalog::describe(code),
        theme_class: catalog::theme(code),
        temperature_range: format!("{}° / {}°", rounded(day.temp_max), rounded(day.temp_min)),
    }
}

/// Build the panel. `label` comes from the resolver; without one the
/// payload's timezone names the place.
pub fn present(payload: &ForecastPayload, label: Option<&str>) -> WeatherPanel {
    let current = &payload.current;
    let code = current.weather_code;
    let theme_class = catalog::theme(code);

    let location_name = match label {
        Some(label) => label.to_string(),
        None => timezone_label(&payload.timezone),
    };

    let uv_index = payload.daily.first().and_then(|day| day.uv_index_max);

    let card = CurrentCard {
        location_name,
        description: catalog::describe(code),
        icon: catalog::icon(code),
        theme_class,
        card_class: format!("{} {}", CARD_BASE_CLASS, theme_class),
        temperature: round_half_up(current.temperature).to_string(),
        // No apparent-temperature reading is requested; mirror the air temperature.
        feels_like: round_half_up(current.temperature).to_string(),
        humidity: rounded(current.humidity),
        wind_speed: as_received(current.wind_speed),
        pressure: as_received(current.pressure),
        uv_index: as_received(uv_index),
    };

    WeatherPanel {
        current: card,
        forecast: payload.daily.iter().map(forecast_row).collect(),
    }
}
