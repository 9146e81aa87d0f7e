//! View state handed to a front end in one piece.

use skycast_weather::WeatherError;

/// Shown in place of any reading the provider left out
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    /// Classes for the message box
    pub fn css_classes(&self) -> &'static str {
        match self {
            Severity::Info => "bg-green-800 border-green-600 text-green-200",
            Severity::Error => "bg-red-800 border-red-600 text-red-200",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Current-conditions card. All readings are preformatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub location_name: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub theme_class: &'static str,
    pub card_class: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub uv_index: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    /// Short weekday, e.g. "Mon"
    pub weekday: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub theme_class: &'static str,
    /// "max° / min°"
    pub temperature_range: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub current: CurrentCard,
    pub forecast: Vec<ForecastRow>,
}

/// Status slot and result panel, always replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    status: Option<StatusMessage>,
    panel: Option<WeatherPanel>,
}

impl ViewModel {
    /// Nothing shown: the state right before a lookup starts
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Lookup in progress: informational message, panel hidden
    pub fn busy(text: impl Into<String>) -> Self {
        Self {
            status: Some(StatusMessage::info(text)),
            panel: None,
        }
    }

    /// Lookup failed: error message, panel hidden
    pub fn failed(err: &WeatherError) -> Self {
        Self {
            status: Some(StatusMessage::from(err)),
            panel: None,
        }
    }

    /// Lookup succeeded: panel shown, message cleared
    pub fn ready(panel: WeatherPanel) -> Self {
        Self {
            status: None,
            panel: Some(panel),
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn panel(&self) -> Option<&WeatherPanel> {
        self.panel.as_ref()
    }
}
