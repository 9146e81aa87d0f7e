//! WMO weather code catalog: description, theme class and icon per code.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Display bucket a weather code falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Clear,
    Cloudy,
    Fog,
    /// Drizzle, rain and rain showers share one style
    Rain,
    Snow,
    Thunderstorm,
    #[default]
    Default,
}

/// Ordered classification table; the first set containing the code wins.
const BUCKETS: &[(&[i32], Bucket)] = &[
    (&[0, 1], Bucket::Clear),
    (&[2, 3], Bucket::Cloudy),
    (&[45, 48], Bucket::Fog),
    (&[51, 53, 55, 56, 57], Bucket::Rain),
    (&[61, 63, 65, 66, 67, 80, 81, 82], Bucket::Rain),
    (&[71, 73, 75, 77, 85, 86], Bucket::Snow),
    (&[95, 96, 99], Bucket::Thunderstorm),
];

const DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

const ICON_CLEAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-sun"><circle cx="12" cy="12" r="5"></circle><line x1="12" y1="1" x2="12" y2="3"></line><line x1="12" y1="21" x2="12" y2="23"></line><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line><line x1="1" y1="12" x2="3" y2="12"></line><line x1="21" y1="12" x2="23" y2="12"></line><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line></svg>"#;
const ICON_CLOUDY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-cloud"><path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"></path></svg>"#;
const ICON_RAIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-cloud-rain"><line x1="16" y1="13" x2="16" y2="21"></line><line x1="8" y1="13" x2="8" y2="21"></line><line x1="12" y1="15" x2="12" y2="23"></line><path d="M20 16.58A5 5 0 0 0 18 7h-1.26A8 8 0 1 0 4 15.25"></path></svg>"#;
const ICON_SNOW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-cloud-snow"><path d="M20 17.58A5 5 0 0 0 18 8h-1.26A8 8 0 1 0 4 16.25"></path><line x1="8" y1="16" x2="8" y2="16.01"></line><line x1="8" y1="20" x2="8" y2="20.01"></line><line x1="12" y1="18" x2="12" y2="18.01"></line><line x1="12" y1="22" x2="12" y2="22.01"></line><line x1="16" y1="20" x2="16" y2="20.01"></line><line x1="16" y1="22" x2="16" y2="22.01"></line></svg>"#;
const ICON_THUNDERSTORM: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="36" height="36" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-cloud-lightning"><path d="M19 16.9A5 5 0 0 0 18 7h-4a8 8 0 0 0-8 8c0 1.5.25 3 .7 4.11"></path><polyline points="14 12 10 18 14 18 10 24"></polyline></svg>"#;
const ICON_FOG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-align-justify"><line x1="21" y1="10" x2="3" y2="10"></line><line x1="21" y1="6" x2="3" y2="6"></line><line x1="21" y1="14" x2="3" y2="14"></line><line x1="21" y1="18" x2="3" y2="18"></line></svg>"#;
const ICON_DEFAULT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-alert-circle"><circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line><line x1="12" y1="16" x2="12.01" y2="16"></line></svg>"#;

impl Bucket {
    /// Classify a WMO code
    pub fn from_wmo_code(code: i32) -> Self {
        BUCKETS
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map(|(_, bucket)| *bucket)
            .unwrap_or_default()
    }

    /// Background gradient and text color classes
    pub fn theme_class(&self) -> &'static str {
        match self {
            Self::Clear => "bg-gradient-to-br from-yellow-700 to-amber-800 text-gray-100",
            Self::Cloudy => "bg-gradient-to-br from-gray-700 to-gray-900",
            Self::Fog => "bg-gradient-to-br from-gray-500 to-gray-700",
            Self::Rain => "bg-gradient-to-br from-sky-700 to-blue-900",
            Self::Snow => "bg-gradient-to-br from-gray-200 to-sky-500 text-gray-900",
            Self::Thunderstorm => "bg-gradient-to-br from-gray-800 to-gray-900",
            Self::Default => "bg-gradient-to-br from-blue-700 to-purple-800",
        }
    }

    /// Inline SVG markup
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => ICON_CLEAR,
            Self::Cloudy => ICON_CLOUDY,
            Self::Fog => ICON_FOG,
            Self::Rain => ICON_RAIN,
            Self::Snow => ICON_SNOW,
            Self::Thunderstorm => ICON_THUNDERSTORM,
            Self::Default => ICON_DEFAULT,
        }
    }
}

pub fn describe(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_DESCRIPTION)
}

pub fn theme(code: i32) -> &'static str {
    Bucket::from_wmo_code(code).theme_class()
}

pub fn icon(code: i32) -> &'static str {
    Bucket::from_wmo_code(code).icon()
}
