//! HTML rendering of a `ViewModel`: message box, weather card and forecast list.

use std::fmt::Write;

use crate::view::{ForecastRow, StatusMessage, ViewModel, WeatherPanel};

const MESSAGE_BOX_BASE: &str = "mt-4 p-4 rounded-xl border";

/// Name of the keyframes the result panel fades in with
const FADE_IN_ANIMATION: &str = "weather-fade-in";

/// Length of the fade itself, matching Tailwind's `duration-500`
const FADE_DURATION_MS: u64 = 500;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    fade_in_ms: u64,
}

impl HtmlRenderer {
    pub fn new(fade_in_ms: u64) -> Self {
        Self { fade_in_ms }
    }

    /// Render both slots. Hidden slots are emitted with the `hidden` class.
    ///
    /// A shown panel starts at `opacity-0` and animates to full opacity
    /// once `fade_in_ms` has elapsed.
    pub fn render(&self, view: &ViewModel) -> String {
        let mut html = String::new();
        html.push_str(&self.message_box(view.status()));
        html.push('\n');
        html.push_str(&self.result_panel(view.panel()));
        html
    }

    fn message_box(&self, status: Option<&StatusMessage>) -> String {
        match status {
            Some(status) => format!(
                r#"<div id="messageBox" class="{} {}"><p id="messageText">{}</p></div>"#,
                MESSAGE_BOX_BASE,
                status.severity.css_classes(),
                escape_html(&status.text)
            ),
            None => format!(
                r#"<div id="messageBox" class="{} hidden"><p id="messageText"></p></div>"#,
                MESSAGE_BOX_BASE
            ),
        }
    }

    fn result_panel(&self, panel: Option<&WeatherPanel>) -> String {
        let panel = match panel {
            Some(panel) => panel,
            None => {
                return r#"<div id="weatherResult" class="hidden opacity-0"></div>"#.to_string();
            }
        };

        let card = &panel.current;
        let mut html = String::new();
        // Writing to a String cannot fail.
        let _ = write!(
            html,
            r#"<style>@keyframes {animation} {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}</style>
<div id="weatherResult" class="opacity-0" style="animation-name: {animation}; animation-duration: {duration}ms; animation-delay: {delay}ms; animation-fill-mode: forwards">
    <div id="weatherCard" class="{card_class}">
        <h2 id="locationName">{location}</h2>
        <div id="weatherIcon">{icon}</div>
        <p id="weatherDescription">{description}</p>
        <p><span id="currentTemp">{temp}</span>°</p>
        <p>Feels like <span id="feelsLikeTemp">{feels_like}</span>°</p>
        <p>Humidity <span id="humidity">{humidity}</span></p>
        <p>Wind <span id="windSpeed">{wind}</span></p>
        <p>Pressure <span id="pressure">{pressure}</span></p>
        <p>UV index <span id="uvIndex">{uv}</span></p>
    </div>
    <div id="forecast">"#,
            animation = FADE_IN_ANIMATION,
            duration = FADE_DURATION_MS,
            delay = self.fade_in_ms,
            card_class = card.card_class,
            location = escape_html(&card.location_name),
            icon = card.icon,
            description = escape_html(card.description),
            temp = card.temperature,
            feels_like = card.feels_like,
            humidity = card.humidity,
            wind = card.wind_speed,
            pressure = card.pressure,
            uv = card.uv_index,
        );

        for row in &panel.forecast {
            html.push_str(&forecast_row(row));
        }

        html.push_str("\n    </div>\n</div>");
        html
    }
}

fn forecast_row(row: &ForecastRow) -> String {
    format!(
        r#"
        <div class="flex items-center justify-between p-4 rounded-xl backdrop-blur-sm shadow-sm border border-gray-700 {theme}">
            <span class="text-lg font-semibold w-1/4 text-white">{weekday}</span>
            <div class="w-1/4 flex items-center justify-center">{icon}</div>
            <p class="text-sm capitalize w-1/4 text-white text-center">{description}</p>
            <span class="text-lg font-bold w-1/4 text-right text-white">{range}</span>
        </div>"#,
        theme = row.theme_class,
        weekday = escape_html(&row.weekday),
        icon = row.icon,
        description = escape_html(row.description),
        range = row.temperature_range,
    )
}
