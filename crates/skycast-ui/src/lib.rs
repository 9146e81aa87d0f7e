//! Presentation layer for SkyCast.
//!
//! Turns lookup results into an immutable `ViewModel`, runs lookups off the
//! owning thread, and renders the view as HTML.

pub mod bridge;
pub mod error_mapping;
pub mod models;
pub mod presenter;
pub mod render;
pub mod services;
pub mod view;

pub use models::WeatherModel;
pub use render::HtmlRenderer;
pub use services::{request_lookup, FlowToken, LookupRequest, WeatherService, WeatherServiceMessage};
pub use view::{CurrentCard, ForecastRow, Severity, StatusMessage, ViewModel, WeatherPanel};
