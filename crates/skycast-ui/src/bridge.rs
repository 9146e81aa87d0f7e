use std::sync::{Arc, OnceLock};

use skycast_core::{AppError, Config};

use crate::services::WeatherService;

// Static tokio runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

// Weather services
static WEATHER_SERVICE: OnceLock<Arc<WeatherService>> = OnceLock::new();

/// Initialize the tokio runtime (call once at application startup)
fn get_or_init_runtime() -> std::io::Result<tokio::runtime::Handle> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime.handle().clone());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("skycast-tokio")
        .build()?;

    // A concurrent initializer may have won; either runtime is fine to use.
    let handle = RUNTIME.get_or_init(|| runtime).handle().clone();
    Ok(handle)
}

/// Initialize weather services from configuration.
/// Must be called before lookups are requested.
pub fn initialize_weather_services(config: &Config) -> Result<(), AppError> {
    get_or_init_runtime()?;

    let service = Arc::new(WeatherService::from_config(config)?);

    if WEATHER_SERVICE.set(service).is_err() {
        tracing::warn!("WeatherService already initialized");
    }

    tracing::info!("Weather services initialized successfully");
    Ok(())
}

/// Get the initialized weather service and runtime
pub fn get_weather_service() -> Option<(Arc<WeatherService>, tokio::runtime::Handle)> {
    let service = WEATHER_SERVICE.get()?.clone();
    let runtime = get_runtime()?;
    Some((service, runtime))
}

pub fn get_runtime() -> Option<tokio::runtime::Handle> {
    RUNTIME.get().map(|r| r.handle().clone())
}
