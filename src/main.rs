use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use skycast_core::Config;
use skycast_ui::{bridge, request_lookup, HtmlRenderer, LookupRequest, WeatherModel};
use skycast_weather::Coordinates;

const USAGE: &str = "Usage: skycast <city name> | --here | --at <latitude>,<longitude>";

fn parse_request(args: &[String]) -> Result<LookupRequest> {
    match args.first().map(String::as_str) {
        Some("--here") => Ok(LookupRequest::DeviceLocation),
        Some("--at") => {
            let raw = args.get(1).context("--at needs <latitude>,<longitude>")?;
            let (lat, lon) = raw
                .split_once(',')
                .context("expected <latitude>,<longitude>")?;
            let latitude: f64 = lat.trim().parse().context("invalid latitude")?;
            let longitude: f64 = lon.trim().parse().context("invalid longitude")?;
            Ok(LookupRequest::Coordinates(Coordinates::new(latitude, longitude)))
        }
        Some(flag) if flag.starts_with("--") => bail!("unknown option {}", flag),
        _ => Ok(LookupRequest::City(args.join(" "))),
    }
}

fn main() -> Result<()> {
    skycast_core::init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }
    let request = parse_request(&args).context(USAGE)?;

    let (config, _) = Config::load_validated().map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })?;

    if let Err(e) = bridge::initialize_weather_services(&config) {
        tracing::error!("Failed to initialize weather services: {}", e);
        bail!("{}", e.user_message());
    }
    let (service, runtime) =
        bridge::get_weather_service().context("weather services not initialized")?;

    let (tx, rx) = mpsc::channel();
    let mut model = WeatherModel::new();
    let token = model.begin_lookup();
    request_lookup(&runtime, &tx, service, token, request);
    drop(tx);

    for message in rx {
        let done = message.is_done();
        if model.handle(message) {
            if let Some(status) = model.view().status() {
                if status.is_error() {
                    tracing::warn!("{}", status.text);
                } else {
                    tracing::info!("{}", status.text);
                }
            }
        }
        if done {
            break;
        }
    }

    let renderer = HtmlRenderer::new(config.ui.fade_in_ms);
    println!("{}", renderer.render(model.view()));

    if model.view().status().is_some_and(|s| s.is_error()) {
        std::process::exit(1);
    }
    Ok(())
}
