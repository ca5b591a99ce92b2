// Shaky Weather - event loop wiring
//
// The main thread runs a calloop event loop that owns all app state.
// Platform sensors and fetch completions arrive as channel events, so every
// state mutation happens on this thread; the fetch worker never touches
// display state directly.
//
// There is no real motion/location stack to link against on a desktop, so a
// small stdin driver stands in for the platform: "loc <lat> <lon>" feeds the
// location channel, "shake" feeds the motion channel.

use anyhow::{Context, Result};
use calloop::channel::Event;
use calloop::EventLoop;
use chrono::Utc;
use std::io::BufRead;
use std::thread;
use std::time::Duration;

use shaky_weather::{
    sensor_channels, App, DisplayState, ForecastEndpoint, LocationUpdate, SensorSenders,
    ShakeEvent, WeatherService,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Shaky Weather");

    let (senders, sensors) = sensor_channels();
    let (weather, fetch_results) = WeatherService::new(ForecastEndpoint::default());

    let mut app = App::new();

    let mut event_loop = EventLoop::<App>::try_new().context("Failed to create event loop")?;
    let handle = event_loop.handle();

    handle
        .insert_source(sensors.locations, |event, _, app| {
            if let Event::Msg(batch) = event {
                app.handle_location_update(&batch);
            }
        })
        .map_err(|e| anyhow::anyhow!("Failed to insert location source: {:?}", e))?;

    // The weather service moves into the shake handler; shakes are the only
    // thing that triggers a fetch.
    handle
        .insert_source(sensors.shakes, move |event, _, app| {
            if let Event::Msg(ShakeEvent) = event {
                if let Some(coordinate) = app.handle_shake() {
                    weather.fetch(coordinate);
                }
            }
        })
        .map_err(|e| anyhow::anyhow!("Failed to insert shake source: {:?}", e))?;

    handle
        .insert_source(fetch_results, |event, _, app| {
            if let Event::Msg(result) = event {
                app.handle_fetch_result(result);
            }
        })
        .map_err(|e| anyhow::anyhow!("Failed to insert fetch result source: {:?}", e))?;

    // Signal handling for graceful shutdown
    let signals = calloop::signals::Signals::new(&[calloop::signals::Signal::SIGINT])
        .context("Failed to create signal handler for graceful shutdown")?;
    handle
        .insert_source(signals, |_signal, _metadata, _app| {
            tracing::info!("Received SIGINT, exiting gracefully");
            std::process::exit(0);
        })
        .map_err(|e| anyhow::anyhow!("Failed to insert signal handler: {:?}", e))?;

    spawn_stdin_driver(senders);

    tracing::info!("Event loop starting");
    println!("commands: \"loc <lat> <lon>\" to set location, \"shake\" to shake");

    let mut shown: Option<DisplayState> = None;
    loop {
        if let Err(e) = event_loop.dispatch(Duration::from_millis(16), &mut app) {
            tracing::error!(error = %e, "Event loop dispatch error");
            return Err(e.into());
        }

        // Repaint only when the display values changed
        if shown.as_ref() != Some(app.display()) {
            render(app.display());
            shown = Some(app.display().clone());
        }
    }
}

/// Print the current display values, the stand-in for drawing the screen
fn render(display: &DisplayState) {
    if display.shake_prompt_visible {
        println!("[ shake me ]");
        return;
    }

    println!(
        "icon={} background={} | {} {}",
        display.icon.unwrap_or("-"),
        display.background.unwrap_or("-"),
        display.temperature_text.as_deref().unwrap_or(""),
        display.summary_text.as_deref().unwrap_or(""),
    );
}

/// Stdin stand-in for the platform sensor stack. Runs until EOF.
fn spawn_stdin_driver(senders: SensorSenders) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let mut parts = line.split_whitespace();

            match parts.next() {
                Some("shake") => {
                    let _ = senders.shakes.send(ShakeEvent);
                }
                Some("loc") => {
                    let lat = parts.next().and_then(|v| v.parse::<f64>().ok());
                    let lon = parts.next().and_then(|v| v.parse::<f64>().ok());
                    match (lat, lon) {
                        (Some(latitude), Some(longitude)) => {
                            let _ = senders.locations.send(vec![LocationUpdate {
                                latitude,
                                longitude,
                                timestamp: Utc::now(),
                            }]);
                        }
                        _ => eprintln!("usage: loc <lat> <lon>"),
                    }
                }
                Some(other) => eprintln!("unknown command: {}", other),
                None => {}
            }
        }
    });
}
