// Weather fetch service
//
// Uses the worker thread pattern with a calloop channel to keep network I/O
// off the main event loop. Each shake spawns one thread that runs a single
// async GET on a current-thread tokio runtime and sends the typed result
// back to the loop; crossing that channel is the only synchronization point
// in the app.

use calloop::channel::{channel, Channel, Sender};
use serde::Deserialize;
use std::thread;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::icons::IconCode;
use crate::location::Coordinate;

const FORECAST_BASE_URL: &str = "https://api.forecast.io";
const FORECAST_API_KEY: &str = "1d647ff195097d776374cf5199531057";

/// One current-conditions observation, extracted from the API response
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Human-readable summary, verbatim from the API
    pub summary: String,
    /// Degrees Fahrenheit, passed through unmodified (see
    /// [`ForecastEndpoint`] for the unit contract)
    pub temperature_f: f64,
    /// Parsed condition code
    pub icon: IconCode,
}

/// Where forecasts come from.
///
/// The API serves Fahrenheit unless asked otherwise; this app never asks
/// otherwise, so `WeatherReading::temperature_f` depends on that contract
/// holding for whatever `base_url` points at. Tests substitute a local mock
/// server here.
#[derive(Debug, Clone)]
pub struct ForecastEndpoint {
    /// Scheme and host, no trailing slash
    pub base_url: String,
    /// API key embedded in the request path
    pub api_key: String,
}

impl Default for ForecastEndpoint {
    fn default() -> Self {
        Self {
            base_url: FORECAST_BASE_URL.to_string(),
            api_key: FORECAST_API_KEY.to_string(),
        }
    }
}

impl ForecastEndpoint {
    /// Request URL for a coordinate: `{base}/forecast/{key}/{lat},{lon}`.
    /// Values are embedded as-is; NaN or out-of-range input is the API's
    /// problem to reject.
    fn url_for(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/forecast/{}/{},{}",
            self.base_url, self.api_key, coordinate.latitude, coordinate.longitude
        )
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    currently: Option<Currently>,
}

// Fields are individually optional so a partial object surfaces as
// MissingCurrently instead of a deserialization error.
#[derive(Debug, Deserialize)]
struct Currently {
    summary: Option<String>,
    icon: Option<String>,
    temperature: Option<f64>,
}

/// Weather service that runs fetches on worker threads and reports results
/// back to the main event loop via a calloop channel.
pub struct WeatherService {
    endpoint: ForecastEndpoint,
    sender: Sender<FetchResult<WeatherReading>>,
}

impl WeatherService {
    /// Create the service plus the channel the event loop should listen on
    pub fn new(endpoint: ForecastEndpoint) -> (Self, Channel<FetchResult<WeatherReading>>) {
        let (sender, results) = channel();
        (Self { endpoint, sender }, results)
    }

    /// Kick off one fetch for the given coordinate.
    ///
    /// Fire-and-forget from the caller's perspective: the result arrives on
    /// the channel returned by [`WeatherService::new`]. No timeout, no retry,
    /// no cancellation. When two fetches race, whichever completes later is
    /// whichever the loop applies last (last-completed-wins).
    pub fn fetch(&self, coordinate: Coordinate) {
        let sender = self.sender.clone();
        let endpoint = self.endpoint.clone();

        debug!(
            lat = coordinate.latitude,
            lon = coordinate.longitude,
            "Starting weather fetch"
        );

        thread::spawn(move || {
            // Create tokio runtime in this thread
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!(error = %e, "Failed to create tokio runtime for weather fetch");
                    return;
                }
            };

            let result = rt.block_on(fetch_current(&endpoint, coordinate));
            if let Err(ref e) = result {
                warn!(
                    error = %e,
                    lat = coordinate.latitude,
                    lon = coordinate.longitude,
                    "Weather fetch failed"
                );
            }

            // The receiving loop may already be gone during shutdown
            let _ = sender.send(result);
        });
    }
}

/// Single GET against the forecast API, extracting (summary, temperature,
/// icon) from the `currently` object
async fn fetch_current(
    endpoint: &ForecastEndpoint,
    coordinate: Coordinate,
) -> FetchResult<WeatherReading> {
    let url = endpoint.url_for(coordinate);

    let response = reqwest::get(&url).await.map_err(|e| {
        debug!(error = %e, "HTTP request failed");
        e
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "Weather API returned error status");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let parsed: ForecastResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::Json(e.to_string()))?;

    let currently = parsed.currently.ok_or(FetchError::MissingCurrently)?;
    let (summary, icon, temperature) =
        match (currently.summary, currently.icon, currently.temperature) {
            (Some(summary), Some(icon), Some(temperature)) => (summary, icon, temperature),
            _ => return Err(FetchError::MissingCurrently),
        };

    debug!(
        summary = %summary,
        temperature = temperature,
        icon = %icon,
        "Weather data parsed"
    );

    Ok(WeatherReading {
        summary,
        temperature_f: temperature,
        icon: IconCode::from_api(&icon),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint_for(server: &MockServer) -> ForecastEndpoint {
        ForecastEndpoint {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        }
    }

    const SEATTLE: Coordinate = Coordinate {
        latitude: 47.6,
        longitude: -122.3,
    };

    #[test]
    fn test_url_embeds_lat_then_lon() {
        let endpoint = ForecastEndpoint {
            base_url: "https://api.forecast.io".to_string(),
            api_key: "k".to_string(),
        };
        assert_eq!(
            endpoint.url_for(SEATTLE),
            "https://api.forecast.io/forecast/k/47.6,-122.3"
        );
    }

    #[test]
    fn test_url_passes_nan_through() {
        let endpoint = ForecastEndpoint {
            base_url: "https://api.forecast.io".to_string(),
            api_key: "k".to_string(),
        };
        let url = endpoint.url_for(Coordinate {
            latitude: f64::NAN,
            longitude: 200.0,
        });
        assert_eq!(url, "https://api.forecast.io/forecast/k/NaN,200");
    }

    #[tokio::test]
    async fn test_fetch_well_formed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast/test-key/47.6,-122.3"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"currently":{"summary":"Clear","icon":"clear-day","temperature":72.5}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let reading = fetch_current(&endpoint_for(&server), SEATTLE)
            .await
            .expect("fetch should succeed");

        assert_eq!(reading.summary, "Clear");
        assert_eq!(reading.temperature_f, 72.5);
        assert_eq!(reading.icon, IconCode::ClearDay);
    }

    #[tokio::test]
    async fn test_fetch_ignores_extra_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"latitude":47.6,"currently":{"summary":"Rain","icon":"rain","temperature":51.2,"humidity":0.9,"windSpeed":4.2},"hourly":{}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let reading = fetch_current(&endpoint_for(&server), SEATTLE)
            .await
            .expect("extra fields should be ignored");

        assert_eq!(reading.summary, "Rain");
        assert_eq!(reading.icon, IconCode::Rain);
    }

    #[tokio::test]
    async fn test_fetch_unrecognized_icon_maps_to_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"currently":{"summary":"Dusty","icon":"sandstorm","temperature":99.0}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let reading = fetch_current(&endpoint_for(&server), SEATTLE)
            .await
            .expect("unknown icon codes are still a valid reading");

        assert_eq!(reading.icon, IconCode::Unknown);
    }

    #[tokio::test]
    async fn test_fetch_missing_currently_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"hourly":{"summary":"Rainy"}}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let result = fetch_current(&endpoint_for(&server), SEATTLE).await;
        assert!(matches!(result, Err(FetchError::MissingCurrently)));
    }

    #[tokio::test]
    async fn test_fetch_incomplete_currently_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"currently":{"summary":"Clear","icon":"clear-day"}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let result = fetch_current(&endpoint_for(&server), SEATTLE).await;
        assert!(matches!(result, Err(FetchError::MissingCurrently)));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<html>gateway</html>", "text/html"),
            )
            .mount(&server)
            .await;

        let result = fetch_current(&endpoint_for(&server), SEATTLE).await;
        assert!(matches!(result, Err(FetchError::Json(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = fetch_current(&endpoint_for(&server), SEATTLE).await;
        assert!(matches!(result, Err(FetchError::Status(500))));
    }

    #[tokio::test]
    async fn test_fetch_connection_failure() {
        // Nothing listens on the discard port
        let endpoint = ForecastEndpoint {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "k".to_string(),
        };

        let result = fetch_current(&endpoint, SEATTLE).await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}
