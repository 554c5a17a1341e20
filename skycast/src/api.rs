//! OpenWeatherMap client
//!
//! Three endpoints with fixed contracts: geocoding (city name to candidate
//! coordinates), current conditions, and the 5-day/3-hour forecast. The two
//! weather requests are issued concurrently and joined; a snapshot is only
//! assembled when both succeed.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::forecast::Condition;
use crate::state::{CurrentConditions, ForecastPoint, Place, WeatherSnapshot};

const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Geocoding matches requested per lookup.
pub const SUGGESTION_LIMIT: usize = 5;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Everything that can go wrong talking to the API.
///
/// All variants collapse into the same user-visible outcome (the fetch
/// failed); the distinction only matters for the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Shape(&'static str),
}

/// Thin client over the three endpoints. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, api_key })
    }

    /// Look up place candidates for a free-text query, at most
    /// [`SUGGESTION_LIMIT`] matches.
    pub async fn search_places(&self, query: &str) -> Result<Vec<Place>, ApiError> {
        let url = format!(
            "{}?q={}&limit={}&appid={}",
            GEOCODING_URL,
            urlencoding::encode(query),
            SUGGESTION_LIMIT,
            self.api_key
        );
        let entries: Vec<GeoEntry> = self.get_json(&url).await?;
        debug!(query, matches = entries.len(), "geocoding lookup");
        Ok(entries.into_iter().map(Place::from).collect())
    }

    /// Fetch current conditions and the forecast timeline for a place,
    /// joining both requests into one snapshot.
    pub async fn fetch_snapshot(&self, place: &Place) -> Result<WeatherSnapshot, ApiError> {
        let current_url = format!(
            "{}?lat={}&lon={}&units=metric&appid={}",
            CURRENT_URL, place.lat, place.lon, self.api_key
        );
        let forecast_url = format!(
            "{}?lat={}&lon={}&units=metric&appid={}",
            FORECAST_URL, place.lat, place.lon, self.api_key
        );

        let (current, forecast) = tokio::try_join!(
            self.get_json::<CurrentResponse>(&current_url),
            self.get_json::<ForecastResponse>(&forecast_url),
        )?;

        build_snapshot(place.label(), current, forecast)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }
}

// ===== Wire formats =====

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    lat: f64,
    lon: f64,
    country: String,
    state: Option<String>,
}

impl From<GeoEntry> for Place {
    fn from(entry: GeoEntry) -> Self {
        Place {
            name: entry.name,
            country: entry.country,
            state: entry.state,
            lat: entry.lat,
            lon: entry.lon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherTag {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    weather: Vec<WeatherTag>,
    main: CurrentReadings,
    wind: Wind,
    sys: Sys,
}

#[derive(Debug, Deserialize)]
struct CurrentReadings {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Sys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: ForecastReadings,
    weather: Vec<WeatherTag>,
}

#[derive(Debug, Deserialize)]
struct ForecastReadings {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

fn build_snapshot(
    display_name: String,
    current: CurrentResponse,
    forecast: ForecastResponse,
) -> Result<WeatherSnapshot, ApiError> {
    let tag = current
        .weather
        .first()
        .ok_or(ApiError::Shape("current response has no weather entry"))?;

    if forecast.list.is_empty() {
        return Err(ApiError::Shape("forecast response has no entries"));
    }

    let points = forecast
        .list
        .into_iter()
        .map(|entry| {
            let condition = entry
                .weather
                .first()
                .map(|t| Condition::from_api_main(&t.main))
                .unwrap_or(Condition::Other);
            ForecastPoint {
                ts: entry.dt,
                temp: entry.main.temp,
                temp_min: entry.main.temp_min,
                temp_max: entry.main.temp_max,
                condition,
            }
        })
        .collect();

    Ok(WeatherSnapshot {
        display_name,
        current: CurrentConditions {
            temp: current.main.temp,
            feels_like: current.main.feels_like,
            humidity: current.main.humidity,
            wind_speed: current.wind.speed,
            condition: Condition::from_api_main(&tag.main),
            description: tag.description.clone(),
            sunrise: current.sys.sunrise,
            sunset: current.sys.sunset,
        },
        forecast: points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEO_FIXTURE: &str = r#"[
        {"name": "London", "local_names": {"en": "London"},
         "lat": 51.5073, "lon": -0.1277, "country": "GB"},
        {"name": "London", "lat": 42.9836, "lon": -81.2497,
         "country": "CA", "state": "Ontario"}
    ]"#;

    const CURRENT_FIXTURE: &str = r#"{
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 17.6, "feels_like": 17.1, "temp_min": 16.0, "temp_max": 19.2,
                 "pressure": 1012, "humidity": 68},
        "wind": {"speed": 4.1, "deg": 240},
        "sys": {"country": "GB", "sunrise": 1699937280, "sunset": 1699970640},
        "name": "London"
    }"#;

    fn forecast_fixture(len: usize) -> String {
        let entries: Vec<String> = (0..len)
            .map(|i| {
                format!(
                    r#"{{"dt": {}, "main": {{"temp": {}.0, "temp_min": 10.0, "temp_max": 20.0}},
                        "weather": [{{"main": "{}", "description": "x"}}]}}"#,
                    1_700_000_000 + i * 10800,
                    i,
                    if i % 2 == 0 { "Clear" } else { "Rain" },
                )
            })
            .collect();
        format!(r#"{{"list": [{}]}}"#, entries.join(","))
    }

    #[test]
    fn test_geocoding_deserializes() {
        let entries: Vec<GeoEntry> = serde_json::from_str(GEO_FIXTURE).unwrap();
        let places: Vec<Place> = entries.into_iter().map(Place::from).collect();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "London");
        assert_eq!(places[0].country, "GB");
        assert_eq!(places[0].state, None);
        assert_eq!(places[1].state.as_deref(), Some("Ontario"));
        assert_eq!(places[1].list_row(), "London, Ontario (CA)");
    }

    #[test]
    fn test_current_deserializes() {
        let current: CurrentResponse = serde_json::from_str(CURRENT_FIXTURE).unwrap();

        assert_eq!(current.weather[0].main, "Clouds");
        assert_eq!(current.main.humidity, 68);
        assert_eq!(current.wind.speed, 4.1);
        assert_eq!(current.sys.sunrise, 1699937280);
    }

    #[test]
    fn test_forecast_deserializes() {
        let forecast: ForecastResponse =
            serde_json::from_str(&forecast_fixture(40)).unwrap();

        assert_eq!(forecast.list.len(), 40);
        assert_eq!(forecast.list[0].dt, 1_700_000_000);
        assert_eq!(forecast.list[1].weather[0].main, "Rain");
    }

    #[test]
    fn test_build_snapshot() {
        let current: CurrentResponse = serde_json::from_str(CURRENT_FIXTURE).unwrap();
        let forecast: ForecastResponse =
            serde_json::from_str(&forecast_fixture(40)).unwrap();

        let snapshot = build_snapshot("London, GB".into(), current, forecast).unwrap();

        assert_eq!(snapshot.display_name, "London, GB");
        assert_eq!(snapshot.current.condition, Condition::Clouds);
        assert_eq!(snapshot.current.description, "scattered clouds");
        assert_eq!(snapshot.forecast.len(), 40);
        assert_eq!(snapshot.forecast[0].condition, Condition::Clear);
        assert_eq!(snapshot.forecast[1].condition, Condition::Rain);
    }

    #[test]
    fn test_build_snapshot_rejects_missing_weather_tag() {
        let current: CurrentResponse = serde_json::from_str(
            r#"{"weather": [], "main": {"temp": 1.0, "feels_like": 1.0, "humidity": 50},
                "wind": {"speed": 1.0}, "sys": {"sunrise": 0, "sunset": 0}}"#,
        )
        .unwrap();
        let forecast: ForecastResponse =
            serde_json::from_str(&forecast_fixture(8)).unwrap();

        let result = build_snapshot("X".into(), current, forecast);
        assert!(matches!(result, Err(ApiError::Shape(_))));
    }

    #[test]
    fn test_build_snapshot_rejects_empty_forecast() {
        let current: CurrentResponse = serde_json::from_str(CURRENT_FIXTURE).unwrap();
        let forecast: ForecastResponse = serde_json::from_str(r#"{"list": []}"#).unwrap();

        let result = build_snapshot("X".into(), current, forecast);
        assert!(matches!(result, Err(ApiError::Shape(_))));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let result: Result<CurrentResponse, _> = serde_json::from_str(r#"{"weather": "no"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_builds() {
        let client = WeatherClient::new("test-key".into());
        assert!(client.is_ok());
    }
}
