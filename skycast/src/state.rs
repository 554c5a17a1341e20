//! Application state - single source of truth
//!
//! Only the reducer mutates state; components receive `&AppState` through
//! props. The UI phase is an explicit state machine so transitions are
//! testable without a terminal.

use crate::forecast::Condition;

/// Queries shorter than this never trigger a suggestion lookup.
pub const MIN_QUERY_LEN: usize = 3;

/// Tick interval for the loading spinner animation.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// UI phase state machine.
///
/// There is no distinct error state: a failed fetch returns the machine to
/// `Viewing` (when a snapshot exists) or `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected, search closed.
    #[default]
    Idle,
    /// Search overlay open, typing.
    Searching,
    /// Search overlay open with a non-empty suggestion list.
    SuggestionsVisible,
    /// Weather fetch in flight.
    Loading,
    /// A snapshot is on screen.
    Viewing,
}

/// A geocoding match the user can select.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: String,
    pub country: String,
    /// Administrative region, when the geocoder reports one.
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    /// Display label once selected, e.g. "London, GB".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Suggestion list row, e.g. "London, Greater London (GB)".
    pub fn list_row(&self) -> String {
        match &self.state {
            Some(region) => format!("{}, {} ({})", self.name, region, self.country),
            None => format!("{} ({})", self.name, self.country),
        }
    }
}

/// Current conditions for the selected place.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    pub condition: Condition,
    pub description: String,
    /// Unix timestamps, seconds.
    pub sunrise: i64,
    pub sunset: i64,
}

/// One entry of the forecast timeline, 3 hours apart.
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastPoint {
    /// Unix timestamp, seconds.
    pub ts: i64,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition: Condition,
}

/// The assembled view model: current conditions plus the forecast timeline.
///
/// Built only after both underlying requests succeed - never partially
/// populated.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub display_name: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastPoint>,
}

/// Application state - everything the UI needs to render.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// UI phase state machine.
    pub phase: Phase,

    /// Raw search text, mutated on every keystroke.
    pub query: String,

    /// Suggestions from the last successful lookup; replaced wholesale.
    pub suggestions: Vec<Place>,

    /// Highlighted row in the suggestion list.
    pub highlighted: usize,

    /// The place whose weather is shown or being fetched.
    pub selected: Option<Place>,

    /// Last successfully assembled view model.
    pub snapshot: Option<WeatherSnapshot>,

    /// Generation of the most recently issued suggestion lookup.
    pub suggest_seq: u64,

    /// Generation of the most recently issued weather fetch.
    pub weather_seq: u64,

    /// Animation frame counter for the loading spinner.
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out with a pre-resolved place (the `--city` flag); the first
    /// refresh action kicks off its fetch.
    pub fn with_place(place: Place) -> Self {
        Self {
            query: place.label(),
            selected: Some(place),
            ..Self::default()
        }
    }

    /// A weather fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The search overlay is open.
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, Phase::Searching | Phase::SuggestionsVisible)
    }
}
