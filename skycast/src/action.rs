//! Application actions
//!
//! Two-phase convention: intent actions trigger async work through effects,
//! `Did*` actions carry the outcome back. Result actions embed the request
//! generation they were issued under; the reducer drops results whose
//! generation is no longer current.

use skycast_core::Action as ActionTrait;

use crate::state::{Place, WeatherSnapshot};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search =====
    /// Open the search overlay.
    SearchOpen,

    /// Close the overlay without selecting.
    SearchClose,

    /// The search text changed (every keystroke).
    SearchQueryChange(String),

    /// Move the highlight in the suggestion list.
    SearchHighlight(usize),

    /// Select the highlighted suggestion.
    SearchConfirm,

    /// Result: suggestion lookup succeeded.
    SuggestionsDidLoad { seq: u64, places: Vec<Place> },

    /// Result: suggestion lookup failed.
    SuggestionsDidError { seq: u64, message: String },

    // ===== Weather =====
    /// Re-fetch weather for the selected place (keybinding, auto-refresh,
    /// startup).
    WeatherFetch,

    /// Result: both weather requests succeeded.
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Result: the weather fetch failed.
    WeatherDidError { seq: u64, message: String },

    // ===== Global =====
    /// Periodic tick for the loading animation.
    Tick,

    /// Exit the application.
    Quit,
}

impl ActionTrait for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SearchOpen => "SearchOpen",
            Action::SearchClose => "SearchClose",
            Action::SearchQueryChange(_) => "SearchQueryChange",
            Action::SearchHighlight(_) => "SearchHighlight",
            Action::SearchConfirm => "SearchConfirm",
            Action::SuggestionsDidLoad { .. } => "SuggestionsDidLoad",
            Action::SuggestionsDidError { .. } => "SuggestionsDidError",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
