//! Reducer - pure function: (state, action) -> (changed, effects)
//!
//! All state transitions happen here, including the generation checks that
//! drop stale async results and the atomic publish of a new weather
//! snapshot. No side effects - network work is declared through
//! [`Effect`] values and run by the effect handler.

use skycast_core::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Phase, Place, MIN_QUERY_LEN};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchOpen => {
            if state.is_searching() {
                return DispatchResult::unchanged();
            }
            state.phase = Phase::Searching;
            state.query.clear();
            state.suggestions.clear();
            state.highlighted = 0;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            if !state.is_searching() {
                return DispatchResult::unchanged();
            }
            leave_search(state);
            state.phase = if state.snapshot.is_some() {
                Phase::Viewing
            } else {
                Phase::Idle
            };
            DispatchResult::changed_with(Effect::CancelSuggestions)
        }

        Action::SearchQueryChange(query) => {
            if !state.is_searching() {
                return DispatchResult::unchanged();
            }
            state.query = query;
            state.phase = Phase::Searching;

            let trimmed = state.query.trim();
            if trimmed.chars().count() >= MIN_QUERY_LEN {
                state.suggest_seq += 1;
                DispatchResult::changed_with(Effect::ScheduleSuggestions {
                    query: trimmed.to_string(),
                    seq: state.suggest_seq,
                })
            } else {
                // Below the threshold the list clears synchronously, and any
                // pending debounced lookup is cancelled
                state.suggestions.clear();
                state.highlighted = 0;
                DispatchResult::changed_with(Effect::CancelSuggestions)
            }
        }

        Action::SearchHighlight(index) => {
            let clamped = index.min(state.suggestions.len().saturating_sub(1));
            if !state.is_searching() || clamped == state.highlighted {
                return DispatchResult::unchanged();
            }
            state.highlighted = clamped;
            DispatchResult::changed()
        }

        Action::SearchConfirm => {
            if !state.is_searching() || state.suggestions.is_empty() {
                return DispatchResult::unchanged();
            }
            let index = state.highlighted.min(state.suggestions.len() - 1);
            let place = state.suggestions[index].clone();
            select_place(state, place)
        }

        Action::SuggestionsDidLoad { seq, places } => {
            // Only the latest issued lookup may replace the list
            if seq != state.suggest_seq || !state.is_searching() {
                return DispatchResult::unchanged();
            }
            state.suggestions = places;
            state.highlighted = 0;
            state.phase = if state.suggestions.is_empty() {
                Phase::Searching
            } else {
                Phase::SuggestionsVisible
            };
            DispatchResult::changed()
        }

        Action::SuggestionsDidError { .. } => {
            // Already logged by the task; the previous list stays visible
            DispatchResult::unchanged()
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            if state.is_searching() {
                return DispatchResult::unchanged();
            }
            match state.selected.clone() {
                Some(place) => select_place(state, place),
                None => DispatchResult::unchanged(),
            }
        }

        Action::WeatherDidLoad { seq, snapshot } => {
            if seq != state.weather_seq {
                return DispatchResult::unchanged();
            }
            state.snapshot = Some(snapshot);
            if !state.is_searching() {
                state.phase = Phase::Viewing;
            }
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, .. } => {
            if seq != state.weather_seq {
                return DispatchResult::unchanged();
            }
            // The snapshot is left untouched: the previous view (or the
            // idle hint) remains
            if !state.is_searching() {
                state.phase = if state.snapshot.is_some() {
                    Phase::Viewing
                } else {
                    Phase::Idle
                };
            }
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled in the main loop, not here
            DispatchResult::unchanged()
        }
    }
}

/// Shared transition into `Loading` for a place: selection and refresh.
fn select_place(state: &mut AppState, place: Place) -> DispatchResult<Effect> {
    state.query = place.label();
    state.suggestions.clear();
    state.highlighted = 0;
    state.selected = Some(place.clone());
    state.phase = Phase::Loading;
    state.weather_seq += 1;
    DispatchResult::changed_with_many(vec![
        Effect::CancelSuggestions,
        Effect::FetchWeather {
            place,
            seq: state.weather_seq,
        },
    ])
}

fn leave_search(state: &mut AppState) {
    state.suggestions.clear();
    state.highlighted = 0;
    state.query = state
        .selected
        .as_ref()
        .map(Place::label)
        .unwrap_or_default();
}
