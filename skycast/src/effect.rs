//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled here by spawning keyed
//! tasks. Suggestion lookups share one task key and go through the debounce,
//! so a keystroke burst yields at most one request, for the final query.
//! Weather fetches share another key, so a re-fetch aborts the one in
//! flight.

use std::time::Duration;

use skycast_core::{EffectContext, TaskKey};
use tracing::warn;

use crate::action::Action;
use crate::api::WeatherClient;
use crate::state::Place;

/// Quiet period before a suggestion lookup is issued.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(500);

const SUGGEST_TASK: &str = "suggestions";
const WEATHER_TASK: &str = "weather";

/// Side effects that can be emitted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Schedule a debounced suggestion lookup for the query.
    ScheduleSuggestions { query: String, seq: u64 },
    /// Abort any pending or in-flight suggestion lookup.
    CancelSuggestions,
    /// Fetch current conditions + forecast for the place.
    FetchWeather { place: Place, seq: u64 },
}

/// Handle effects by spawning tasks on the runtime's task manager.
pub fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::ScheduleSuggestions { query, seq } => {
            let client = client.clone();
            ctx.tasks()
                .debounce(SUGGEST_TASK, SUGGEST_DEBOUNCE, async move {
                    match client.search_places(&query).await {
                        Ok(places) => Action::SuggestionsDidLoad { seq, places },
                        Err(e) => {
                            warn!(error = %e, query = %query, "suggestion lookup failed");
                            Action::SuggestionsDidError {
                                seq,
                                message: e.to_string(),
                            }
                        }
                    }
                });
        }
        Effect::CancelSuggestions => {
            ctx.tasks().cancel(&TaskKey::new(SUGGEST_TASK));
        }
        Effect::FetchWeather { place, seq } => {
            let client = client.clone();
            ctx.tasks().spawn(WEATHER_TASK, async move {
                match client.fetch_snapshot(&place).await {
                    Ok(snapshot) => Action::WeatherDidLoad { seq, snapshot },
                    Err(e) => {
                        warn!(error = %e, place = %place.label(), "weather fetch failed");
                        Action::WeatherDidError {
                            seq,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
