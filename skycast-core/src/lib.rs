//! Core runtime for skycast
//!
//! A small Redux/Elm-inspired dispatch layer for terminal UIs: actions
//! describe state changes, a pure reducer applies them and declares side
//! effects, and async work runs in keyed, cancellable tasks that feed
//! results back through the action channel.
//!
//! # Core Concepts
//!
//! - **Action**: events that describe state changes
//! - **EffectStore**: centralized state container; the reducer returns
//!   [`DispatchResult`] (changed flag + effects)
//! - **Component**: pure UI elements that render based on props
//! - **TaskManager**: async tasks with same-key cancellation and debounce
//! - **Subscriptions**: keyed interval timers
//! - **EffectRuntime**: the event/action/render loop
//!
//! # Async pattern
//!
//! Applications use two-phase actions: an intent (`WeatherFetch`) makes the
//! reducer emit an effect, the effect handler spawns a task, and the task
//! resolves to a result action (`WeatherDidLoad` / `WeatherDidError`) that
//! is sent back through the channel and reduced like any other action.

pub mod action;
pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
pub use store::{DispatchResult, EffectReducer, EffectStore};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};
