//! skycast - a terminal weather dashboard
//!
//! Search for a city, pick a match from the autocomplete list, and the
//! dashboard shows current conditions plus hourly and multi-day outlooks
//! from OpenWeatherMap.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod forecast;
pub mod reducer;
pub mod state;
