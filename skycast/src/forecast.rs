//! Forecast bucketing and condition categories
//!
//! The forecast timeline arrives as a flat sequence of points spaced three
//! hours apart, covering up to five days. Two derived views feed the UI:
//! the hourly strip (first eight points, the next 24 hours) and the daily
//! grid (every eighth point, one representative per day, at most seven).

use ratatui::style::Color;

use crate::state::ForecastPoint;

/// Points shown in the hourly strip (8 x 3h = 24h).
pub const HOURLY_POINTS: usize = 8;
/// Stride between daily representatives (8 points per day at 3h spacing).
pub const DAILY_STRIDE: usize = 8;
/// Maximum entries in the daily grid.
pub const DAILY_MAX: usize = 7;

/// Weather condition category, mapped from the raw condition string.
///
/// Anything outside the known set (mist, haze, squalls, ...) falls back to
/// [`Condition::Other`] and renders with the wind glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Other,
}

impl Condition {
    /// Map the `weather[0].main` string of an API response to a category.
    pub fn from_api_main(main: &str) -> Self {
        match main {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            _ => Condition::Other,
        }
    }

    /// Glyph used in forecast cells and the current-conditions panel.
    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Clear => "☀",
            Condition::Clouds => "☁",
            Condition::Rain => "🌧",
            Condition::Thunderstorm => "⛈",
            Condition::Snow => "❄",
            Condition::Other => "🌬",
        }
    }

    /// Accent color for the glyph.
    pub fn color(&self) -> Color {
        match self {
            Condition::Clear => Color::Yellow,
            Condition::Clouds => Color::Gray,
            Condition::Rain => Color::Blue,
            Condition::Thunderstorm => Color::LightYellow,
            Condition::Snow => Color::LightBlue,
            Condition::Other => Color::DarkGray,
        }
    }

    /// Short label for forecast cells.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Thunderstorm => "Storm",
            Condition::Snow => "Snow",
            Condition::Other => "Wind",
        }
    }
}

/// The next 24 hours: the first eight points, chronological, unmodified.
pub fn hourly_view(points: &[ForecastPoint]) -> &[ForecastPoint] {
    &points[..points.len().min(HOURLY_POINTS)]
}

/// One representative point per day: indices 0, 8, 16, ... capped at seven
/// entries.
///
/// This samples rather than aggregates - it does not compute a true daily
/// min/max across all points of a day.
pub fn daily_view(points: &[ForecastPoint]) -> Vec<&ForecastPoint> {
    points.iter().step_by(DAILY_STRIDE).take(DAILY_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(len: usize) -> Vec<ForecastPoint> {
        (0..len)
            .map(|i| ForecastPoint {
                ts: 1_700_000_000 + (i as i64) * 3 * 3600,
                temp: i as f64,
                temp_min: i as f64 - 1.0,
                temp_max: i as f64 + 1.0,
                condition: Condition::Clear,
            })
            .collect()
    }

    #[test]
    fn test_hourly_takes_first_eight() {
        let points = timeline(40);
        let hourly = hourly_view(&points);

        assert_eq!(hourly.len(), 8);
        for (i, point) in hourly.iter().enumerate() {
            assert_eq!(point.temp, i as f64);
        }
    }

    #[test]
    fn test_hourly_short_timeline() {
        let points = timeline(5);
        assert_eq!(hourly_view(&points).len(), 5);

        let empty: Vec<ForecastPoint> = vec![];
        assert!(hourly_view(&empty).is_empty());
    }

    #[test]
    fn test_daily_five_day_timeline() {
        // 5 days x 8 points/day
        let points = timeline(40);
        let daily = daily_view(&points);

        assert_eq!(daily.len(), 5);
        let temps: Vec<f64> = daily.iter().map(|p| p.temp).collect();
        assert_eq!(temps, vec![0.0, 8.0, 16.0, 24.0, 32.0]);
    }

    #[test]
    fn test_daily_truncates_to_seven() {
        // 7+ days of points: entries past index 48 are dropped
        let points = timeline(60);
        let daily = daily_view(&points);

        assert_eq!(daily.len(), 7);
        let temps: Vec<f64> = daily.iter().map(|p| p.temp).collect();
        assert_eq!(temps, vec![0.0, 8.0, 16.0, 24.0, 32.0, 40.0, 48.0]);
    }

    #[test]
    fn test_daily_partial_day() {
        let points = timeline(3);
        let daily = daily_view(&points);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].temp, 0.0);
    }

    #[test]
    fn test_condition_mapping() {
        assert_eq!(Condition::from_api_main("Clear"), Condition::Clear);
        assert_eq!(Condition::from_api_main("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from_api_main("Rain"), Condition::Rain);
        assert_eq!(
            Condition::from_api_main("Thunderstorm"),
            Condition::Thunderstorm
        );
        assert_eq!(Condition::from_api_main("Snow"), Condition::Snow);
    }

    #[test]
    fn test_condition_unknown_maps_to_other() {
        assert_eq!(Condition::from_api_main("Mist"), Condition::Other);
        assert_eq!(Condition::from_api_main("Haze"), Condition::Other);
        assert_eq!(Condition::from_api_main("Drizzle"), Condition::Other);
        assert_eq!(Condition::from_api_main(""), Condition::Other);
    }
}
