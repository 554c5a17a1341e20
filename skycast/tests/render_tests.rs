//! Render snapshot tests for the dashboard and search overlay

use skycast::components::{
    Component, Dashboard, DashboardProps, SearchOverlay, SearchOverlayProps,
};
use skycast::forecast::Condition;
use skycast::state::{
    AppState, CurrentConditions, ForecastPoint, Phase, Place, WeatherSnapshot,
};
use skycast_core::testing::RenderHarness;

fn london() -> Place {
    Place {
        name: "London".into(),
        country: "GB".into(),
        state: None,
        lat: 51.5073,
        lon: -0.1277,
    }
}

fn snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        display_name: "London, GB".into(),
        current: CurrentConditions {
            temp: 17.6,
            feels_like: 17.1,
            humidity: 68,
            wind_speed: 4.1,
            condition: Condition::Clouds,
            description: "scattered clouds".into(),
            sunrise: 1_699_937_280,
            sunset: 1_699_970_640,
        },
        forecast: (0..40)
            .map(|i| ForecastPoint {
                ts: 1_700_000_000 + (i as i64) * 10800,
                temp: 10.0 + (i % 8) as f64,
                temp_min: 8.0,
                temp_max: 16.0,
                condition: if i % 2 == 0 {
                    Condition::Clear
                } else {
                    Condition::Rain
                },
            })
            .collect(),
    }
}

fn viewing_state() -> AppState {
    let mut state = AppState::new();
    state.snapshot = Some(snapshot());
    state.selected = Some(london());
    state.query = "London, GB".into();
    state.phase = Phase::Viewing;
    state
}

fn render_dashboard(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut dashboard = Dashboard;

    render.render_to_string_plain(|frame| {
        dashboard.render(
            frame,
            frame.area(),
            DashboardProps {
                state,
                is_focused: true,
            },
        );
    })
}

#[test]
fn test_render_initial_state() {
    let state = AppState::new();
    let output = render_dashboard(&state, 80, 24);

    assert!(
        output.contains("to search for a city"),
        "should prompt for a search"
    );
    assert!(output.contains("skycast"), "should show the title");
}

#[test]
fn test_render_loading_state() {
    let mut state = AppState::new();
    state.selected = Some(london());
    state.phase = Phase::Loading;

    let output = render_dashboard(&state, 80, 24);

    assert!(
        output.contains("Fetching weather"),
        "should show loading text"
    );
}

#[test]
fn test_render_viewing_state() {
    let state = viewing_state();
    let output = render_dashboard(&state, 100, 30);

    assert!(output.contains("London, GB"), "should show the place");
    assert!(output.contains("18°C"), "should show rounded temperature");
    assert!(output.contains("scattered clouds"), "should show description");
    assert!(output.contains("68%"), "should show humidity");
    assert!(output.contains("Next 24 hours"), "should show hourly strip");
    assert!(output.contains("Forecast"), "should show daily grid");
}

#[test]
fn test_render_loading_hides_previous_snapshot() {
    // A refresh in flight must not show stale readings alongside the
    // spinner
    let mut state = viewing_state();
    state.phase = Phase::Loading;

    let output = render_dashboard(&state, 100, 30);

    assert!(output.contains("Fetching weather"));
    assert!(!output.contains("scattered clouds"));
}

#[test]
fn test_render_help_bar_hints() {
    let state = AppState::new();
    let output = render_dashboard(&state, 80, 24);

    assert!(output.contains("search"), "should show search hint");
    assert!(output.contains("refresh"), "should show refresh hint");
    assert!(output.contains("quit"), "should show quit hint");
}

#[test]
fn test_render_search_overlay_over_dashboard() {
    let mut state = viewing_state();
    state.phase = Phase::SuggestionsVisible;
    state.query = "Lon".into();
    state.suggestions = vec![
        london(),
        Place {
            name: "London".into(),
            country: "CA".into(),
            state: Some("Ontario".into()),
            lat: 42.98,
            lon: -81.25,
        },
    ];

    let mut render = RenderHarness::new(100, 30);
    let mut dashboard = Dashboard;
    let mut overlay = SearchOverlay::new();

    let output = render.render_to_string_plain(|frame| {
        dashboard.render(
            frame,
            frame.area(),
            DashboardProps {
                state: &state,
                is_focused: false,
            },
        );
        overlay.render(
            frame,
            frame.area(),
            SearchOverlayProps {
                query: &state.query,
                suggestions: &state.suggestions,
                highlighted: 0,
                is_focused: true,
            },
        );
    });

    assert!(output.contains("London (GB)"), "should list the first match");
    assert!(
        output.contains("London, Ontario (CA)"),
        "should list the region-qualified match"
    );
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let state = viewing_state();
    let output = render_dashboard(&state, 30, 8);

    assert!(output.contains("skycast"));
}
