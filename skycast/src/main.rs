//! skycast - terminal weather dashboard
//!
//! Keyboard flow: `s` opens the search overlay, typing triggers debounced
//! city suggestions, Enter selects one and fetches its weather, `r`
//! re-fetches, `q` quits. Weather auto-refreshes on an interval while a
//! place is selected.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use skycast::action::Action;
use skycast::api::WeatherClient;
use skycast::components::{Component, Dashboard, DashboardProps, SearchOverlay, SearchOverlayProps};
use skycast::config::{init_logging, resolve_api_key, Args, API_KEY_ENV};
use skycast::effect::handle_effect;
use skycast::reducer::reducer;
use skycast::state::{AppState, Place, LOADING_ANIM_TICK_MS};
use skycast_core::{EffectRuntime, EventKind, EventOutcome, Rect};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let api_key = match resolve_api_key(args.api_key.clone(), std::env::var(API_KEY_ENV).ok()) {
        Ok(key) => key,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let client = match WeatherClient::new(api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve --city before entering TUI mode
    let initial = match &args.city {
        Some(city) => match client.search_places(city).await {
            Ok(places) => {
                let Some(place) = places.into_iter().next() else {
                    eprintln!(
                        "Error: city '{}' not found. Please check the spelling.",
                        city
                    );
                    std::process::exit(1);
                };
                Some(place)
            }
            Err(e) => {
                eprintln!("Error: could not reach the geocoding service.");
                eprintln!("Details: {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, initial, args.refresh_interval).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct Ui {
    dashboard: Dashboard,
    search: SearchOverlay,
}

impl Ui {
    fn new() -> Self {
        Self {
            dashboard: Dashboard,
            search: SearchOverlay::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.dashboard.render(
            frame,
            area,
            DashboardProps {
                state,
                is_focused: !state.is_searching(),
            },
        );

        self.search.set_open(state.is_searching());
        if state.is_searching() {
            self.search.render(
                frame,
                area,
                SearchOverlayProps {
                    query: &state.query,
                    suggestions: &state.suggestions,
                    highlighted: state.highlighted,
                    is_focused: true,
                },
            );
        }
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(_, _) = event {
            return EventOutcome::ignored().with_render();
        }

        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return EventOutcome::action(Action::Quit);
            }
        }

        if state.is_searching() {
            let props = SearchOverlayProps {
                query: &state.query,
                suggestions: &state.suggestions,
                highlighted: state.highlighted,
                is_focused: true,
            };
            return EventOutcome::from_actions(self.search.handle_event(event, props));
        }

        let props = DashboardProps {
            state,
            is_focused: true,
        };
        EventOutcome::from_actions(self.dashboard.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: WeatherClient,
    initial: Option<Place>,
    refresh_interval: u64,
) -> io::Result<()> {
    let state = match initial {
        Some(place) => AppState::with_place(place),
        None => AppState::new(),
    };

    let mut runtime = EffectRuntime::new(state, reducer);

    // Tick timer for the loading animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    // Auto-refresh timer; a refresh with nothing selected is a no-op
    if refresh_interval > 0 {
        runtime
            .subscriptions()
            .interval("refresh", Duration::from_secs(refresh_interval), || {
                Action::WeatherFetch
            });
    }

    // Fetch on start when --city preselected a place
    runtime.enqueue(Action::WeatherFetch);

    let ui = RefCell::new(Ui::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut().render(frame, area, state);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}
