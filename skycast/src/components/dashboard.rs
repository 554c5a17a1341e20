//! The main dashboard frame
//!
//! Owns the browse-mode keybindings and composes the current-conditions
//! panel with the two forecast views. The search overlay renders on top
//! of it when the search phase is active.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skycast_core::EventKind;

use super::{
    Component, CurrentPanel, CurrentPanelProps, DailyGrid, DailyGridProps, HelpBar, HelpBarProps,
    HourlyStrip, HourlyStripProps,
};
use crate::action::Action;
use crate::state::AppState;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct Dashboard;

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('s') | KeyCode::Char('/') => vec![Action::SearchOpen],
                KeyCode::Char('r') | KeyCode::F(5) => vec![Action::WeatherFetch],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;

        let loading_indicator = if state.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ skycast{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // body
            Constraint::Length(1), // help bar
        ])
        .split(inner);

        self.render_body(frame, chunks[0], state);

        let mut help = HelpBar;
        help.render(
            frame,
            chunks[1],
            HelpBarProps {
                searching: state.is_searching(),
            },
        );
    }
}

impl Dashboard {
    fn render_body(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" Fetching weather{:<3}", dots),
                    Style::default().fg(Color::Gray),
                ),
            ])
            .centered();

            let chunks = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .split(area);
            frame.render_widget(Paragraph::new(line), chunks[0]);
            return;
        }

        match &state.snapshot {
            Some(snapshot) => {
                let chunks = Layout::vertical([
                    Constraint::Length(CurrentPanel::HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(HourlyStrip::HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(DailyGrid::HEIGHT),
                ])
                .flex(Flex::Center)
                .split(area);

                let mut current = CurrentPanel;
                current.render(
                    frame,
                    chunks[0],
                    CurrentPanelProps {
                        display_name: &snapshot.display_name,
                        current: &snapshot.current,
                    },
                );

                let mut hourly = HourlyStrip;
                hourly.render(
                    frame,
                    chunks[2],
                    HourlyStripProps {
                        forecast: &snapshot.forecast,
                    },
                );

                let mut daily = DailyGrid;
                daily.render(
                    frame,
                    chunks[4],
                    DailyGridProps {
                        forecast: &snapshot.forecast,
                    },
                );
            }
            None => {
                let line = Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled("s", Style::default().fg(Color::Cyan).bold()),
                    Span::styled(
                        " to search for a city",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
                .centered();

                let chunks = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .split(area);
                frame.render_widget(Paragraph::new(line), chunks[0]);
            }
        }
    }
}
