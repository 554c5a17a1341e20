use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{weekday, Component};
use crate::action::Action;
use crate::forecast::daily_view;
use crate::state::ForecastPoint;

/// Multi-day outlook: one representative cell per day.
pub struct DailyGrid;

pub struct DailyGridProps<'a> {
    pub forecast: &'a [ForecastPoint],
}

impl DailyGrid {
    pub const HEIGHT: u16 = 5;
}

impl Component<Action> for DailyGrid {
    type Props<'a> = DailyGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let days = daily_view(props.forecast);
        if days.is_empty() || area.height < 2 {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        let title = Line::from(Span::styled(
            "Forecast",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), rows[0]);

        let constraints = vec![Constraint::Ratio(1, days.len() as u32); days.len()];
        let cells = Layout::horizontal(constraints).split(rows[1]);

        for (point, cell) in days.iter().zip(cells.iter().copied()) {
            let text = vec![
                Line::from(Span::styled(
                    weekday(point.ts),
                    Style::default().fg(Color::White).bold(),
                ))
                .centered(),
                Line::from(Span::styled(
                    point.condition.glyph(),
                    Style::default().fg(point.condition.color()),
                ))
                .centered(),
                Line::from(Span::styled(
                    format!("{:.0}° / {:.0}°", point.temp_min, point.temp_max),
                    Style::default().fg(Color::Gray),
                ))
                .centered(),
                Line::from(Span::styled(
                    point.condition.label(),
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
            ];
            frame.render_widget(Paragraph::new(text), cell);
        }
    }
}
