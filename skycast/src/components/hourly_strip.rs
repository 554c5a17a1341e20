use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{hour, Component};
use crate::action::Action;
use crate::forecast::hourly_view;
use crate::state::ForecastPoint;

/// The next 24 hours: one cell per 3-hour forecast point.
pub struct HourlyStrip;

pub struct HourlyStripProps<'a> {
    pub forecast: &'a [ForecastPoint],
}

impl HourlyStrip {
    pub const HEIGHT: u16 = 5;
}

impl Component<Action> for HourlyStrip {
    type Props<'a> = HourlyStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let points = hourly_view(props.forecast);
        if points.is_empty() || area.height < 2 {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        let title = Line::from(Span::styled(
            "Next 24 hours",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), rows[0]);

        let constraints = vec![Constraint::Ratio(1, points.len() as u32); points.len()];
        let cells = Layout::horizontal(constraints).split(rows[1]);

        for (point, cell) in points.iter().zip(cells.iter().copied()) {
            let text = vec![
                Line::from(Span::styled(
                    hour(point.ts),
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
                Line::from(Span::styled(
                    point.condition.glyph(),
                    Style::default().fg(point.condition.color()),
                ))
                .centered(),
                Line::from(Span::styled(
                    format!("{:.0}°", point.temp),
                    Style::default().fg(Color::White).bold(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Condition;
    use skycast_core::testing::RenderHarness;

    fn timeline(len: usize) -> Vec<ForecastPoint> {
        (0..len)
            .map(|i| ForecastPoint {
                ts: 1_700_000_000 + (i as i64) * 10800,
                temp: 10.0 + i as f64,
                temp_min: 8.0,
                temp_max: 14.0,
                condition: Condition::Clear,
            })
            .collect()
    }

    #[test]
    fn test_renders_first_eight_points() {
        let mut render = RenderHarness::new(96, 6);
        let mut strip = HourlyStrip;
        let points = timeline(40);

        let output = render.render_to_string_plain(|frame| {
            strip.render(frame, frame.area(), HourlyStripProps { forecast: &points });
        });

        assert!(output.contains("Next 24 hours"));
        // First eight temperatures, nothing past index 7
        assert!(output.contains("10°"));
        assert!(output.contains("17°"));
        assert!(!output.contains("18°"));
    }

    #[test]
    fn test_empty_forecast_renders_nothing() {
        let mut render = RenderHarness::new(60, 6);
        let mut strip = HourlyStrip;

        let output = render.render_to_string_plain(|frame| {
            strip.render(frame, frame.area(), HourlyStripProps { forecast: &[] });
        });

        assert!(!output.contains("Next 24 hours"));
    }
}
