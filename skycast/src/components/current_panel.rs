use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{clock, Component};
use crate::action::Action;
use crate::state::CurrentConditions;

/// Current conditions for the selected place: headline temperature plus
/// humidity, wind, feels-like and sun times.
pub struct CurrentPanel;

pub struct CurrentPanelProps<'a> {
    pub display_name: &'a str,
    pub current: &'a CurrentConditions,
}

impl CurrentPanel {
    pub const HEIGHT: u16 = 6;
}

impl Component<Action> for CurrentPanel {
    type Props<'a> = CurrentPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;

        let name_line = Line::from(vec![
            Span::styled("📍 ", Style::default()),
            Span::styled(
                props.display_name,
                Style::default().fg(Color::White).bold(),
            ),
        ])
        .centered();

        let temp_line = Line::from(vec![
            Span::styled(
                format!("{} ", current.condition.glyph()),
                Style::default().fg(current.condition.color()),
            ),
            Span::styled(
                format!("{:.0}°C", current.temp),
                Style::default().fg(temp_color(current.temp)).bold(),
            ),
        ])
        .centered();

        let description_line = Line::from(Span::styled(
            current.description.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered();

        let stats_line = Line::from(vec![
            Span::styled("humidity ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}%", current.humidity)),
            Span::styled("   wind ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1} m/s", current.wind_speed)),
            Span::styled("   feels ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.0}°C", current.feels_like)),
        ])
        .centered();

        let sun_line = Line::from(vec![
            Span::styled("sunrise ", Style::default().fg(Color::DarkGray)),
            Span::raw(clock(current.sunrise)),
            Span::styled("   sunset ", Style::default().fg(Color::DarkGray)),
            Span::raw(clock(current.sunset)),
        ])
        .centered();

        let text = vec![
            name_line,
            Line::raw(""),
            temp_line,
            description_line,
            stats_line,
            sun_line,
        ];
        frame.render_widget(Paragraph::new(text), area);
    }
}

/// Temperature-based headline color.
fn temp_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Condition;
    use skycast_core::testing::RenderHarness;

    #[test]
    fn test_render_shows_readings() {
        let mut render = RenderHarness::new(60, 8);
        let mut panel = CurrentPanel;

        let current = CurrentConditions {
            temp: 17.6,
            feels_like: 17.1,
            humidity: 68,
            wind_speed: 4.1,
            condition: Condition::Clouds,
            description: "scattered clouds".into(),
            sunrise: 1_699_937_280,
            sunset: 1_699_970_640,
        };

        let output = render.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                CurrentPanelProps {
                    display_name: "London, GB",
                    current: &current,
                },
            );
        });

        assert!(output.contains("London, GB"));
        assert!(output.contains("18°C"));
        assert!(output.contains("scattered clouds"));
        assert!(output.contains("68%"));
        assert!(output.contains("4.1 m/s"));
    }
}
