use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps {
    /// The search overlay is open.
    pub searching: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints: &[(&str, &str)] = if props.searching {
            &[("esc", " close  "), ("↑↓", " navigate  "), ("enter", " select ")]
        } else {
            &[("s", " search  "), ("r", " refresh  "), ("q", " quit ")]
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(*label, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
