//! The city search overlay
//!
//! A modal with a text input on top of the suggestion list. Enter selects
//! the highlighted suggestion, Esc closes, up/down move the highlight, and
//! everything else edits the query.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};
use skycast_components::{
    centered_rect, render_modal, ModalStyle, SelectList, SelectListProps, TextInput,
    TextInputProps,
};
use skycast_core::EventKind;

use super::Component;
use crate::action::Action;
use crate::state::Place;

pub struct SearchOverlay {
    input: TextInput,
    list: SelectList,
    was_open: bool,
}

pub struct SearchOverlayProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [Place],
    pub highlighted: usize,
    pub is_focused: bool,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            was_open: false,
        }
    }
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track open/close transitions so cursor and scroll state reset on
    /// every fresh open.
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.reset();
        }
        self.was_open = is_open;
    }

    fn reset(&mut self) {
        self.input = TextInput::new();
        self.list = SelectList::new();
    }

    fn suggestion_rows(suggestions: &[Place]) -> Vec<String> {
        suggestions.iter().map(Place::list_row).collect()
    }

    fn input_props<'a>(query: &'a str, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: query,
            placeholder: "Search for a city...",
            is_focused,
            show_border: false,
            bg_color: Some(Color::Rgb(50, 50, 60)),
            padding_x: 1,
            padding_y: 1,
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchQueryChange,
        }
    }
}

impl Component<Action> for SearchOverlay {
    type Props<'a> = SearchOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchClose],
            // Enter only means something once suggestions are on screen
            KeyCode::Enter => {
                if !props.suggestions.is_empty() {
                    return vec![Action::SearchConfirm];
                }
                return Vec::new();
            }
            KeyCode::Down | KeyCode::Up => {
                if !props.suggestions.is_empty() {
                    let items = Self::suggestion_rows(props.suggestions);
                    let list_props = SelectListProps {
                        items: &items,
                        selected: props.highlighted,
                        is_focused: true,
                        show_border: false,
                        padding_x: 1,
                        padding_y: 1,
                        highlight_query: None,
                        on_select: Action::SearchHighlight,
                    };
                    return self
                        .list
                        .handle_event(event, list_props)
                        .into_iter()
                        .collect();
                }
                return Vec::new();
            }
            _ => {}
        }

        // All other keys edit the query
        self.input
            .handle_event(event, Self::input_props(props.query, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        let modal_area = centered_rect(60, 12, area);
        render_modal(
            frame,
            modal_area,
            &ModalStyle::with_bg(Color::Rgb(35, 35, 45)),
        );

        let chunks = Layout::vertical([
            Constraint::Length(3), // input
            Constraint::Min(1),    // suggestions
        ])
        .split(modal_area);

        self.input
            .render(frame, chunks[0], Self::input_props(props.query, props.is_focused));

        let items = Self::suggestion_rows(props.suggestions);
        let list_props = SelectListProps {
            items: &items,
            selected: props.highlighted,
            is_focused: props.is_focused,
            show_border: false,
            padding_x: 1,
            padding_y: 1,
            highlight_query: if props.query.is_empty() {
                None
            } else {
                Some(props.query)
            },
            on_select: Action::SearchHighlight,
        };
        self.list.render(frame, chunks[1], list_props);
    }
}
