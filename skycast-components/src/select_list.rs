//! Scrollable selection list component

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use skycast_core::{Component, EventKind};

/// Props for SelectList component
pub struct SelectListProps<'a, A> {
    /// Items to display
    pub items: &'a [String],
    /// Currently selected index
    pub selected: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Whether to show border
    pub show_border: bool,
    /// Horizontal padding (left and right)
    pub padding_x: u16,
    /// Vertical padding (top and bottom)
    pub padding_y: u16,
    /// Substring to highlight within items (case-insensitive)
    pub highlight_query: Option<&'a str>,
    /// Callback to create action when selection changes
    pub on_select: fn(usize) -> A,
}

/// A scrollable selection list with keyboard navigation
///
/// Handles up/down (and j/k) for navigation; Enter re-emits the current
/// selection for confirmation flows. Renders with highlight on the
/// selected item and keeps it scrolled into view.
#[derive(Default)]
pub struct SelectList {
    /// Scroll offset for viewport
    scroll_offset: usize,
}

impl SelectList {
    /// Create a new SelectList
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the selected index is visible within the viewport
    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }

    /// Build a line for an item, highlighting the query match when present
    fn item_line<'a>(item: &'a str, highlight: Option<&str>) -> Line<'a> {
        if let Some(query) = highlight {
            if !query.is_empty() {
                let lower_item = item.to_lowercase();
                let lower_query = query.to_lowercase();
                if let Some(start) = lower_item.find(&lower_query) {
                    // Byte offsets from the lowercased string are only safe
                    // on the original when char boundaries line up
                    let end = start + lower_query.len();
                    if item.is_char_boundary(start) && item.is_char_boundary(end) {
                        return Line::from(vec![
                            Span::raw(&item[..start]),
                            Span::styled(
                                &item[start..end],
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(&item[end..]),
                        ]);
                    }
                }
            }
        }
        Line::raw(item)
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let len = props.items.len();

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    let new_idx = (props.selected + 1).min(len.saturating_sub(1));
                    if new_idx != props.selected {
                        Some((props.on_select)(new_idx))
                    } else {
                        None
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    let new_idx = props.selected.saturating_sub(1);
                    if new_idx != props.selected {
                        Some((props.on_select)(new_idx))
                    } else {
                        None
                    }
                }
                KeyCode::Home => {
                    if props.selected != 0 {
                        Some((props.on_select)(0))
                    } else {
                        None
                    }
                }
                KeyCode::End => {
                    let last = len.saturating_sub(1);
                    if props.selected != last {
                        Some((props.on_select)(last))
                    } else {
                        None
                    }
                }
                // Re-emit current selection for confirmation flows
                KeyCode::Enter => Some((props.on_select)(props.selected)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let content_area = Rect {
            x: area.x + props.padding_x,
            y: area.y + props.padding_y,
            width: area.width.saturating_sub(props.padding_x * 2),
            height: area.height.saturating_sub(props.padding_y * 2),
        };

        let border_lines = if props.show_border { 2 } else { 0 };
        let viewport_height = content_area.height.saturating_sub(border_lines) as usize;

        self.ensure_visible(props.selected, viewport_height);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .map(|item| ListItem::new(Self::item_line(item, props.highlight_query)))
            .collect();

        let mut list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        if props.show_border {
            list = list.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if props.is_focused {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    }),
            );
        }

        let mut state = ListState::default().with_selected(Some(props.selected));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, content_area, &mut state);
    }
}
