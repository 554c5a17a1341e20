//! Modal overlay helpers with background dimming
//!
//! Dims the background on each frame (keeping animations live) and renders
//! modal content on top.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget, Frame};

/// Configuration for modal appearance
pub struct ModalStyle {
    /// Dim factor for background (0.0 = no dim, 1.0 = black)
    pub dim_factor: f32,
    /// Background color for the modal area (None = transparent)
    pub bg_color: Option<Color>,
}

impl Default for ModalStyle {
    fn default() -> Self {
        Self {
            dim_factor: 0.5,
            bg_color: None,
        }
    }
}

impl ModalStyle {
    /// Create a style with a background color
    pub fn with_bg(bg_color: Color) -> Self {
        Self {
            bg_color: Some(bg_color),
            ..Default::default()
        }
    }
}

/// Darken every cell of the buffer by the given factor.
///
/// RGB colors are scaled toward black; palette colors collapse to dark
/// gray, which reads as "inactive" on every terminal theme.
pub fn dim_buffer(buf: &mut Buffer, factor: f32) {
    let scale = (1.0 - factor).clamp(0.0, 1.0);
    let area = buf.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.fg = dim_color(cell.fg, scale);
            if let Color::Rgb(r, g, b) = cell.bg {
                cell.bg = scale_rgb(r, g, b, scale);
            }
        }
    }
}

fn dim_color(color: Color, scale: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => scale_rgb(r, g, b, scale),
        Color::Reset | Color::Black => color,
        _ => Color::DarkGray,
    }
}

fn scale_rgb(r: u8, g: u8, b: u8, scale: f32) -> Color {
    Color::Rgb(
        (r as f32 * scale) as u8,
        (g as f32 * scale) as u8,
        (b as f32 * scale) as u8,
    )
}

/// Render a modal overlay with dimmed background
///
/// Call this AFTER rendering background content. It dims the current buffer
/// and fills the modal area with the background color.
pub fn render_modal(frame: &mut Frame, area: Rect, style: &ModalStyle) {
    dim_buffer(frame.buffer_mut(), style.dim_factor);

    if let Some(bg) = style.bg_color {
        frame.render_widget(BgFill(bg), area);
    }
}

/// Simple widget that fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_bg(self.0);
                buf[(x, y)].set_symbol(" ");
            }
        }
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
