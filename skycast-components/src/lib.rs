//! Reusable UI components for skycast
//!
//! Components implement the core `Component<A>` trait and emit actions via
//! callback constructors passed through props.
//!
//! - [`TextInput`] - single-line text input with cursor
//! - [`SelectList`] - scrollable selection list with keyboard navigation
//! - [`render_modal`] / [`centered_rect`] - overlay helpers

mod modal;
mod select_list;
mod text_input;

pub use modal::{centered_rect, dim_buffer, render_modal, ModalStyle};
pub use select_list::{SelectList, SelectListProps};
pub use text_input::{TextInput, TextInputProps};
