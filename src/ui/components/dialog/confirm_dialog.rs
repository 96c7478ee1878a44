//! Confirmation dialog for deleting an entry

use super::base::{hint_key, render_dialog, DialogConfig};
use crate::state::EntryRow;
use ratatui::{style::Color, text::Span, Frame};

const CONFIRM_TITLE: &str = "Удаление";

/// Render the delete confirmation overlay. While the request is in flight
/// the hint is replaced by a progress note.
pub fn render_confirm_dialog(frame: &mut Frame, row: Option<&EntryRow>, in_flight: bool) {
    let message = match row {
        Some(row) => format!("Удалить пост «{}»?", row.headline),
        None => "Удалить пост?".to_string(),
    };
    let hint = if in_flight {
        vec![Span::raw("Удаление...")]
    } else {
        vec![
            hint_key("y"),
            Span::raw(": удалить  "),
            hint_key("n"),
            Span::raw(": отмена"),
        ]
    };

    render_dialog(
        frame,
        DialogConfig {
            title: CONFIRM_TITLE,
            title_color: Color::Red,
            border_color: Color::Red,
            message: &message,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
