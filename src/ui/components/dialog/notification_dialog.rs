//! Notification dialog component

use super::base::{hint_key, render_dialog, DialogConfig};
use crate::state::{NotificationModal, ERROR_TITLE};
use ratatui::{style::Color, text::Span, Frame};

/// Render the success or error notification overlay
pub fn render_notification_dialog(frame: &mut Frame, modal: &NotificationModal) {
    let color = if modal.title == ERROR_TITLE {
        Color::Red
    } else {
        Color::Green
    };
    let hint = vec![
        hint_key("Enter"),
        Span::raw(" / "),
        hint_key("Esc"),
        Span::raw(": закрыть"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &modal.title,
            title_color: color,
            border_color: color,
            message: &modal.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
