//! UI module for rendering the TUI

mod components;
mod entries;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use crate::workflow::DeletionPhase;
use components::{render_confirm_dialog, render_notification_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view() {
        View::Entries => entries::draw(frame, main_area, app),
        View::PostForm => forms::draw_post_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    match app.deletion.phase() {
        DeletionPhase::Idle => {}
        DeletionPhase::Confirming(entry_id) => {
            render_confirm_dialog(frame, app.state.tables.find_entry(entry_id), false)
        }
        DeletionPhase::Deleting(entry_id) => {
            render_confirm_dialog(frame, app.state.tables.find_entry(entry_id), true)
        }
    }
    if app.state.notification.is_visible() {
        render_notification_dialog(frame, &app.state.notification);
    }
}
