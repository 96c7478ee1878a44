//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod notification_dialog;

pub use confirm_dialog::render_confirm_dialog;
pub use notification_dialog::render_notification_dialog;
