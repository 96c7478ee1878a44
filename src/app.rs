//! Application state and core logic

use crate::api::{ApiError, EntryApi, EntryClient, SubmitTicket};
use crate::config::AdminConfig;
use crate::platform;
use crate::state::{AppState, EntryDetail, EntryId, FormFocus, PageSnapshot, SubmitButton, View};
use crate::workflow::{
    deletion, edit_loader, image_preview, DeletionWorkflow, EditLoader, SubmissionWorkflow,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion of background work, delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    Submitted {
        ticket: SubmitTicket,
        result: Result<serde_json::Value, ApiError>,
    },
    EntryLoaded {
        entry_id: EntryId,
        detail: Option<EntryDetail>,
    },
    Deleted {
        entry_id: EntryId,
        result: Result<(), ApiError>,
    },
    PreviewLoaded {
        path: PathBuf,
        data_url: Option<String>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub submission: SubmissionWorkflow,
    pub deletion: DeletionWorkflow,
    edits: EditLoader,
    api: Arc<dyn EntryApi>,
    /// Cookie string the delete token is read from
    cookies: String,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app from configuration
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let snapshot = match &config.page_file {
            Some(path) => PageSnapshot::load(path)?,
            None => {
                tracing::warn!("No page snapshot configured, starting with an empty page");
                PageSnapshot::default()
            }
        };
        let state = AppState::from_snapshot(&snapshot, config.cookies());
        let client = EntryClient::new(
            config.server_url(),
            config.cookies.clone().filter(|c| !c.is_empty()),
        )?;
        tracing::info!("Using server {}", config.server_url());
        Ok(Self::with_api(state, Arc::new(client), config.cookies()))
    }

    /// Create the app around an existing state and endpoint
    pub fn with_api(state: AppState, api: Arc<dyn EntryApi>, cookies: &str) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            submission: SubmissionWorkflow::default(),
            deletion: DeletionWorkflow::default(),
            edits: EditLoader::default(),
            api,
            cookies: cookies.to_string(),
            events_tx,
            events_rx,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.notification.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notification.dismiss();
            }
            return;
        }

        if self.deletion.is_confirming() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => self.deletion.cancel(),
                _ => {}
            }
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view() {
            View::Entries => self.handle_entries_key(key),
            View::PostForm => self.handle_form_key(key),
        }
    }

    /// Handle keys in the entries list
    fn handle_entries_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.tables.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.tables.select_prev(),
            KeyCode::Esc => self.edits.cancel(),
            KeyCode::Char('n') => {
                self.edits.cancel();
                self.state.clear_author_search();
                self.state.form.open_for_create();
            }
            KeyCode::Char('e') => {
                if let Some(entry_id) = self.selected_entry_id() {
                    self.start_edit(entry_id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(entry_id) = self.selected_entry_id() {
                    self.deletion.request(entry_id);
                }
            }
            KeyCode::Char('y') => self.copy_selected_headline(),
            _ => {}
        }
    }

    fn selected_entry_id(&self) -> Option<EntryId> {
        self.state.tables.selected_entry().map(|row| row.entry_id)
    }

    fn copy_selected_headline(&mut self) {
        let Some(row) = self.state.tables.selected_entry() else {
            return;
        };
        match platform::copy_to_clipboard(&row.headline) {
            Ok(()) => self.state.status_message = Some(platform::COPIED_MESSAGE.to_string()),
            Err(err) => tracing::warn!("Failed to copy headline: {err}"),
        }
    }

    /// Handle keys in the post form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => {
                form.hide();
                self.edits.cancel();
                return;
            }
            KeyCode::Tab => {
                form.next_focus();
                return;
            }
            KeyCode::BackTab => {
                form.prev_focus();
                return;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(button) = form.visible_buttons().first().copied() {
                    self.submit(button);
                }
                return;
            }
            _ => {}
        }

        let focus = form.focus;
        match focus {
            FormFocus::Blog => match key.code {
                KeyCode::Left => form.blog.select_prev(),
                KeyCode::Right => form.blog.select_next(),
                _ => {}
            },
            FormFocus::Authors | FormFocus::Tags => {
                if let Some(select) = form.active_select_mut() {
                    match key.code {
                        KeyCode::Up => select.cursor_prev(),
                        KeyCode::Down => select.cursor_next(),
                        KeyCode::Char(' ') => select.toggle_at_cursor(),
                        _ => {}
                    }
                }
            }
            FormFocus::PublishMode => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let value = form.publish_mode().toggle().value();
                    form.on_publish_mode_change(value);
                }
                KeyCode::Char(c) => form.on_publish_mode_change(&c.to_string()),
                _ => {}
            },
            FormFocus::Buttons => match key.code {
                KeyCode::Left => form.prev_button(),
                KeyCode::Right => form.next_button(),
                KeyCode::Enter => {
                    if let Some(button) = form.current_button() {
                        self.submit(button);
                    }
                }
                _ => {}
            },
            FormFocus::Image if key.code == KeyCode::Enter => self.start_preview(),
            _ => self.edit_text_field(key),
        }
    }

    fn edit_text_field(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let Some(field) = form.active_text_field_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => field.push_char(c),
            KeyCode::Enter if field.is_multiline() => field.push_char('\n'),
            KeyCode::Backspace => field.pop_char(),
            _ => return,
        }

        if form.focus == FormFocus::AuthorSearch {
            let term = form.author_search.as_text().to_string();
            self.state.author_filter.apply(&term, &mut form.authors);
        }
    }

    /// Press a submit button and send the form in the background
    pub fn submit(&mut self, button: SubmitButton) {
        if !self.state.form.press(button) {
            tracing::debug!("Submit button {button:?} is not available");
            return;
        }
        let Some(request) = self.submission.begin(&mut self.state.form) else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let ticket = request.ticket();
            let result = api.submit_entry(request).await;
            let _ = tx.send(AppEvent::Submitted { ticket, result });
        });
    }

    /// Fetch an entry in the background and open it in the form
    pub fn start_edit(&mut self, entry_id: EntryId) {
        self.edits.request(entry_id);
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let detail = edit_loader::fetch_for_edit(api.as_ref(), entry_id).await;
            let _ = tx.send(AppEvent::EntryLoaded { entry_id, detail });
        });
    }

    fn confirm_delete(&mut self) {
        let Some(entry_id) = self.deletion.confirm() else {
            return;
        };
        let token = deletion::csrf_token(&self.cookies);
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.delete_entry(entry_id, token).await;
            let _ = tx.send(AppEvent::Deleted { entry_id, result });
        });
    }

    /// Read the selected image file in the background
    fn start_preview(&mut self) {
        let Some(path) = image_preview::selected_file(&self.state.form).map(PathBuf::from) else {
            return;
        };
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let data_url = image_preview::read_preview(&path).await;
            let _ = tx.send(AppEvent::PreviewLoaded { path, data_url });
        });
    }

    /// Apply a finished background task
    pub fn handle_event(&mut self, event: AppEvent) {
        let state = &mut self.state;
        match event {
            AppEvent::Submitted { ticket, result } => {
                self.submission
                    .complete(&ticket, result, &mut state.form, &mut state.notification);
            }
            AppEvent::EntryLoaded { entry_id, detail } => {
                if !self.edits.finish(entry_id) {
                    return;
                }
                if let Some(detail) = detail {
                    state.clear_author_search();
                    edit_loader::fill_update_form(&mut state.form, &detail);
                }
            }
            AppEvent::Deleted { entry_id, result } => {
                self.deletion.complete(entry_id, result, &mut state.tables);
            }
            AppEvent::PreviewLoaded { path, data_url } => {
                if let Some(data_url) = data_url {
                    image_preview::apply_preview(&mut state.form, &path, data_url);
                }
            }
        }
    }

    /// Apply every background result that has arrived
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background result and apply it
    #[cfg(test)]
    async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }
    }
}
