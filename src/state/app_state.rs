//! Application state definitions

use super::author_filter::AuthorFilter;
use super::forms::PostForm;
use super::modal::NotificationModal;
use super::page::PageSnapshot;
use super::tables::EntryTables;
use crate::cookie::{get_cookie, CSRF_COOKIE};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Entries,
    PostForm,
}

/// Everything the admin page shows
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: PostForm,
    pub tables: EntryTables,
    pub notification: NotificationModal,
    pub author_filter: AuthorFilter,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the page from its server-rendered context.
    ///
    /// The form token falls back to the `csrftoken` cookie when the
    /// snapshot carries none.
    pub fn from_snapshot(snapshot: &PageSnapshot, cookies: &str) -> Self {
        let csrf_token = snapshot
            .csrf_token
            .clone()
            .or_else(|| get_cookie(cookies, CSRF_COOKIE))
            .unwrap_or_default();
        let form = PostForm::new(
            snapshot.blogs.clone(),
            snapshot.authors.clone(),
            snapshot.tags.clone(),
            csrf_token,
        );
        let author_filter = AuthorFilter::new(&form.authors);
        Self {
            form,
            tables: snapshot.entry_tables(),
            notification: NotificationModal::default(),
            author_filter,
            status_message: None,
        }
    }

    /// Drop any author search so the full author list is back in the form
    pub fn clear_author_search(&mut self) {
        self.form.author_search.clear();
        self.author_filter.apply("", &mut self.form.authors);
    }

    pub fn current_view(&self) -> View {
        if self.form.is_visible() {
            View::PostForm
        } else {
            View::Entries
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_snapshot(&PageSnapshot::default(), "")
    }
}
