//! Load an existing entry into the post form for editing

use crate::api::EntryApi;
use crate::state::{EntryDetail, EntryId, FormTarget, PostForm, SelectField};

/// Fetch an entry; failures are logged and yield `None`
pub async fn fetch_for_edit(api: &dyn EntryApi, entry_id: EntryId) -> Option<EntryDetail> {
    match api.fetch_entry(entry_id).await {
        Ok(detail) => Some(detail),
        Err(err) => {
            tracing::error!("Failed to load entry {entry_id}: {err}");
            None
        }
    }
}

/// The entry whose edit fetch is outstanding. Only the latest request may
/// fill the form; anything else that arrives is dropped.
#[derive(Debug, Default)]
pub struct EditLoader {
    pending: Option<EntryId>,
}

impl EditLoader {
    pub fn request(&mut self, entry_id: EntryId) {
        self.pending = Some(entry_id);
    }

    pub fn cancel(&mut self) {
        if let Some(entry_id) = self.pending.take() {
            tracing::debug!("Dropping pending edit of entry {entry_id}");
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<EntryId> {
        self.pending
    }

    /// Accept a finished fetch for `entry_id`. Returns false when the
    /// result is stale.
    pub fn finish(&mut self, entry_id: EntryId) -> bool {
        if self.pending == Some(entry_id) {
            self.pending = None;
            true
        } else {
            tracing::debug!("Ignoring stale edit result for entry {entry_id}");
            false
        }
    }
}

fn select_label(select: &mut SelectField, label: &str) {
    if !select.select_by_text(label) {
        tracing::debug!("No {} option labelled {label:?}", select.name);
    }
}

/// Populate the form from `detail` and point it at the entry's update URL.
///
/// Selects are matched by exact option label; labels with no option are skipped.
pub fn fill_update_form(form: &mut PostForm, detail: &EntryDetail) {
    form.reset();

    select_label(&mut form.blog, &detail.blog_name);
    form.headline.set_text(detail.headline.clone());
    form.summary.set_text(detail.summary.clone());
    form.body.set_text(detail.body_text.clone());

    form.image.clear();
    if let Some(image) = detail.image.as_deref().filter(|i| !i.is_empty()) {
        form.preview.show(image);
    }

    for author in &detail.authors {
        select_label(&mut form.authors, &author.name);
    }
    for tag in &detail.tags {
        select_label(&mut form.tags, &tag.name);
    }

    form.set_target(FormTarget::update(detail.entry_id));
    form.show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockEntryApi};
    use crate::state::{FormMethod, NamedRef, SelectOption};
    use pretty_assertions::assert_eq;

    /// Fetch `entry_id` and open the form on it. Returns whether the form was filled.
    async fn load_for_edit(api: &dyn EntryApi, entry_id: EntryId, form: &mut PostForm) -> bool {
        match fetch_for_edit(api, entry_id).await {
            Some(detail) => {
                fill_update_form(form, &detail);
                true
            }
            None => false,
        }
    }

    fn options(labels: &[&str]) -> Vec<SelectOption> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| SelectOption::new((i + 1).to_string(), *l))
            .collect()
    }

    fn create_test_form() -> PostForm {
        PostForm::new(
            options(&["Путешествия", "Кулинария"]),
            options(&["anna", "boris", "vera"]),
            options(&["горы", "озёра"]),
            "tok",
        )
    }

    fn create_test_detail() -> EntryDetail {
        EntryDetail {
            entry_id: 7,
            blog_name: "Путешествия".to_string(),
            headline: "Алтай".to_string(),
            summary: "Горы".to_string(),
            body_text: "<p>Текст</p>".to_string(),
            image: Some("/media/image_entry/altai.jpg".to_string()),
            pub_date: None,
            status: Some("published".to_string()),
            authors: vec![
                NamedRef { name: "anna".to_string() },
                NamedRef { name: "vera".to_string() },
            ],
            tags: vec![NamedRef { name: "горы".to_string() }],
        }
    }

    #[test]
    fn test_latest_request_wins() {
        let mut loader = EditLoader::default();
        loader.request(3);
        loader.request(7);
        assert!(!loader.finish(3));
        assert_eq!(loader.pending(), Some(7));
        assert!(loader.finish(7));
        assert!(!loader.finish(7));
    }

    #[test]
    fn test_cancelled_request_is_stale() {
        let mut loader = EditLoader::default();
        loader.request(3);
        loader.cancel();
        assert_eq!(loader.pending(), None);
        assert!(!loader.finish(3));
    }

    #[test]
    fn test_fill_populates_fields() {
        let mut form = create_test_form();
        fill_update_form(&mut form, &create_test_detail());

        assert_eq!(form.blog.selected_labels(), vec!["Путешествия"]);
        assert_eq!(form.headline.as_text(), "Алтай");
        assert_eq!(form.summary.as_text(), "Горы");
        assert_eq!(form.body.as_text(), "<p>Текст</p>");
        assert_eq!(form.authors.selected_labels(), vec!["anna", "vera"]);
        assert_eq!(form.tags.selected_labels(), vec!["горы"]);
        assert!(form.preview.visible);
        assert_eq!(form.preview.src.as_deref(), Some("/media/image_entry/altai.jpg"));
        assert_eq!(form.target().action, "/entry/7/");
        assert_eq!(form.target().method, FormMethod::Put);
        assert!(form.is_visible());
    }

    #[test]
    fn test_fill_ignores_unknown_labels() {
        let mut form = create_test_form();
        let mut detail = create_test_detail();
        detail.blog_name = "путешествия".to_string();
        detail.authors = vec![NamedRef { name: "Anna".to_string() }];
        detail.tags = vec![NamedRef { name: "реки".to_string() }];

        fill_update_form(&mut form, &detail);

        assert!(form.blog.selected_values().is_empty());
        assert!(form.authors.selected_values().is_empty());
        assert!(form.tags.selected_values().is_empty());
        assert!(form.is_visible());
    }

    #[test]
    fn test_fill_replaces_previous_values() {
        let mut form = create_test_form();
        form.authors.select_by_text("boris");
        form.image.set_text("/tmp/old.png");
        let mut detail = create_test_detail();
        detail.image = None;

        fill_update_form(&mut form, &detail);

        assert_eq!(form.authors.selected_labels(), vec!["anna", "vera"]);
        assert!(form.image.is_empty());
        assert!(!form.preview.visible);
    }

    #[tokio::test]
    async fn test_load_for_edit_success() {
        let mut api = MockEntryApi::new();
        api.expect_fetch_entry()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(create_test_detail()));
        let mut form = create_test_form();

        assert!(load_for_edit(&api, 7, &mut form).await);
        assert_eq!(form.headline.as_text(), "Алтай");
    }

    #[tokio::test]
    async fn test_load_for_edit_failure_leaves_form_alone() {
        let mut api = MockEntryApi::new();
        api.expect_fetch_entry()
            .times(1)
            .returning(|_| Err(ApiError::Status(404)));
        let mut form = create_test_form();
        form.headline.set_text("черновик");

        assert!(!load_for_edit(&api, 7, &mut form).await);
        assert_eq!(form.headline.as_text(), "черновик");
        assert!(!form.is_visible());
    }
}
