//! Post authoring form state

use super::field::FormField;
use super::form_data::{FormData, CSRF_FIELD};
use super::select::{SelectField, SelectOption};
use crate::state::EntryId;

/// Form action used when creating a new entry
pub const CREATE_ACTION: &str = "/entry/";

/// Status submitted when no submit button has set one
pub const DEFAULT_STATUS: &str = "published";

/// Publication timing choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    #[default]
    Now,
    Later,
}

impl PublishMode {
    /// Parse the raw select value (`"1"` now, `"2"` later)
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::Now),
            "2" => Some(Self::Later),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Now => "1",
            Self::Later => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Now => "Опубликовать сейчас",
            Self::Later => "Опубликовать позже",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Now => Self::Later,
            Self::Later => Self::Now,
        }
    }
}

/// HTTP method the form submits with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    #[default]
    Post,
    Put,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Where and how the form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
    pub method: FormMethod,
}

impl FormTarget {
    pub fn create() -> Self {
        Self {
            action: CREATE_ACTION.to_string(),
            method: FormMethod::Post,
        }
    }

    pub fn update(entry_id: EntryId) -> Self {
        Self {
            action: format!("/entry/{entry_id}/"),
            method: FormMethod::Put,
        }
    }
}

impl Default for FormTarget {
    fn default() -> Self {
        Self::create()
    }
}

/// The three submit-type buttons of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Publish,
    Schedule,
    Draft,
}

pub const SUBMIT_BUTTONS: [SubmitButton; 3] = [
    SubmitButton::Publish,
    SubmitButton::Schedule,
    SubmitButton::Draft,
];

impl SubmitButton {
    /// Entry status the button submits
    pub fn status(self) -> &'static str {
        match self {
            Self::Publish => "published",
            Self::Schedule => "scheduled",
            Self::Draft => "draft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Publish => "Опубликовать",
            Self::Schedule => "Отложить",
            Self::Draft => "Черновик",
        }
    }
}

/// Inline preview of the selected or stored image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: Option<String>,
    pub visible: bool,
}

impl ImagePreview {
    pub fn show(&mut self, src: impl Into<String>) {
        self.src = Some(src.into());
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.src = None;
        self.visible = false;
    }
}

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Blog,
    Headline,
    Summary,
    Body,
    Image,
    AuthorSearch,
    Authors,
    Tags,
    PublishMode,
    PubDate,
    Buttons,
}

const FOCUS_ORDER: [FormFocus; 11] = [
    FormFocus::Blog,
    FormFocus::Headline,
    FormFocus::Summary,
    FormFocus::Body,
    FormFocus::Image,
    FormFocus::AuthorSearch,
    FormFocus::Authors,
    FormFocus::Tags,
    FormFocus::PublishMode,
    FormFocus::PubDate,
    FormFocus::Buttons,
];

/// Live state of the post form
#[derive(Debug, Clone)]
pub struct PostForm {
    pub blog: SelectField,
    pub headline: FormField,
    pub summary: FormField,
    pub body: FormField,
    pub image: FormField,
    pub author_search: FormField,
    pub authors: SelectField,
    pub tags: SelectField,
    pub pub_date: FormField,
    pub preview: ImagePreview,
    pub focus: FormFocus,
    csrf_token: String,
    status: String,
    publish_mode: PublishMode,
    pub_date_visible: bool,
    publish_visible: bool,
    schedule_visible: bool,
    buttons_disabled: bool,
    selected_button: usize,
    visible: bool,
    target: FormTarget,
}

impl PostForm {
    pub fn new(
        blogs: Vec<SelectOption>,
        authors: Vec<SelectOption>,
        tags: Vec<SelectOption>,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            blog: SelectField::single("blog", "Блог", blogs),
            headline: FormField::text("headline", "Заголовок"),
            summary: FormField::multiline("summary", "Краткое описание"),
            body: FormField::multiline("body_text", "Текст статьи"),
            image: FormField::file("image", "Изображение"),
            author_search: FormField::text("author_search", "Поиск автора"),
            authors: SelectField::multiple("authors", "Авторы", authors),
            tags: SelectField::multiple("tags", "Теги", tags),
            pub_date: FormField::datetime("pub_date", "Дата публикации"),
            preview: ImagePreview::default(),
            focus: FormFocus::Blog,
            csrf_token: csrf_token.into(),
            status: DEFAULT_STATUS.to_string(),
            publish_mode: PublishMode::Now,
            pub_date_visible: false,
            publish_visible: true,
            schedule_visible: false,
            buttons_disabled: false,
            selected_button: 0,
            visible: false,
            target: FormTarget::create(),
        }
    }

    /// Clear every field, hide the preview and the date field, and restore
    /// the immediate-publish button layout.
    pub fn reset(&mut self) {
        self.blog.clear_selection();
        self.headline.clear();
        self.summary.clear();
        self.body.clear();
        self.image.clear();
        self.author_search.clear();
        self.authors.clear_selection();
        self.tags.clear_selection();
        self.pub_date.clear();
        self.status = DEFAULT_STATUS.to_string();
        self.publish_mode = PublishMode::Now;
        self.preview.hide();
        self.pub_date_visible = false;
        self.publish_visible = true;
        self.schedule_visible = false;
        self.selected_button = 0;
        self.focus = FormFocus::Blog;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply a raw publish-mode selection. Values other than `"1"` and `"2"`
    /// leave the form untouched.
    pub fn on_publish_mode_change(&mut self, value: &str) {
        let Some(mode) = PublishMode::from_value(value) else {
            tracing::debug!("Ignoring unknown publish mode {value:?}");
            return;
        };
        self.publish_mode = mode;
        match mode {
            PublishMode::Now => {
                self.pub_date_visible = false;
                self.publish_visible = true;
                self.schedule_visible = false;
            }
            PublishMode::Later => {
                self.pub_date_visible = true;
                self.publish_visible = false;
                self.schedule_visible = true;
            }
        }
        self.clamp_selected_button();
    }

    pub fn publish_mode(&self) -> PublishMode {
        self.publish_mode
    }

    pub fn is_pub_date_visible(&self) -> bool {
        self.pub_date_visible
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    #[cfg(test)]
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn target(&self) -> &FormTarget {
        &self.target
    }

    pub fn set_target(&mut self, target: FormTarget) {
        self.target = target;
    }

    /// Prepare the form for authoring a new entry
    pub fn open_for_create(&mut self) {
        self.reset();
        self.set_target(FormTarget::create());
        self.show();
    }

    pub fn is_button_visible(&self, button: SubmitButton) -> bool {
        match button {
            SubmitButton::Publish => self.publish_visible,
            SubmitButton::Schedule => self.schedule_visible,
            SubmitButton::Draft => true,
        }
    }

    /// All three submit buttons share one disabled flag
    pub fn buttons_disabled(&self) -> bool {
        self.buttons_disabled
    }

    pub fn disable_buttons(&mut self) {
        self.buttons_disabled = true;
    }

    pub fn enable_buttons(&mut self) {
        self.buttons_disabled = false;
    }

    pub fn visible_buttons(&self) -> Vec<SubmitButton> {
        SUBMIT_BUTTONS
            .into_iter()
            .filter(|b| self.is_button_visible(*b))
            .collect()
    }

    /// Highlighted button on the buttons row
    pub fn current_button(&self) -> Option<SubmitButton> {
        self.visible_buttons().get(self.selected_button).copied()
    }

    pub fn next_button(&mut self) {
        let count = self.visible_buttons().len();
        if count > 0 {
            self.selected_button = (self.selected_button + 1) % count;
        }
    }

    pub fn prev_button(&mut self) {
        let count = self.visible_buttons().len();
        if count > 0 {
            self.selected_button = self.selected_button.checked_sub(1).unwrap_or(count - 1);
        }
    }

    fn clamp_selected_button(&mut self) {
        let count = self.visible_buttons().len();
        if self.selected_button >= count {
            self.selected_button = 0;
        }
    }

    /// Press a submit button: records its status on the form.
    ///
    /// Returns `false` when the button is hidden or disabled.
    pub fn press(&mut self, button: SubmitButton) -> bool {
        if self.buttons_disabled || !self.is_button_visible(button) {
            return false;
        }
        self.set_status(button.status());
        true
    }

    /// Serialize the live field values as multipart form data
    pub fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.append_text(CSRF_FIELD, self.csrf_token.clone());
        data.append_text(
            &self.blog.name,
            self.blog.selected_values().first().copied().unwrap_or(""),
        );
        data.append_text(&self.headline.name, self.headline.as_text());
        data.append_text(&self.summary.name, self.summary.as_text());
        data.append_text(&self.body.name, self.body.as_text());
        if !self.image.is_empty() {
            data.append_file(&self.image.name, self.image.as_text().trim());
        }
        data.append_text(&self.pub_date.name, self.pub_date.as_text());
        for value in self.authors.selected_values() {
            data.append_text(&self.authors.name, value);
        }
        for value in self.tags.selected_values() {
            data.append_text(&self.tags.name, value);
        }
        data.append_text("status", self.status.clone());
        data
    }

    fn focus_order(&self) -> Vec<FormFocus> {
        FOCUS_ORDER
            .into_iter()
            .filter(|f| *f != FormFocus::PubDate || self.pub_date_visible)
            .collect()
    }

    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[current.checked_sub(1).unwrap_or(order.len() - 1)];
    }

    /// Text field under focus, if any
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            FormFocus::Headline => Some(&mut self.headline),
            FormFocus::Summary => Some(&mut self.summary),
            FormFocus::Body => Some(&mut self.body),
            FormFocus::Image => Some(&mut self.image),
            FormFocus::AuthorSearch => Some(&mut self.author_search),
            FormFocus::PubDate => Some(&mut self.pub_date),
            _ => None,
        }
    }

    /// Select field under focus, if any
    pub fn active_select_mut(&mut self) -> Option<&mut SelectField> {
        match self.focus {
            FormFocus::Blog => Some(&mut self.blog),
            FormFocus::Authors => Some(&mut self.authors),
            FormFocus::Tags => Some(&mut self.tags),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            options(&["anna", "boris"]),
            options(&["rust", "web"]),
            "tok",
        )
    }

    mod publish_mode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_value() {
            assert_eq!(PublishMode::from_value("1"), Some(PublishMode::Now));
            assert_eq!(PublishMode::from_value("2"), Some(PublishMode::Later));
            assert_eq!(PublishMode::from_value("3"), None);
            assert_eq!(PublishMode::from_value(""), None);
        }

        #[test]
        fn test_mode_now_layout() {
            let mut form = create_test_form();
            form.on_publish_mode_change("2");
            form.on_publish_mode_change("1");
            assert!(!form.is_pub_date_visible());
            assert!(form.is_button_visible(SubmitButton::Publish));
            assert!(!form.is_button_visible(SubmitButton::Schedule));
        }

        #[test]
        fn test_mode_later_layout() {
            let mut form = create_test_form();
            form.on_publish_mode_change("2");
            assert!(form.is_pub_date_visible());
            assert!(!form.is_button_visible(SubmitButton::Publish));
            assert!(form.is_button_visible(SubmitButton::Schedule));
            assert_eq!(form.publish_mode(), PublishMode::Later);
        }

        #[test]
        fn test_unknown_mode_is_noop() {
            let mut form = create_test_form();
            form.on_publish_mode_change("2");
            form.on_publish_mode_change("later");
            assert!(form.is_pub_date_visible());
            assert!(form.is_button_visible(SubmitButton::Schedule));
            assert_eq!(form.publish_mode(), PublishMode::Later);
        }

        #[test]
        fn test_only_two_layouts_reachable() {
            let mut form = create_test_form();
            for value in ["1", "2", "0", "2", "x", "1", "", "2"] {
                form.on_publish_mode_change(value);
                let layout = (
                    form.is_pub_date_visible(),
                    form.is_button_visible(SubmitButton::Publish),
                    form.is_button_visible(SubmitButton::Schedule),
                );
                assert!(layout == (false, true, false) || layout == (true, false, true));
            }
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_clears_fields_and_layout() {
            let mut form = create_test_form();
            form.blog.select_by_text("Кулинария");
            form.headline.set_text("Заголовок");
            form.summary.set_text("Кратко");
            form.body.set_text("<p>Текст</p>");
            form.image.set_text("/tmp/a.png");
            form.authors.select_by_text("anna");
            form.tags.select_by_text("web");
            form.pub_date.set_text("2024-05-01T10:00");
            form.preview.show("data:image/png;base64,AAAA");
            form.on_publish_mode_change("2");
            form.set_status("draft");

            form.reset();

            assert!(form.blog.selected_values().is_empty());
            assert!(form.headline.is_empty());
            assert!(form.summary.is_empty());
            assert!(form.body.is_empty());
            assert!(form.image.is_empty());
            assert!(form.authors.selected_values().is_empty());
            assert!(form.tags.selected_values().is_empty());
            assert!(form.pub_date.is_empty());
            assert_eq!(form.preview, ImagePreview::default());
            assert!(!form.is_pub_date_visible());
            assert!(form.is_button_visible(SubmitButton::Publish));
            assert!(!form.is_button_visible(SubmitButton::Schedule));
            assert_eq!(form.status(), DEFAULT_STATUS);
        }

        #[test]
        fn test_reset_keeps_csrf_token_and_options() {
            let mut form = create_test_form();
            form.reset();
            assert_eq!(form.csrf_token(), "tok");
            assert_eq!(form.authors.options.len(), 2);
        }

        #[test]
        fn test_show_hide_idempotent() {
            let mut form = create_test_form();
            assert!(!form.is_visible());
            form.show();
            form.show();
            assert!(form.is_visible());
            form.hide();
            form.hide();
            assert!(!form.is_visible());
        }

        #[test]
        fn test_open_for_create_sets_target() {
            let mut form = create_test_form();
            form.set_target(FormTarget::update(9));
            form.headline.set_text("old");
            form.open_for_create();
            assert_eq!(form.target(), &FormTarget::create());
            assert!(form.headline.is_empty());
            assert!(form.is_visible());
        }
    }

    mod buttons {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_press_sets_status() {
            let mut form = create_test_form();
            assert!(form.press(SubmitButton::Draft));
            assert_eq!(form.status(), "draft");
            assert!(form.press(SubmitButton::Publish));
            assert_eq!(form.status(), "published");
        }

        #[test]
        fn test_press_hidden_button_rejected() {
            let mut form = create_test_form();
            assert!(!form.press(SubmitButton::Schedule));
            assert_eq!(form.status(), DEFAULT_STATUS);
        }

        #[test]
        fn test_press_while_disabled_rejected() {
            let mut form = create_test_form();
            form.disable_buttons();
            for button in SUBMIT_BUTTONS {
                assert!(!form.press(button));
            }
            form.enable_buttons();
            assert!(form.press(SubmitButton::Draft));
        }

        #[test]
        fn test_visible_buttons_follow_mode() {
            let mut form = create_test_form();
            assert_eq!(
                form.visible_buttons(),
                vec![SubmitButton::Publish, SubmitButton::Draft]
            );
            form.on_publish_mode_change("2");
            assert_eq!(
                form.visible_buttons(),
                vec![SubmitButton::Schedule, SubmitButton::Draft]
            );
        }

        #[test]
        fn test_button_cycle_wraps() {
            let mut form = create_test_form();
            assert_eq!(form.current_button(), Some(SubmitButton::Publish));
            form.next_button();
            assert_eq!(form.current_button(), Some(SubmitButton::Draft));
            form.next_button();
            assert_eq!(form.current_button(), Some(SubmitButton::Publish));
            form.prev_button();
            assert_eq!(form.current_button(), Some(SubmitButton::Draft));
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::path::PathBuf;

        #[test]
        fn test_form_data_contains_all_fields() {
            let mut form = create_test_form();
            form.blog.select_by_text("Кулинария");
            form.headline.set_text("Борщ");
            form.summary.set_text("Рецепт");
            form.body.set_text("<p>Свекла</p>");
            form.authors.select_by_text("anna");
            form.authors.select_by_text("boris");
            form.tags.select_by_text("web");
            form.press(SubmitButton::Draft);

            let data = form.form_data();
            assert_eq!(data.get(CSRF_FIELD), Some("tok"));
            assert_eq!(data.get("blog"), Some("2"));
            assert_eq!(data.get("headline"), Some("Борщ"));
            assert_eq!(data.get("summary"), Some("Рецепт"));
            assert_eq!(data.get("body_text"), Some("<p>Свекла</p>"));
            assert_eq!(data.get_all("authors"), vec!["1", "2"]);
            assert_eq!(data.get_all("tags"), vec!["2"]);
            assert_eq!(data.get("status"), Some("draft"));
            assert_eq!(data.file("image"), None);
        }

        #[test]
        fn test_form_data_includes_image_file() {
            let mut form = create_test_form();
            form.image.set_text("/tmp/photo.jpg");
            let data = form.form_data();
            assert_eq!(data.file("image"), Some(&PathBuf::from("/tmp/photo.jpg")));
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_focus_skips_hidden_pub_date() {
            let mut form = create_test_form();
            form.focus = FormFocus::PublishMode;
            form.next_focus();
            assert_eq!(form.focus, FormFocus::Buttons);
        }

        #[test]
        fn test_next_focus_visits_pub_date_when_scheduled() {
            let mut form = create_test_form();
            form.on_publish_mode_change("2");
            form.focus = FormFocus::PublishMode;
            form.next_focus();
            assert_eq!(form.focus, FormFocus::PubDate);
        }

        #[test]
        fn test_focus_wraps() {
            let mut form = create_test_form();
            form.prev_focus();
            assert_eq!(form.focus, FormFocus::Buttons);
            form.next_focus();
            assert_eq!(form.focus, FormFocus::Blog);
        }

        #[test]
        fn test_active_field_accessors() {
            let mut form = create_test_form();
            assert!(form.active_select_mut().is_some());
            assert!(form.active_text_field_mut().is_none());
            form.focus = FormFocus::Headline;
            assert_eq!(form.active_text_field_mut().unwrap().name, "headline");
            form.focus = FormFocus::Buttons;
            assert!(form.active_text_field_mut().is_none());
            assert!(form.active_select_mut().is_none());
        }
    }

    #[test]
    fn test_update_target_url() {
        let target = FormTarget::update(42);
        assert_eq!(target.action, "/entry/42/");
        assert_eq!(target.method, FormMethod::Put);
    }
}
