//! Notification overlay

pub const SUCCESS_TITLE: &str = "Успех!";
pub const ERROR_TITLE: &str = "Ошибка!";
pub const CREATED_MESSAGE: &str = "Пост успешно создан!";
pub const UPDATED_MESSAGE: &str = "Пост успешно обновлен!";
pub const REQUEST_FAILED_MESSAGE: &str = "Произошла ошибка при отправке запроса.";

/// Message for failures that name the unreachable resource
pub fn resource_failed_message(url: &str) -> String {
    format!("Проверьте доступ до ресурса {url}")
}

/// A titled message shown over the page until dismissed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationModal {
    pub title: String,
    pub message: String,
    visible: bool,
}

impl NotificationModal {
    pub fn show(&mut self, title: &str, message: impl Into<String>) {
        self.title = title.to_string();
        self.message = message.into();
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
