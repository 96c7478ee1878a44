//! Form field value objects

/// Input flavour of a text-like field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Path of a local file to upload
    FilePath,
    /// `YYYY-MM-DDTHH:MM`, as a `datetime-local` input produces it
    DateTimeLocal,
}

/// Represents a single text-like form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new multi-line text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    /// Create a new file path field
    pub fn file(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::FilePath)
    }

    /// Create a new date-time field
    pub fn datetime(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::DateTimeLocal)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    ///
    /// Date-time fields only accept the characters of the `datetime-local` format.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::DateTimeLocal => {
                if c.is_ascii_digit() || matches!(c, '-' | ':' | 'T') {
                    self.value.push(c);
                }
            }
            FieldKind::Text | FieldKind::FilePath => {
                if c != '\n' {
                    self.value.push(c);
                }
            }
            FieldKind::Multiline => self.value.push(c),
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::FilePath if self.value.is_empty() => "Файл не выбран".to_string(),
            FieldKind::DateTimeLocal if self.value.is_empty() => "ГГГГ-ММ-ДДTчч:мм".to_string(),
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("headline", "Заголовок");
        assert_eq!(field.name, "headline");
        assert_eq!(field.as_text(), "");
        assert!(field.is_empty());
        assert!(!field.is_multiline());
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut field = FormField::text("headline", "Заголовок");
        field.push_char('a');
        field.push_char('\n');
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_multiline_keeps_newline() {
        let mut field = FormField::multiline("body_text", "Текст");
        field.push_char('a');
        field.push_char('\n');
        field.push_char('b');
        assert_eq!(field.as_text(), "a\nb");
        assert!(field.is_multiline());
    }

    #[test]
    fn test_datetime_filters_characters() {
        let mut field = FormField::datetime("pub_date", "Дата");
        for c in "2024-01-0x2T10:30".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "2024-01-02T10:30");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut field = FormField::text("summary", "Описание");
        field.set_text("abc");
        field.pop_char();
        assert_eq!(field.as_text(), "ab");
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_file_display_placeholder() {
        let mut field = FormField::file("image", "Изображение");
        assert_eq!(field.display_value(), "Файл не выбран");
        field.set_text("/tmp/cat.png");
        assert_eq!(field.display_value(), "/tmp/cat.png");
    }
}
