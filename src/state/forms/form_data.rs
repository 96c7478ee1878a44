//! Serialized form contents, the equivalent of a multipart `FormData`

use std::path::PathBuf;

/// Name of the hidden field carrying the anti-forgery token
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Value of one form part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// Local file uploaded as the part's body
    File(PathBuf),
}

/// Ordered list of named parts; a name may repeat for multi-selects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    parts: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, name: &str, value: impl Into<String>) {
        self.parts
            .push((name.to_string(), FormValue::Text(value.into())));
    }

    pub fn append_file(&mut self, name: &str, path: impl Into<PathBuf>) {
        self.parts
            .push((name.to_string(), FormValue::File(path.into())));
    }

    /// First text value stored under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn into_parts(self) -> Vec<(String, FormValue)> {
        self.parts
    }
}

#[cfg(test)]
impl FormData {
    /// All text values stored under `name`
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|(n, v)| match v {
                FormValue::Text(text) if n == name => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn file(&self, name: &str) -> Option<&PathBuf> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::File(path) if n == name => Some(path),
            _ => None,
        })
    }
}
