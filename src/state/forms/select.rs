//! Single and multiple choice selects

use serde::{Deserialize, Serialize};

/// One `<option>` of a select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }
}

/// A select field holding its options and their selection state
#[derive(Debug, Clone)]
pub struct SelectField {
    pub name: String,
    pub label: String,
    pub options: Vec<SelectOption>,
    pub multiple: bool,
    /// Highlighted option while the field has focus
    pub cursor: usize,
}

impl SelectField {
    /// Create a single choice select
    pub fn single(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        let mut field = Self {
            name: name.to_string(),
            label: label.to_string(),
            options,
            multiple: false,
            cursor: 0,
        };
        field.enforce_single();
        field
    }

    /// Create a multiple choice select
    pub fn multiple(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            options,
            multiple: true,
            cursor: 0,
        }
    }

    fn enforce_single(&mut self) {
        if let Some(first) = self.options.iter().position(|o| o.selected) {
            for (i, option) in self.options.iter_mut().enumerate() {
                option.selected = i == first;
            }
        }
    }

    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    pub fn selected_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Select the first option whose label equals `text` exactly.
    ///
    /// Returns `false` and leaves the selection untouched when nothing matches.
    pub fn select_by_text(&mut self, text: &str) -> bool {
        match self.options.iter().position(|o| o.label == text) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => false,
        }
    }

    fn select_index(&mut self, index: usize) {
        if !self.multiple {
            for option in &mut self.options {
                option.selected = false;
            }
        }
        self.options[index].selected = true;
    }

    pub fn clear_selection(&mut self) {
        for option in &mut self.options {
            option.selected = false;
        }
    }

    /// Replace the rendered options, keeping the cursor in range
    pub fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.cursor = self.cursor.min(self.options.len().saturating_sub(1));
    }

    pub fn cursor_next(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    pub fn cursor_prev(&mut self) {
        if !self.options.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// Toggle the highlighted option (multi) or select it (single)
    pub fn toggle_at_cursor(&mut self) {
        if self.cursor >= self.options.len() {
            return;
        }
        if self.multiple {
            let option = &mut self.options[self.cursor];
            option.selected = !option.selected;
        } else {
            self.select_index(self.cursor);
        }
    }

    /// Move the selection of a single select to the next option
    pub fn select_next(&mut self) {
        self.cursor_next();
        if !self.multiple {
            self.toggle_at_cursor();
        }
    }

    /// Move the selection of a single select to the previous option
    pub fn select_prev(&mut self) {
        self.cursor_prev();
        if !self.multiple {
            self.toggle_at_cursor();
        }
    }
}
