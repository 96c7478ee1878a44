//! Client-side search over the author select

use super::forms::{SelectField, SelectOption};

/// Filters a multi-select by label while restoring the selection that was
/// captured when the filter was created.
///
/// The captured selection is never refreshed: options selected after
/// construction are not restored once a filter pass rebuilds the list.
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter {
    all_options: Vec<SelectOption>,
    captured_selection: Vec<String>,
}

impl AuthorFilter {
    /// Capture the full option list and the current selection of `select`
    pub fn new(select: &SelectField) -> Self {
        Self {
            all_options: select.options.clone(),
            captured_selection: select
                .selected_values()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn captured_selection(&self) -> &[String] {
        &self.captured_selection
    }

    /// Original options whose label contains `term`, case-insensitively
    pub fn matching(&self, term: &str) -> Vec<SelectOption> {
        let term = term.to_lowercase();
        self.all_options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&term))
            .map(|o| SelectOption {
                selected: false,
                ..o.clone()
            })
            .collect()
    }

    /// Rebuild `select` from the options matching `term` and re-mark the
    /// captured selection among them.
    pub fn apply(&self, term: &str, select: &mut SelectField) {
        let mut options = self.matching(term);
        for option in &mut options {
            option.selected = self.captured_selection.contains(&option.value);
        }
        select.replace_options(options);
    }
}
