//! Entry tables of the admin page

use super::entry::EntryId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Which status group a table lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Published,
    Scheduled,
    Draft,
}

impl TableKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Published => "Опубликованные",
            Self::Scheduled => "Отложенные",
            Self::Draft => "Черновики",
        }
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRow {
    pub entry_id: EntryId,
    pub headline: String,
    #[serde(default)]
    pub blog_name: String,
    #[serde(default)]
    pub pub_date: Option<DateTime<FixedOffset>>,
    /// Ordinal shown in the first column, starting at 1
    #[serde(skip)]
    pub ordinal: usize,
}

impl EntryRow {
    pub fn pub_date_display(&self) -> String {
        self.pub_date
            .map(|d| d.format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTable {
    pub kind: TableKind,
    pub rows: Vec<EntryRow>,
}

impl EntryTable {
    pub fn new(kind: TableKind, rows: Vec<EntryRow>) -> Self {
        let mut table = Self { kind, rows };
        table.renumber();
        table
    }

    /// Rewrite ordinals as 1..=N in row order
    pub fn renumber(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.ordinal = index + 1;
        }
    }
}

/// All tables of the page plus the highlighted row
#[derive(Debug, Clone, Default)]
pub struct EntryTables {
    tables: Vec<EntryTable>,
    selected: usize,
}

impl EntryTables {
    pub fn new(tables: Vec<EntryTable>) -> Self {
        Self {
            tables,
            selected: 0,
        }
    }

    pub fn tables(&self) -> &[EntryTable] {
        &self.tables
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    /// Index of the highlighted row across all tables in display order
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&EntryRow> {
        self.tables
            .iter()
            .flat_map(|t| t.rows.iter())
            .nth(self.selected)
    }

    /// Row of `entry_id` in any table
    pub fn find_entry(&self, entry_id: EntryId) -> Option<&EntryRow> {
        self.tables
            .iter()
            .flat_map(|t| t.rows.iter())
            .find(|r| r.entry_id == entry_id)
    }

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Remove the row of `entry_id` and renumber the rows of its table.
    ///
    /// Other tables keep their ordinals. Returns the table the row was in.
    pub fn remove_entry(&mut self, entry_id: EntryId) -> Option<TableKind> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.rows.iter().any(|r| r.entry_id == entry_id))?;
        table.rows.retain(|r| r.entry_id != entry_id);
        table.renumber();
        let kind = table.kind;

        let count = self.row_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(entry_id: EntryId) -> EntryRow {
        EntryRow {
            entry_id,
            headline: format!("Пост {entry_id}"),
            blog_name: "Блог".to_string(),
            pub_date: None,
            ordinal: 0,
        }
    }

    fn create_tables() -> EntryTables {
        EntryTables::new(vec![
            EntryTable::new(TableKind::Published, vec![row(1), row(2), row(3), row(4)]),
            EntryTable::new(TableKind::Draft, vec![row(10), row(11)]),
        ])
    }

    fn ordinals(table: &EntryTable) -> Vec<usize> {
        table.rows.iter().map(|r| r.ordinal).collect()
    }

    #[test]
    fn test_new_table_numbers_from_one() {
        let tables = create_tables();
        assert_eq!(ordinals(&tables.tables()[0]), vec![1, 2, 3, 4]);
        assert_eq!(ordinals(&tables.tables()[1]), vec![1, 2]);
    }

    #[test]
    fn test_remove_middle_row_renumbers_table() {
        let mut tables = create_tables();
        assert_eq!(tables.remove_entry(2), Some(TableKind::Published));
        let published = &tables.tables()[0];
        assert_eq!(ordinals(published), vec![1, 2, 3]);
        let ids: Vec<EntryId> = published.rows.iter().map(|r| r.entry_id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_only_touches_owning_table() {
        let mut tables = create_tables();
        tables.remove_entry(10);
        assert_eq!(ordinals(&tables.tables()[0]), vec![1, 2, 3, 4]);
        assert_eq!(ordinals(&tables.tables()[1]), vec![1]);
        assert_eq!(tables.tables()[1].rows[0].entry_id, 11);
    }

    #[test]
    fn test_remove_every_position() {
        for k in 1..=4 {
            let mut tables = create_tables();
            tables.remove_entry(k);
            assert_eq!(ordinals(&tables.tables()[0]), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_remove_unknown_entry() {
        let mut tables = create_tables();
        assert_eq!(tables.remove_entry(99), None);
        assert_eq!(tables.row_count(), 6);
    }

    #[test]
    fn test_selection_moves_across_tables() {
        let mut tables = create_tables();
        for _ in 0..4 {
            tables.select_next();
        }
        assert_eq!(tables.selected_entry().map(|r| r.entry_id), Some(10));
        for _ in 0..10 {
            tables.select_next();
        }
        assert_eq!(tables.selected_entry().map(|r| r.entry_id), Some(11));
        tables.select_prev();
        assert_eq!(tables.selected_entry().map(|r| r.entry_id), Some(10));
    }

    #[test]
    fn test_selection_clamped_after_removing_last_row() {
        let mut tables = create_tables();
        for _ in 0..5 {
            tables.select_next();
        }
        tables.remove_entry(11);
        assert_eq!(tables.selected_index(), 4);
        assert_eq!(tables.selected_entry().map(|r| r.entry_id), Some(10));
    }

    #[test]
    fn test_find_entry_searches_all_tables() {
        let tables = create_tables();
        assert_eq!(tables.find_entry(11).map(|r| r.ordinal), Some(2));
        assert!(tables.find_entry(99).is_none());
    }

    #[test]
    fn test_pub_date_display() {
        let mut r = row(1);
        assert_eq!(r.pub_date_display(), "—");
        r.pub_date = Some(DateTime::parse_from_rfc3339("2024-03-01T10:05:00+03:00").unwrap());
        assert_eq!(r.pub_date_display(), "01.03.2024 10:05");
    }
}
