//! Sorting and filtering of the table.
//!
//! This is view state only: it decides which cached rows are shown and in
//! which order, and never changes `RecordManager::records`.

use std::cmp::Ordering;

use crate::model::record::{DraftField, Record};

/// Data columns of the table. The leading selection column is not listed.
pub type Column = DraftField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridView {
    sort: Option<(Column, SortDirection)>,
    title_filter: String,
    author_filter: String,
    student_number_filter: String,
}

impl GridView {
    /// Only the title column can be sorted; author and student count only
    /// filter.
    pub fn is_sortable(column: Column) -> bool {
        column == Column::Title
    }

    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.sort
            .filter(|(sorted, _)| *sorted == column)
            .map(|(_, direction)| direction)
    }

    /// Cycles `column` through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: Column) {
        if !Self::is_sortable(column) {
            return;
        }
        self.sort = match self.sort_direction(column) {
            None => Some((column, SortDirection::Ascending)),
            Some(SortDirection::Ascending) => Some((column, SortDirection::Descending)),
            Some(SortDirection::Descending) => None,
        };
    }

    pub fn filter(&self, column: Column) -> &str {
        match column {
            Column::Title => &self.title_filter,
            Column::Author => &self.author_filter,
            Column::StudentNumber => &self.student_number_filter,
        }
    }

    pub fn set_filter(&mut self, column: Column, value: String) {
        match column {
            Column::Title => self.title_filter = value,
            Column::Author => self.author_filter = value,
            Column::StudentNumber => self.student_number_filter = value,
        }
    }

    /// Rows that pass every filter, sorted if a sort is active. With no
    /// filter and no sort this is `records` in backend order.
    pub fn rows<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let mut rows: Vec<&Record> = records.iter().filter(|r| self.matches(r)).collect();

        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare_text(cell(a, column), cell(b, column));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    fn matches(&self, record: &Record) -> bool {
        Column::ALL
            .iter()
            .all(|&column| contains_ignore_case(cell(record, column), self.filter(column)))
    }
}

pub fn cell(record: &Record, column: Column) -> &str {
    match column {
        Column::Title => &record.title,
        Column::Author => &record.author,
        Column::StudentNumber => &record.student_number,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
