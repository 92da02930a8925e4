//! Wrap-around cursor over a loaded dataset

use crate::dataset::DatasetRow;

/// Holds the dataset and the position of the row on display
///
/// Either empty (no position) or populated with `index < rows.len()`.
/// Stepping never fails: on an empty dataset `next`/`previous` do nothing
/// and return `None`.
#[derive(Debug, Clone, Default)]
pub struct DatasetNavigator {
    rows: Vec<DatasetRow>,
    index: Option<usize>,
}

impl DatasetNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<DatasetRow>) -> Self {
        let mut navigator = Self::new();
        navigator.load(rows);
        navigator
    }

    /// Replaces the dataset and rewinds to the first row
    pub fn load(&mut self, rows: Vec<DatasetRow>) {
        self.index = if rows.is_empty() { None } else { Some(0) };
        self.rows = rows;
    }

    pub fn current(&self) -> Option<&DatasetRow> {
        self.index.and_then(|i| self.rows.get(i))
    }

    /// Advances one row, wrapping from the last row to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&DatasetRow> {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.rows.len());
        }
        self.current()
    }

    /// Steps back one row, wrapping from the first row to the last
    pub fn previous(&mut self) -> Option<&DatasetRow> {
        if let Some(i) = self.index {
            self.index = Some(if i == 0 { self.rows.len() - 1 } else { i - 1 });
        }
        self.current()
    }

    /// Zero-based position of the current row
    pub fn position(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }
}
