//! A sortable table of text cells.
//!
//! A [`SortTable`] holds the rows loaded from one file plus its interactive
//! state: the active sort (at most one column at a time), the scroll
//! position, and the layout recorded by the last draw so that mouse clicks
//! can be mapped back to header columns and rows.

pub mod column;
pub mod sort;
pub mod state;

pub use column::*;
use icu_collator::Collator;
use itertools::Itertools;
pub use sort::*;
pub use state::*;
use tui::layout::Position;

/// The indicator glyph for a sortable header that is not the active sort.
pub const NEUTRAL_ARROW: &str = "↕";

/// The indicator glyph for the active header, sorted ascending.
pub const UP_ARROW: &str = "↑";

/// The indicator glyph for the active header, sorted descending.
pub const DOWN_ARROW: &str = "↓";

/// A single data row. Cells align positionally with the table's columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// The cell at `index`, or an empty string for rows that are too short.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// One table loaded from a file, plus its interactive state.
pub struct SortTable {
    id: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
    sort: Option<SortState>,
    pub state: SortTableState,
}

impl SortTable {
    pub fn new<S: Into<String>>(id: S, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows,
            sort: None,
            state: SortTableState::default(),
        }
    }

    /// The stable identifier, shown as the pane title.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The active sort, if any column has been clicked.
    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Whether this table was wired for interaction at all. Files without a
    /// header row produce non-interactive tables.
    pub fn is_interactive(&self) -> bool {
        !self.columns.is_empty()
    }

    /// The indicator glyph to draw after the header of `column`, or [`None`]
    /// for columns that are not sortable.
    pub fn indicator(&self, column: usize) -> Option<&'static str> {
        if !self.columns.get(column)?.is_sortable() {
            return None;
        }

        Some(match self.sort {
            Some(state) if state.column == column => match state.order {
                SortOrder::Ascending => UP_ARROW,
                SortOrder::Descending => DOWN_ARROW,
            },
            _ => NEUTRAL_ARROW,
        })
    }

    /// Handles a click on the header of `column`: activates it (clearing
    /// any other active column), toggling the order if it was already
    /// active, and re-sorts the rows.
    ///
    /// Clicks on unsortable or out-of-range columns are silent no-ops.
    pub fn sort_by_column(&mut self, column: usize, collator: &Collator) -> Option<SortState> {
        let col = self.columns.get(column)?;
        if !col.is_sortable() {
            return None;
        }

        let next = SortState::after_click(self.sort, column);
        self.sort = Some(next);
        self.apply_sort(collator);

        Some(next)
    }

    /// Re-sorts the rows in place according to the active sort. Stable, so
    /// ties keep their relative order.
    fn apply_sort(&mut self, collator: &Collator) {
        let Some(SortState { column, order }) = self.sort else {
            return;
        };

        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(a.cell(column), b.cell(column), collator);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    /// Given a click at `(x, y)`, returns the sortable column whose header
    /// span was hit, if any.
    pub fn try_click_header(&self, x: u16, y: u16) -> Option<usize> {
        if self.state.inner_rect.height > 1 && self.state.inner_rect.y == y {
            let index = self.get_range(x)?;
            if self.columns.get(index)?.is_sortable() {
                return Some(index);
            }
        }

        None
    }

    /// Given a click at `(x, y)`, returns the data row that was hit, if
    /// any. Only rows currently drawn count.
    pub fn try_click_row(&self, x: u16, y: u16) -> Option<usize> {
        let inner = self.state.inner_rect;
        if !inner.contains(Position { x, y }) || y <= inner.y {
            return None;
        }

        let row = self.state.display_start_index + usize::from(y - inner.y - 1);
        (row < self.rows.len()).then_some(row)
    }

    /// Given a `needle` coordinate, returns the column whose drawn span
    /// contains it.
    fn get_range(&self, needle: u16) -> Option<usize> {
        let mut start = self.state.inner_rect.x;
        let range = self
            .state
            .calculated_widths
            .iter()
            .map(|width| {
                let entry_start = start;
                start += width.get() + 1; // +1 for the gap b/w cols.

                entry_start
            })
            .collect_vec();

        if needle >= start {
            return None;
        }

        match range.binary_search(&needle) {
            Ok(index) => Some(index),
            Err(index) => index.checked_sub(1),
        }
    }

    /// Increments the scroll position if possible by a positive/negative
    /// offset, returning the new position on change.
    pub fn increment_position(&mut self, change: i64) -> Option<usize> {
        let num_entries = self.rows.len();

        if num_entries == 0 {
            return None;
        }

        let current = self.state.current_index as i64;
        self.state.current_index = (current + change).clamp(0, (num_entries - 1) as i64) as usize;
        self.state.scroll_direction = if change < 0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };

        Some(self.state.current_index)
    }

    /// Updates the scroll position to a selected index.
    pub fn set_position(&mut self, new_index: usize) {
        let new_index = new_index.min(self.rows.len().saturating_sub(1));
        if self.state.current_index < new_index {
            self.state.scroll_direction = ScrollDirection::Down;
        } else if self.state.current_index > new_index {
            self.state.scroll_direction = ScrollDirection::Up;
        }
        self.state.current_index = new_index;
    }

    /// Sets the scroll position to the first row.
    pub fn scroll_to_first(&mut self) {
        self.state.current_index = 0;
        self.state.scroll_direction = ScrollDirection::Up;
    }

    /// Sets the scroll position to the last row.
    pub fn scroll_to_last(&mut self) {
        self.state.current_index = self.rows.len().saturating_sub(1);
        self.state.scroll_direction = ScrollDirection::Down;
    }

    /// Returns the current scroll index.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Optionally returns the currently selected row, if there is one.
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.state.current_index)
    }
}
