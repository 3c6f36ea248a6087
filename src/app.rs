//! Application state.

use anyhow::{Context, Result};
use icu_collator::Collator;

use crate::table::{SortTable, russian_collator};

/// Main application state, owning every loaded table.
pub struct App {
    pub tables: Vec<SortTable>,
    selected_table: usize,
    collator: Collator,
}

impl App {
    pub fn new(tables: Vec<SortTable>) -> Result<Self> {
        let collator = russian_collator()
            .map_err(anyhow::Error::msg)
            .context("Unable to build the Russian collator.")?;

        // Focus the first table that can actually be interacted with.
        let selected_table = tables
            .iter()
            .position(|table| table.is_interactive())
            .unwrap_or(0);

        Ok(Self {
            tables,
            selected_table,
            collator,
        })
    }

    /// The index of the focused table.
    pub fn selected_table(&self) -> usize {
        self.selected_table
    }

    fn selected_table_mut(&mut self) -> Option<&mut SortTable> {
        self.tables.get_mut(self.selected_table)
    }

    /// Handles a left click at `(x, y)`: a hit on a sortable header sorts
    /// that table by that column, a hit on a data row selects it, and
    /// anything else is a no-op.
    pub fn on_left_mouse_up(&mut self, x: u16, y: u16) {
        for index in 0..self.tables.len() {
            let table = &mut self.tables[index];
            if !table.is_interactive() {
                continue;
            }

            if let Some(column) = table.try_click_header(x, y) {
                table.sort_by_column(column, &self.collator);
                self.selected_table = index;
                return;
            }

            if let Some(row) = table.try_click_row(x, y) {
                table.set_position(row);
                self.selected_table = index;
                return;
            }
        }
    }

    pub fn handle_scroll_up(&mut self) {
        if let Some(table) = self.selected_table_mut() {
            table.increment_position(-1);
        }
    }

    pub fn handle_scroll_down(&mut self) {
        if let Some(table) = self.selected_table_mut() {
            table.increment_position(1);
        }
    }

    pub fn on_up_key(&mut self) {
        self.handle_scroll_up();
    }

    pub fn on_down_key(&mut self) {
        self.handle_scroll_down();
    }

    pub fn skip_to_first(&mut self) {
        if let Some(table) = self.selected_table_mut() {
            table.scroll_to_first();
        }
    }

    pub fn skip_to_last(&mut self) {
        if let Some(table) = self.selected_table_mut() {
            table.scroll_to_last();
        }
    }

    /// Cycles focus to the next interactive table, wrapping around.
    pub fn on_tab(&mut self) {
        if self.tables.is_empty() {
            return;
        }

        for offset in 1..=self.tables.len() {
            let candidate = (self.selected_table + offset) % self.tables.len();
            if self.tables[candidate].is_interactive() {
                self.selected_table = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU16;

    use tui::layout::Rect;

    use super::*;
    use crate::table::{Column, DOWN_ARROW, NEUTRAL_ARROW, Row, UP_ARROW};

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    fn drawn_table(id: &str, y: u16) -> SortTable {
        let mut table = SortTable::new(
            id,
            vec![Column::new("n")],
            vec![row(&["10"]), row(&["2"]), row(&["33"])],
        );
        table.state.inner_rect = Rect::new(0, y, 20, 6);
        table.state.calculated_widths = vec![NonZeroU16::new(19).unwrap()];
        table
    }

    #[test]
    fn test_click_dispatches_to_the_right_table() {
        let mut app = App::new(vec![drawn_table("one", 0), drawn_table("two", 10)]).unwrap();

        // Header of the second table.
        app.on_left_mouse_up(5, 10);
        assert_eq!(app.selected_table(), 1);
        assert_eq!(app.tables[1].indicator(0), Some(DOWN_ARROW));
        assert_eq!(app.tables[0].indicator(0), Some(NEUTRAL_ARROW));

        // Clicking again toggles to ascending.
        app.on_left_mouse_up(5, 10);
        assert_eq!(app.tables[1].indicator(0), Some(UP_ARROW));
    }

    #[test]
    fn test_click_on_row_selects_it() {
        let mut app = App::new(vec![drawn_table("one", 0)]).unwrap();

        app.on_left_mouse_up(3, 2);
        assert_eq!(app.tables[0].current_index(), 1);
        assert_eq!(app.tables[0].sort(), None);
    }

    #[test]
    fn test_click_outside_everything_is_a_no_op() {
        let mut app = App::new(vec![drawn_table("one", 0)]).unwrap();

        app.on_left_mouse_up(50, 50);
        assert_eq!(app.tables[0].sort(), None);
        assert_eq!(app.tables[0].current_index(), 0);
    }

    #[test]
    fn test_tab_skips_non_interactive_tables() {
        let empty = SortTable::new("empty", vec![], vec![]);
        let mut app =
            App::new(vec![drawn_table("one", 0), empty, drawn_table("three", 10)]).unwrap();

        assert_eq!(app.selected_table(), 0);
        app.on_tab();
        assert_eq!(app.selected_table(), 2);
        app.on_tab();
        assert_eq!(app.selected_table(), 0);
    }
}
