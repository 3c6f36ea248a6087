//! Scroll and layout state for a table.

use std::num::NonZeroU16;

use tui::{layout::Rect, widgets::TableState};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,

    #[default]
    Down,
}

/// Internal state of a [`SortTable`](super::SortTable), written by the draw
/// pass and read back for mouse hit-testing.
pub struct SortTableState {
    /// The index from where to start displaying the rows.
    pub display_start_index: usize,

    /// The current scroll position.
    pub current_index: usize,

    /// The direction of the last attempted scroll.
    pub scroll_direction: ScrollDirection,

    /// ratatui's internal table state.
    pub table_state: TableState,

    /// The column widths from the last draw.
    pub calculated_widths: Vec<NonZeroU16>,

    /// The inner [`Rect`] from the last draw. Empty until the table has
    /// been drawn once.
    pub inner_rect: Rect,
}

impl Default for SortTableState {
    fn default() -> Self {
        Self {
            display_start_index: 0,
            current_index: 0,
            scroll_direction: ScrollDirection::Down,
            table_state: TableState::default(),
            calculated_widths: vec![],
            inner_rect: Rect::default(),
        }
    }
}

impl SortTableState {
    /// Updates the starting position so that the current index stays
    /// visible within `num_rows` drawn rows.
    pub fn update_start_position(&mut self, num_rows: usize) {
        let start_index = self.display_start_index;
        let current = self.current_index;

        self.display_start_index = match self.scroll_direction {
            ScrollDirection::Down => {
                if current < start_index + num_rows {
                    // Still visible from the previous start; keep it.
                    start_index
                } else if current >= num_rows {
                    // Scrolled past the window; shift down until visible.
                    current - num_rows + 1
                } else {
                    0
                }
            }
            ScrollDirection::Up => {
                if current <= start_index {
                    current
                } else if current >= start_index + num_rows {
                    current - num_rows + 1
                } else {
                    start_index
                }
            }
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_start_position_follows_downward_scroll() {
        let mut state = SortTableState::default();
        state.current_index = 9;
        state.scroll_direction = ScrollDirection::Down;

        state.update_start_position(5);
        assert_eq!(state.display_start_index, 5);

        // Scrolling back up within the window does not move the start.
        state.current_index = 6;
        state.scroll_direction = ScrollDirection::Up;
        state.update_start_position(5);
        assert_eq!(state.display_start_index, 5);

        // Scrolling above the window does.
        state.current_index = 2;
        state.update_start_position(5);
        assert_eq!(state.display_start_index, 2);
    }
}
