//! Table columns and column width calculation.

use std::{cmp::max, num::NonZeroU16};

use unicode_width::UnicodeWidthStr;

use super::Row;

/// A column header of a [`SortTable`](super::SortTable).
#[derive(Clone, Debug)]
pub struct Column {
    name: String,

    /// Whether clicks on this header trigger a sort. Unsortable columns
    /// also get no indicator glyph.
    sortable: bool,
}

impl Column {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            sortable: true,
        }
    }

    pub fn unsortable<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            sortable: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The width of the drawn header: the name, plus a space and the
    /// indicator glyph for sortable columns.
    pub fn header_len(&self) -> usize {
        let name_width = UnicodeWidthStr::width(self.name.as_str());
        if self.sortable {
            name_width + 2
        } else {
            name_width
        }
    }
}

/// Calculates widths for the columns of a table, given the total width
/// available when called.
///
/// Each column asks for enough room for its header and its widest cell;
/// columns are allocated left-to-right with a one-cell gap until space runs
/// out, and any leftover space is redistributed across the allocated
/// columns.
pub fn calculate_column_widths(
    columns: &[Column], rows: &[Row], total_width: u16,
) -> Vec<NonZeroU16> {
    const COLUMN_SPACING: u16 = 1;

    let mut total_width_left = total_width;
    let mut calculated_widths: Vec<NonZeroU16> = vec![];

    for (index, column) in columns.iter().enumerate() {
        let desired = rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.cell(index).trim()))
            .fold(column.header_len(), max)
            .min(u16::MAX as usize) as u16;

        let Some(width) = NonZeroU16::new(desired.min(total_width_left)) else {
            break;
        };

        total_width_left = total_width_left.saturating_sub(width.get() + COLUMN_SPACING);
        calculated_widths.push(width);
    }

    // Redistribute remaining space.
    if !calculated_widths.is_empty() {
        let mut num_dist = calculated_widths.len() as u16;
        let amount_per_slot = total_width_left / num_dist;
        total_width_left %= num_dist;

        for width in calculated_widths.iter_mut() {
            if total_width_left > 0 {
                *width = width.saturating_add(amount_per_slot + 1);
                total_width_left -= 1;
            } else {
                *width = width.saturating_add(amount_per_slot);
            }

            num_dist -= 1;
            if num_dist == 0 {
                break;
            }
        }
    }

    calculated_widths
}
