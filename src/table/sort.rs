//! Sort state and the cell comparator.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorError, CollatorOptions};
use icu_locid::locale;

/// Denotes the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the reverse [`SortOrder`].
    pub fn rev(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

/// The active sort of a table: which column, and in which order.
///
/// A table has at most one of these; every header's indicator is derived
/// from it, so exactly one column can ever show as active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub order: SortOrder,
}

impl SortState {
    /// Returns the sort state after a click on `column`.
    ///
    /// Clicking the active column toggles its order. A column with no
    /// active sort is treated as implicitly ascending, so the first click
    /// on any column yields a descending sort.
    pub fn after_click(current: Option<SortState>, column: usize) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                order: state.order.rev(),
            },
            _ => SortState {
                column,
                order: SortOrder::Descending,
            },
        }
    }
}

/// Builds the collator used for the string fallback of [`compare_cells`].
///
/// Russian collation rules order both Cyrillic and Latin text sensibly,
/// unlike raw codepoint comparison.
pub fn russian_collator() -> Result<Collator, CollatorError> {
    Collator::try_new(&locale!("ru").into(), CollatorOptions::new())
}

/// Compares two cell values in ascending order.
///
/// Values are trimmed first. If both parse fully as floats they compare
/// numerically; otherwise they compare with the Russian collator, under
/// which the empty string sorts lowest.
pub fn compare_cells(a: &str, b: &str, collator: &Collator) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => collator.compare(a, b),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_first_click_goes_descending() {
        let state = SortState::after_click(None, 2);
        assert_eq!(
            state,
            SortState {
                column: 2,
                order: SortOrder::Descending
            }
        );
    }

    #[test]
    fn test_second_click_toggles() {
        let first = SortState::after_click(None, 0);
        let second = SortState::after_click(Some(first), 0);
        assert_eq!(second.order, SortOrder::Ascending);

        let third = SortState::after_click(Some(second), 0);
        assert_eq!(third.order, SortOrder::Descending);
    }

    #[test]
    fn test_click_on_other_column_starts_over() {
        let first = SortState::after_click(None, 0);
        let second = SortState::after_click(Some(first), 0);
        assert_eq!(second.order, SortOrder::Ascending);

        // Moving to a new column does not inherit the old order.
        let moved = SortState::after_click(Some(second), 1);
        assert_eq!(
            moved,
            SortState {
                column: 1,
                order: SortOrder::Descending
            }
        );
    }

    #[test]
    fn test_numeric_comparison() {
        let collator = russian_collator().unwrap();

        assert_eq!(compare_cells("2", "10", &collator), Ordering::Less);
        assert_eq!(compare_cells("33", "10", &collator), Ordering::Greater);
        assert_eq!(compare_cells(" 5 ", "5", &collator), Ordering::Equal);
        assert_eq!(compare_cells("-1.5", "0.25", &collator), Ordering::Less);
    }

    #[test]
    fn test_mixed_values_fall_back_to_text() {
        let collator = russian_collator().unwrap();

        // "10" vs "10a": only one side is fully numeric, so both compare
        // as text.
        assert_eq!(compare_cells("10", "10a", &collator), Ordering::Less);
        assert_eq!(compare_cells("abc", "2", &collator), Ordering::Greater);
    }

    #[test]
    fn test_russian_collation_not_codepoint_order() {
        let collator = russian_collator().unwrap();

        // Case-aware: "Апельсин" sorts before lowercase "банан".
        assert_eq!(
            compare_cells("Апельсин", "банан", &collator),
            Ordering::Less
        );
        assert_eq!(compare_cells("банан", "яблоко", &collator), Ordering::Less);

        // "ё" collates between "е" and "ж", although its codepoint is far
        // past both.
        assert_eq!(compare_cells("еда", "ёж", &collator), Ordering::Less);
        assert_eq!(compare_cells("ёж", "жук", &collator), Ordering::Less);
    }

    #[test]
    fn test_empty_string_sorts_lowest() {
        let collator = russian_collator().unwrap();

        assert_eq!(compare_cells("", "а", &collator), Ordering::Less);
        assert_eq!(compare_cells("", "0", &collator), Ordering::Less);
        assert_eq!(compare_cells("", "", &collator), Ordering::Equal);
    }
}
