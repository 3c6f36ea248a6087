//! Rendering the tables to the terminal.
//!
//! Each table gets an equal horizontal slice of the frame. The draw pass
//! also records where each table actually landed (inner rect and column
//! widths) into its state, which is what mouse hit-testing reads back.

use std::iter::once;

use concat_string::concat_string;
use tui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    app::App,
    table::{SortTable, calculate_column_widths},
    utils::strings::truncate_to_text,
};

pub struct CanvasStyles {
    pub header_style: Style,
    pub active_header_style: Style,
    pub border_style: Style,
    pub highlighted_border_style: Style,
    pub text_style: Style,
    pub highlighted_text_style: Style,
    pub title_style: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        Self {
            header_style: Style::default().add_modifier(Modifier::BOLD),
            active_header_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default(),
            highlighted_border_style: Style::default().fg(Color::LightBlue),
            text_style: Style::default(),
            highlighted_text_style: Style::default().add_modifier(Modifier::REVERSED),
            title_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

#[derive(Default)]
pub struct Painter {
    pub styles: CanvasStyles,
}

impl Painter {
    pub fn draw(&self, f: &mut Frame<'_>, app: &mut App) {
        if app.tables.is_empty() {
            return;
        }

        let num_tables = app.tables.len();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, num_tables as u32); num_tables])
            .split(f.area());

        let selected = app.selected_table();
        for (index, (table, area)) in app.tables.iter_mut().zip(chunks.iter()).enumerate() {
            self.draw_table(f, table, *area, index == selected);
        }
    }

    fn draw_table(&self, f: &mut Frame<'_>, table: &mut SortTable, area: Rect, is_selected: bool) {
        let border_style = if is_selected {
            self.styles.highlighted_border_style
        } else {
            self.styles.border_style
        };

        let title = concat_string!(" ", table.id(), " ");
        let block = Block::bordered()
            .border_style(border_style)
            .title_top(Line::styled(title, self.styles.title_style));

        let inner = block.inner(area);
        table.state.inner_rect = inner;

        if inner.width == 0 || inner.height == 0 {
            f.render_widget(block, area);
            return;
        }

        if !table.is_interactive() {
            let widget = Table::new(
                once(Row::new(Text::raw("No data"))),
                [Constraint::Percentage(100)],
            )
            .block(block)
            .style(self.styles.text_style);
            f.render_widget(widget, area);
            return;
        }

        table.state.calculated_widths =
            calculate_column_widths(table.columns(), table.rows(), inner.width);

        let show_header = inner.height > 1;
        let header_height = u16::from(show_header);
        let num_rows = usize::from(inner.height.saturating_sub(header_height));

        if num_rows > 0 {
            table.state.update_start_position(num_rows);
        }
        let start = table.state.display_start_index;
        let end = (start + num_rows).min(table.rows().len());

        let header = self.build_header(table);
        let rows: Vec<Row<'static>> = table.rows()[start..end]
            .iter()
            .map(|data_row| {
                Row::new(
                    table
                        .state
                        .calculated_widths
                        .iter()
                        .enumerate()
                        .map(|(index, &width)| {
                            Cell::new(truncate_to_text(data_row.cell(index).trim(), width.get()))
                        }),
                )
            })
            .collect();

        table
            .state
            .table_state
            .select(Some(table.state.current_index.saturating_sub(start)));

        let highlight_style = if is_selected {
            self.styles.highlighted_text_style
        } else {
            self.styles.text_style
        };

        let mut widget = Table::new(
            rows,
            table.state.calculated_widths.iter().map(|nzu| nzu.get()),
        )
        .block(block)
        .row_highlight_style(highlight_style)
        .style(self.styles.text_style);

        if show_header {
            widget = widget.header(header);
        }

        f.render_stateful_widget(widget, area, &mut table.state.table_state);
    }

    /// Builds the header row: each sortable column gets its indicator glyph
    /// after the name, with emphasis on the active one.
    fn build_header(&self, table: &SortTable) -> Row<'static> {
        let active_column = table.sort().map(|state| state.column);

        Row::new(
            table
                .columns()
                .iter()
                .zip(&table.state.calculated_widths)
                .enumerate()
                .map(|(index, (column, &width))| {
                    match table.indicator(index) {
                        Some(glyph) => {
                            let glyph_style = if active_column == Some(index) {
                                self.styles.active_header_style
                            } else {
                                self.styles.header_style
                            };

                            // Truncate the name but always leave the glyph
                            // at the end.
                            let name_width = usize::from(width.get()).saturating_sub(2);
                            let name = unicode_ellipsis::truncate_str(column.name(), name_width);

                            Cell::new(Line::from(vec![
                                Span::raw(concat_string!(name, " ")),
                                Span::styled(glyph, glyph_style),
                            ]))
                        }
                        None => Cell::new(truncate_to_text(column.name(), width.get())),
                    }
                }),
        )
        .style(self.styles.header_style)
    }
}
