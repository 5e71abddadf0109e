//! Row-limited preview of a dataset

use super::panel::{BorderStyle, Cell, CellStyle, Panel, PanelKind, Table, TableColumn};
use crate::dataset::Dataset;
use crate::format::format_scalar;

/// Rows shown by the standalone table view
pub const DEFAULT_TABLE_ROWS: usize = 20;

/// Longest string cell kept before truncation
pub const DEFAULT_CELL_MAX_CHARS: usize = 50;

/// Column width beyond which cells are cut with an ellipsis
const COLUMN_MAX_WIDTH: usize = 20;

/// Marker for a null cell
pub const NULL_MARKER: &str = "NULL";

/// Preview table with the default cell length
pub fn data_table(dataset: &Dataset, title: &str, max_rows: usize) -> Panel {
    data_table_with(dataset, title, max_rows, DEFAULT_CELL_MAX_CHARS)
}

/// Preview of the first `max_rows` rows.
///
/// The title reports how many rows are shown out of the total.
pub fn data_table_with(
    dataset: &Dataset,
    title: &str,
    max_rows: usize,
    cell_max_chars: usize,
) -> Panel {
    if dataset.is_empty() {
        return Panel::placeholder(Some(title), "No data available", CellStyle::Error);
    }

    let shown = max_rows.min(dataset.row_count());
    let full_title = format!(
        "{} (showing {} of {} rows)",
        title,
        shown,
        dataset.row_count()
    );

    let mut table = Table::new().with_header_style(CellStyle::HeadingAlt);
    for name in dataset.column_names() {
        table.add_column(TableColumn::new(name).max_width(COLUMN_MAX_WIDTH));
    }

    for row in dataset.rows().take(shown) {
        let cells = row
            .into_iter()
            .map(|value| match format_scalar(value, cell_max_chars) {
                Some(text) => Cell::new(text),
                None => Cell::styled(NULL_MARKER, CellStyle::Dim),
            })
            .collect();
        table.add_row(cells);
    }

    Panel::table(PanelKind::Table, Some(&full_title), table).with_border(BorderStyle::Cyan)
}
