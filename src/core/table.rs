use tracing::debug;

use crate::core::{Cell, Row, Table};

/// Extracts a typed table from the raw text of a data container.
///
/// Records are newline-separated; records that are empty after trimming are
/// dropped, retained records are trimmed. Fields split on bare `,` with no
/// quoting or escaping, so a comma inside a value is indistinguishable from a
/// delimiter. That is a documented limitation of the markup format, not
/// something this function tries to repair.
///
/// Irregular row lengths are accepted unchecked; downstream reshaping may
/// then misalign or undershoot rather than fail.
#[must_use]
pub fn extract_table(text: &str) -> Table {
    let rows: Vec<Row> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(Cell::coerce).collect())
        .collect();

    debug!(row_count = rows.len(), "extracted table");
    Table::new(rows)
}
