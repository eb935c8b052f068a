//! Table assembly: mapping rows into inferred columns.

use crate::config::EngineConfig;
use crate::layout::header_detector::{is_header_row, sanitize_header_row};
use crate::layout::record_splitter::is_likely_data_row;
use crate::layout::row::Row;
use crate::text::normalize_cell_value;

/// The assembled rectangular table: row 0 is the header, every row has
/// the same column count.
pub type Table = Vec<Vec<String>>;

/// Map a row's cells into columns delimited by the given stops.
///
/// A cell belongs to the first column whose stop lies strictly beyond
/// the cell's x, or to the last column when no stop does. Cells landing
/// in the same column are space-joined in x-order; every column value
/// passes through [`normalize_cell_value`]. With no stops at all the
/// whole row collapses into a single cell.
pub fn row_to_columns(row: &Row, stops: &[f32]) -> Vec<String> {
    let mut columns: Vec<String> = vec![String::new(); stops.len() + 1];
    for cell in &row.cells {
        let idx = stops
            .iter()
            .position(|&s| cell.x < s)
            .unwrap_or(stops.len());
        if !columns[idx].is_empty() {
            columns[idx].push(' ');
        }
        columns[idx].push_str(&cell.text);
    }
    columns.iter().map(|c| normalize_cell_value(c)).collect()
}

/// Assemble the final table from ordered rows and column stops.
///
/// Row 0 is the sanitized header. Every other row is emitted when it
/// passes the likely-data test; rows that re-match the header phrases
/// (repeated headers on later pages) and non-data noise are skipped.
/// The header row itself is excluded from the data scan by index, so a
/// header that sanitization could not clean is still not emitted twice.
pub fn collect_main_table(
    rows: &[Row],
    stops: &[f32],
    header_index: usize,
    config: &EngineConfig,
) -> Table {
    let mut table = Vec::new();
    if let Some(header) = rows.get(header_index) {
        let sanitized = sanitize_header_row(header, config);
        table.push(row_to_columns(&sanitized, stops));
    }

    for (i, row) in rows.iter().enumerate() {
        if i == header_index || is_header_row(row) {
            continue;
        }
        if !is_likely_data_row(row, config) {
            continue;
        }
        table.push(row_to_columns(row, stops));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::TextFragment;

    fn mock_row(cells: &[(&str, f32)]) -> Row {
        mock_row_at(cells, 700.0, 1)
    }

    fn mock_row_at(cells: &[(&str, f32)], y: f32, page: u32) -> Row {
        let fragments: Vec<TextFragment> = cells
            .iter()
            .map(|(text, x)| TextFragment::new(*text, *x, y, page))
            .collect();
        Row::from_cells(page, y, fragments)
    }

    fn header_row(y: f32, page: u32) -> Row {
        mock_row_at(
            &[
                ("सि.नं.", 0.0),
                ("सदस्यको नाम", 60.0),
                ("ठेगाना", 130.0),
                ("बचत रकम", 210.0),
            ],
            y,
            page,
        )
    }

    fn data_row(serial: &str, id: &str, y: f32, page: u32) -> Row {
        mock_row_at(
            &[
                (serial, 0.0),
                ("राम बहादुर", 60.0),
                (id, 130.0),
                ("1,500.00", 210.0),
            ],
            y,
            page,
        )
    }

    #[test]
    fn test_row_to_columns_partitions_by_stops() {
        let row = mock_row(&[("a", 10.0), ("b", 20.0), ("c", 100.0), ("d", 200.0)]);
        let columns = row_to_columns(&row, &[50.0, 150.0]);
        assert_eq!(columns, vec!["a b", "c", "d"]);
    }

    #[test]
    fn test_row_to_columns_boundary_is_exclusive() {
        // A cell exactly on a stop belongs to the column after it
        let row = mock_row(&[("a", 50.0)]);
        let columns = row_to_columns(&row, &[50.0, 150.0]);
        assert_eq!(columns, vec!["", "a", ""]);
    }

    #[test]
    fn test_row_to_columns_no_stops_collapses_row() {
        let row = mock_row(&[("a", 10.0), ("b", 100.0)]);
        let columns = row_to_columns(&row, &[]);
        assert_eq!(columns, vec!["a b"]);
    }

    #[test]
    fn test_row_to_columns_normalizes_cell_values() {
        let row = mock_row(&[("  a  ", 10.0), ("b ", 20.0)]);
        let columns = row_to_columns(&row, &[]);
        assert_eq!(columns, vec!["a b"]);
    }

    #[test]
    fn test_collect_main_table_shape() {
        let config = EngineConfig::default();
        let rows = vec![
            mock_row_at(&[("बचत तथा ऋण सहकारी", 0.0)], 760.0, 1),
            header_row(740.0, 1),
            data_row("1", "550022050100002/13-14", 720.0, 1),
            data_row("2", "550033060200007/14-15", 700.0, 1),
        ];
        let stops = [30.0, 95.0, 170.0];

        let table = collect_main_table(&rows, &stops, 1, &config);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0], vec!["सि.नं.", "सदस्यको नाम", "ठेगाना", "बचत रकम"]);
        assert_eq!(
            table[1],
            vec!["1", "राम बहादुर", "550022050100002/13-14", "1,500.00"]
        );
        assert_eq!(table[2][0], "2");
        // Every row matches the header's column count
        assert!(table.iter().all(|r| r.len() == table[0].len()));
    }

    #[test]
    fn test_collect_main_table_skips_repeated_headers() {
        let config = EngineConfig::default();
        let rows = vec![
            header_row(740.0, 1),
            data_row("1", "550022050100002/13-14", 720.0, 1),
            header_row(740.0, 2),
            data_row("2", "550033060200007/14-15", 720.0, 2),
        ];
        let stops = [30.0, 95.0, 170.0];

        let table = collect_main_table(&rows, &stops, 0, &config);
        assert_eq!(table.len(), 3);
        assert_eq!(table[1][0], "1");
        assert_eq!(table[2][0], "2");
    }

    #[test]
    fn test_collect_main_table_skips_non_data_rows() {
        let config = EngineConfig::default();
        let rows = vec![
            header_row(740.0, 1),
            mock_row_at(&[("जम्मा", 0.0), ("12,345.00", 210.0)], 720.0, 1),
            data_row("1", "550022050100002/13-14", 700.0, 1),
        ];
        let stops = [30.0, 95.0, 170.0];

        let table = collect_main_table(&rows, &stops, 0, &config);
        assert_eq!(table.len(), 2);
        assert_eq!(table[1][0], "1");
    }
}
