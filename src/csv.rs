//! CSV serialization of the assembled table.
//!
//! RFC 4180-style escaping, kept deliberately mechanical: this layer
//! knows nothing about headers or columns, it only joins and escapes.

/// UTF-8 byte-order mark, prepended for spreadsheet compatibility.
///
/// Desktop spreadsheet applications assume a legacy encoding for plain
/// CSV; the BOM makes them read the Devanagari output correctly.
pub const UTF8_BOM: &str = "\u{feff}";

/// Serialize the table as CSV text with a trailing newline.
///
/// Cells containing a comma, double quote, or line break are quoted,
/// with embedded quotes doubled. CRLF and CR inside cells are normalized
/// to LF before quoting. A cell that starts with U+FEFF is quoted too:
/// unquoted at the start of the stream it would read back as a
/// byte-order mark instead of data.
///
/// # Examples
///
/// ```
/// use ledgerlift::csv::to_csv;
///
/// let table = vec![
///     vec!["सि.नं.".to_string(), "नाम".to_string()],
///     vec!["1".to_string(), "राम, \"श्याम\"".to_string()],
/// ];
/// assert_eq!(to_csv(&table), "सि.नं.,नाम\n1,\"राम, \"\"श्याम\"\"\"\n");
/// ```
pub fn to_csv(table: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in table {
        let escaped: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

/// Serialize the table as CSV prefixed with [`UTF8_BOM`].
pub fn to_csv_with_bom(table: &[Vec<String>]) -> String {
    format!("{}{}", UTF8_BOM, to_csv(table))
}

fn escape_cell(cell: &str) -> String {
    let normalized = cell.replace("\r\n", "\n").replace('\r', "\n");
    // BOM-sniffing readers strip a leading U+FEFF at stream start;
    // quoting keeps it cell data
    let needs_quotes = normalized.contains(',')
        || normalized.contains('"')
        || normalized.contains('\n')
        || normalized.starts_with('\u{feff}');
    if needs_quotes {
        format!("\"{}\"", normalized.replace('"', "\"\""))
    } else {
        normalized
    }
}
