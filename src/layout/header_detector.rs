//! Header row location and cleanup.
//!
//! The header is found by keyword match against the Nepali column labels
//! these ledgers use. Headers sometimes get visually merged with the
//! first data record, so the sanitizer strips cells that look like data
//! (member IDs, bare serials, free text) and keeps only label tokens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::EngineConfig;
use crate::layout::record_splitter::{is_serial_number, looks_like_member_id};
use crate::layout::row::Row;
use crate::text::normalize_text;

/// Phrases whose presence in a row's joined text marks it as the header.
const HEADER_PHRASES: &[&str] = &["सि.नं", "सि नं", "क्र.सं", "सक्रिय नं", "सदस्यको नाम"];

lazy_static! {
    /// Column-label fragments for the token-level header test
    static ref RE_HEADER_KEYWORD: Regex =
        Regex::new("(सि|नं|क्र|सक्रिय|सदस्य|नाम|ठेगाना|बचत|रकम|मिति|कैफियत|जम्मा)").unwrap();
}

/// True if the row's joined, normalized text contains a header phrase.
pub fn is_header_row(row: &Row) -> bool {
    let text = row.joined_text();
    HEADER_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Index of the first header row in document order, if any.
pub fn find_header_row_index(rows: &[Row]) -> Option<usize> {
    rows.iter().position(is_header_row)
}

/// True for a cell that carries header-label text rather than data.
///
/// Member IDs and bare serial numbers are excluded even when they sit
/// inside a row that matched the header phrases.
pub fn is_header_like_token(text: &str) -> bool {
    let normalized = normalize_text(text);
    RE_HEADER_KEYWORD.is_match(&normalized)
        && !looks_like_member_id(&normalized)
        && !is_serial_number(&normalized)
}

/// Strip non-label cells from a header row.
///
/// Reverts to the original row when fewer than
/// [`min_header_tokens`](EngineConfig::min_header_tokens) label cells
/// remain, so sanitization never erases most of the header signal.
pub fn sanitize_header_row(row: &Row, config: &EngineConfig) -> Row {
    let kept: Vec<_> = row
        .cells
        .iter()
        .filter(|c| is_header_like_token(&c.text))
        .cloned()
        .collect();
    if kept.len() < config.min_header_tokens {
        return row.clone();
    }
    Row::from_cells(row.page, row.y, kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::TextFragment;

    fn mock_row(cells: &[(&str, f32)]) -> Row {
        let fragments: Vec<TextFragment> = cells
            .iter()
            .map(|(text, x)| TextFragment::new(*text, *x, 700.0, 1))
            .collect();
        Row::from_cells(1, 700.0, fragments)
    }

    fn header_row() -> Row {
        mock_row(&[
            ("सि.नं.", 0.0),
            ("सक्रिय नं.", 40.0),
            ("सदस्यको नाम", 110.0),
            ("ठेगाना", 200.0),
            ("बचत रकम", 270.0),
        ])
    }

    fn data_row() -> Row {
        mock_row(&[
            ("1", 0.0),
            ("राम बहादुर", 40.0),
            ("550022050100002/13-14", 110.0),
            ("काठमाडौं", 200.0),
            ("1,500.00", 270.0),
        ])
    }

    #[test]
    fn test_is_header_row() {
        assert!(is_header_row(&header_row()));
        assert!(!is_header_row(&data_row()));
    }

    #[test]
    fn test_header_detected_from_split_label_tokens() {
        // "सि" and "नं" extracted as separate fragments still join into
        // a matching phrase
        let row = mock_row(&[("सि", 0.0), ("नं", 12.0), ("नाम", 60.0), ("ठेगाना", 120.0)]);
        assert!(is_header_row(&row));
    }

    #[test]
    fn test_find_header_row_index() {
        let rows = vec![
            mock_row(&[("बचत तथा ऋण सहकारी संस्था", 0.0)]),
            header_row(),
            data_row(),
        ];
        assert_eq!(find_header_row_index(&rows), Some(1));
    }

    #[test]
    fn test_find_header_row_index_none() {
        let rows = vec![data_row(), data_row()];
        assert_eq!(find_header_row_index(&rows), None);
    }

    #[test]
    fn test_header_like_token() {
        assert!(is_header_like_token("सि.नं."));
        assert!(is_header_like_token("सदस्यको नाम"));
        assert!(is_header_like_token("कैफियत"));
        assert!(!is_header_like_token("राम बहादुर"));
        assert!(!is_header_like_token("550022050100002/13-14"));
        assert!(!is_header_like_token("12"));
    }

    #[test]
    fn test_sanitize_strips_merged_data_cells() {
        // Header row that absorbed the first data record
        let mut cells = header_row().cells;
        cells.extend(data_row().cells.into_iter().map(|mut c| {
            c.x += 400.0;
            c
        }));
        let merged = Row::from_cells(1, 700.0, cells);

        let sanitized = sanitize_header_row(&merged, &EngineConfig::default());
        assert_eq!(sanitized.cells.len(), 5);
        assert!(sanitized.cells.iter().all(|c| is_header_like_token(&c.text)));
    }

    #[test]
    fn test_sanitize_reverts_when_too_few_tokens_remain() {
        let row = mock_row(&[
            ("सि.नं.", 0.0),
            ("नाम", 40.0),
            ("1", 110.0),
            ("550022050100002", 200.0),
            ("राम", 270.0),
        ]);
        let sanitized = sanitize_header_row(&row, &EngineConfig::default());
        assert_eq!(sanitized, row);
    }
}
