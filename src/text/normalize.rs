//! Whitespace normalization for matching and cell output.
//!
//! PDF extraction splits and pads text unpredictably, so every comparison
//! in the engine runs on collapsed text. Cell values get the gentler
//! variant that keeps explicit newlines: multi-line values must survive
//! into spreadsheet cells.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for runs of whitespace (including newlines)
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse whitespace runs to single spaces and trim.
///
/// Newlines collapse too; use [`normalize_cell_value`] for text headed
/// into a table cell.
///
/// # Examples
///
/// ```
/// use ledgerlift::text::normalize_text;
///
/// assert_eq!(normalize_text("  सि.नं.   नाम \t ठेगाना "), "सि.नं. नाम ठेगाना");
/// ```
pub fn normalize_text(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Collapse whitespace within each line, preserving explicit newlines.
///
/// Each line is normalized independently; carriage returns disappear with
/// the rest of the intra-line whitespace.
///
/// # Examples
///
/// ```
/// use ledgerlift::text::normalize_cell_value;
///
/// assert_eq!(normalize_cell_value("राम  बहादुर\n  काठमाडौं "), "राम बहादुर\nकाठमाडौं");
/// ```
pub fn normalize_cell_value(text: &str) -> String {
    text.split('\n')
        .map(normalize_text)
        .collect::<Vec<_>>()
        .join("\n")
}
