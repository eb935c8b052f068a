//! End-to-end extraction pipeline.
//!
//! [`TableExtractor`] wires the stages together: legacy-text decoding,
//! row grouping, multi-record splitting, header location, column
//! inference, and table assembly. The only hard failures are an empty
//! input and a missing header row; every heuristic stage degrades
//! instead of failing, reporting through [`ExtractionWarning`].

use std::fmt;

use crate::config::EngineConfig;
use crate::csv::{to_csv, to_csv_with_bom};
use crate::error::{Error, Result};
use crate::fragment::TextFragment;
use crate::layout::{
    explode_multi_record_rows, find_header_row_index, group_into_rows,
    infer_column_stops_from_data_rows, sanitize_header_row,
};
use crate::table::{collect_main_table, Table};
use crate::text::maybe_preeti_to_unicode;

/// Non-fatal conditions surfaced alongside a successful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionWarning {
    /// Column inference found too few boundaries and the table was
    /// assembled as a single column.
    SingleColumnFallback,
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::SingleColumnFallback => {
                write!(f, "column inference failed; table assembled as a single column")
            }
        }
    }
}

/// A completed extraction: the table plus how it was derived.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExtraction {
    /// Assembled table; row 0 is the header.
    pub table: Table,
    /// Column stops the assembly used, ascending. Empty means the
    /// single-column fallback was taken.
    pub column_stops: Vec<f32>,
    /// Non-fatal conditions encountered along the way.
    pub warnings: Vec<ExtractionWarning>,
}

impl TableExtraction {
    /// Serialize the table as CSV.
    pub fn to_csv(&self) -> String {
        to_csv(&self.table)
    }

    /// Serialize the table as CSV with a UTF-8 byte-order mark.
    pub fn to_csv_with_bom(&self) -> String {
        to_csv_with_bom(&self.table)
    }
}

/// The table reconstruction engine.
///
/// Holds an [`EngineConfig`] and runs the full pipeline over a bag of
/// positioned text fragments. Stateless between calls: extracting twice
/// from the same input yields the same output.
///
/// # Examples
///
/// ```
/// use ledgerlift::{TableExtractor, TextFragment};
///
/// let fragments = vec![
///     TextFragment::new("सि.नं.", 0.0, 740.0, 1),
///     TextFragment::new("सदस्यको नाम", 60.0, 740.0, 1),
///     TextFragment::new("ठेगाना", 130.0, 740.0, 1),
///     TextFragment::new("बचत", 210.0, 740.0, 1),
///     TextFragment::new("1", 0.0, 720.0, 1),
///     TextFragment::new("राम बहादुर", 60.0, 720.0, 1),
///     TextFragment::new("550022050100002/13-14", 130.0, 720.0, 1),
///     TextFragment::new("1,500.00", 210.0, 720.0, 1),
/// ];
/// let extraction = TableExtractor::new().extract(fragments)?;
/// assert_eq!(extraction.table[0][0], "सि.नं.");
/// # Ok::<(), ledgerlift::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableExtractor {
    config: EngineConfig,
}

impl TableExtractor {
    /// Create an extractor with the default configuration.
    pub fn new() -> Self {
        TableExtractor {
            config: EngineConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        TableExtractor { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline over a bag of fragments.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] when `fragments` is empty, and
    /// [`Error::HeaderNotFound`] when no row matches the header
    /// phrases. Heuristic degradation is never an error; see
    /// [`TableExtraction::warnings`].
    pub fn extract(&self, fragments: Vec<TextFragment>) -> Result<TableExtraction> {
        if fragments.is_empty() {
            return Err(Error::EmptyInput);
        }

        let decoded: Vec<TextFragment> = fragments
            .into_iter()
            .map(|mut f| {
                f.text = maybe_preeti_to_unicode(&f.text);
                f
            })
            .collect();

        let rows = group_into_rows(decoded, &self.config);
        let rows = explode_multi_record_rows(rows, &self.config);
        log::debug!("grouped input into {} rows", rows.len());

        let header_index = find_header_row_index(&rows).ok_or(Error::HeaderNotFound)?;
        log::debug!("header row at index {}", header_index);

        let header = sanitize_header_row(&rows[header_index], &self.config);
        let column_stops = infer_column_stops_from_data_rows(&rows, &header, &self.config);

        let mut warnings = Vec::new();
        if column_stops.is_empty() {
            log::warn!("no column boundaries inferred; emitting a single-column table");
            warnings.push(ExtractionWarning::SingleColumnFallback);
        }

        let table = collect_main_table(&rows, &column_stops, header_index, &self.config);
        Ok(TableExtraction {
            table,
            column_stops,
            warnings,
        })
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        TableExtractor::new()
    }
}
