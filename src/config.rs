//! Configuration for the reconstruction heuristics.
//!
//! Every gap, tolerance and floor the engine uses is a named field here
//! rather than a buried constant. The defaults were tuned empirically
//! against one family of cooperative ledger layouts; other layouts are
//! expected to need different values, not code changes.

/// Tunable thresholds for the table reconstruction pipeline.
///
/// All distances are in page-space units (PDF points for typical inputs).
/// The defaults match the ledger family the engine was tuned on; none of
/// them is derived from document metadata.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum baseline distance for a fragment to join an existing row.
    pub y_tolerance: f32,

    /// Tolerance when clustering member-ID x-positions (splitter strategy 1).
    pub id_cluster_tolerance: f32,

    /// Minimum gap between adjacent member-ID clusters before a row is
    /// treated as holding several records.
    pub id_split_gap: f32,

    /// How far left of a member ID to look for its serial number
    /// (splitter strategy 2).
    pub serial_search_window: f32,

    /// Minimum gap to the preceding cell for a serial to count as a record
    /// start; rejects numeric codes sitting flush against other cells
    /// (splitter strategy 3).
    pub record_start_min_gap: f32,

    /// How far right of a candidate record start a member ID must appear
    /// (splitter strategy 3).
    pub member_id_lookahead: f32,

    /// Tolerance when clustering candidate record-start x-positions.
    pub start_cluster_tolerance: f32,

    /// Minimum gap between adjacent record-start clusters before a split
    /// happens; guards against narrow intra-record spacing.
    pub start_split_gap: f32,

    /// Minimum cells a split-off block must keep to be emitted as a row.
    pub min_record_cells: usize,

    /// Minimum header-like tokens that must survive sanitization before the
    /// sanitized header replaces the original.
    pub min_header_tokens: usize,

    /// Minimum x-advance between header cells that open distinct columns;
    /// coalesces multi-token labels into one column.
    pub header_column_gap: f32,

    /// Minimum x-advance between recorded column starts within one data row.
    pub data_column_gap: f32,

    /// Tolerance when clustering pooled column starts across sampled rows.
    pub column_cluster_tolerance: f32,

    /// Maximum number of likely-data rows sampled for column inference.
    pub column_sample_size: usize,

    /// Absolute floor on cluster membership for a column start to count.
    pub min_cluster_count: usize,

    /// Relative floor: a cluster must hold at least this share of the
    /// sampled rows.
    pub cluster_significance_ratio: f32,

    /// Distance within which the header's rightmost cell is considered
    /// already covered by an inferred column.
    pub trailing_column_tolerance: f32,

    /// Minimum cell count for a row to be classified as likely data.
    pub min_data_row_cells: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            id_cluster_tolerance: 40.0,
            id_split_gap: 160.0,
            serial_search_window: 260.0,
            record_start_min_gap: 60.0,
            member_id_lookahead: 320.0,
            start_cluster_tolerance: 18.0,
            start_split_gap: 140.0,
            min_record_cells: 4,
            min_header_tokens: 4,
            header_column_gap: 34.0,
            data_column_gap: 8.0,
            column_cluster_tolerance: 4.0,
            column_sample_size: 30,
            min_cluster_count: 3,
            cluster_significance_ratio: 0.2,
            trailing_column_tolerance: 8.0,
            min_data_row_cells: 4,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the tuned defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the row-grouping baseline tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Override the sample size for data-row column inference.
    pub fn with_column_sample_size(mut self, size: usize) -> Self {
        self.column_sample_size = size;
        self
    }
}
