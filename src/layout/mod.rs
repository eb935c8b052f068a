//! Layout analysis: from positioned fragments to ordered table rows.
//!
//! This module holds the geometric half of the engine:
//! - row grouping by vertical proximity (running-centroid clustering)
//! - multi-record row detection and splitting
//! - header row location and sanitization
//! - statistical column-boundary inference
//!
//! Everything here fails safe: a heuristic that does not reach its
//! confidence thresholds leaves its input unchanged instead of raising.

pub mod clustering;
pub mod column_inference;
pub mod header_detector;
pub mod record_splitter;
pub mod row;

pub use clustering::{cluster_positions, document_order, group_into_rows, PositionCluster};
pub use column_inference::{infer_column_stops_from_data_rows, infer_column_stops_from_header_row};
pub use header_detector::{
    find_header_row_index, is_header_like_token, is_header_row, sanitize_header_row,
};
pub use record_splitter::{
    explode_multi_record_rows, is_likely_data_row, is_serial_number, looks_like_member_id,
};
pub use row::Row;
