//! Statistical column-boundary inference.
//!
//! Column positions are learned from the data rows themselves: the left
//! edges of cells recur at the same x across rows, so pooling and
//! clustering them reveals the column starts. A significance filter
//! keeps the inference robust to noisy or partial rows. The header row
//! serves two smaller roles: recovering a trailing column that data rows
//! rarely populate, and acting as the fallback source of boundaries when
//! the data sample is too thin.

use crate::config::EngineConfig;
use crate::layout::clustering::cluster_positions;
use crate::layout::record_splitter::is_likely_data_row;
use crate::layout::row::Row;
use crate::utils::safe_float_cmp;

/// Infer column stops from the header row's label positions.
///
/// A label x-position opens a new column only when it sits at least
/// [`header_column_gap`](EngineConfig::header_column_gap) past the
/// previously accepted start, which coalesces multi-token labels into
/// one column. Returns an empty list when fewer than two starts remain.
pub fn infer_column_stops_from_header_row(header: &Row, config: &EngineConfig) -> Vec<f32> {
    let mut positions: Vec<f32> = header.cells.iter().map(|c| c.x).collect();
    positions.sort_by(|a, b| safe_float_cmp(*a, *b));

    let mut starts: Vec<f32> = Vec::new();
    for x in positions {
        match starts.last() {
            Some(&prev) if x - prev < config.header_column_gap => {}
            _ => starts.push(x),
        }
    }

    if starts.len() < 2 {
        return Vec::new();
    }
    starts.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Infer column stops from a sample of data rows, with header fallback.
///
/// Samples up to
/// [`column_sample_size`](EngineConfig::column_sample_size) likely data
/// rows, records each row's cell starts (a cell opens a start when it is
/// at least [`data_column_gap`](EngineConfig::data_column_gap) past the
/// previous start in that row), pools the starts, and clusters them.
/// Clusters below the significance floor of
/// max([`min_cluster_count`](EngineConfig::min_cluster_count),
/// [`cluster_significance_ratio`](EngineConfig::cluster_significance_ratio)
/// of the sample) are discarded.
///
/// The header's rightmost label recovers a trailing column the data
/// rows left empty. When fewer than two significant starts survive, the
/// header-derived inference takes over; when that fails too, the result
/// is empty and the table collapses to a single column.
pub fn infer_column_stops_from_data_rows(
    rows: &[Row],
    header: &Row,
    config: &EngineConfig,
) -> Vec<f32> {
    let sample: Vec<&Row> = rows
        .iter()
        .filter(|r| is_likely_data_row(r, config))
        .take(config.column_sample_size)
        .collect();

    let mut pooled: Vec<f32> = Vec::new();
    for row in &sample {
        let mut last_start: Option<f32> = None;
        for cell in &row.cells {
            let opens_start = match last_start {
                Some(prev) => cell.x - prev >= config.data_column_gap,
                None => true,
            };
            if opens_start {
                pooled.push(cell.x);
                last_start = Some(cell.x);
            }
        }
    }
    pooled.sort_by(|a, b| safe_float_cmp(*a, *b));

    let clusters = cluster_positions(&pooled, config.column_cluster_tolerance);
    let significance = (sample.len() as f32 * config.cluster_significance_ratio)
        .max(config.min_cluster_count as f32);
    let mut centers: Vec<f32> = clusters
        .iter()
        .filter(|c| c.count as f32 >= significance)
        .map(|c| c.center)
        .collect();

    // Recover a trailing column (e.g. remarks) that data rows rarely fill
    let header_right = header.max_x();
    let covered = centers
        .iter()
        .any(|&c| (c - header_right).abs() <= config.trailing_column_tolerance);
    let beyond_last = centers.last().is_some_and(|&last| header_right > last);
    if !covered && beyond_last {
        log::debug!(
            "appending trailing column boundary from header at x {:.1}",
            header_right
        );
        centers.push(header_right);
    }

    centers.sort_by(|a, b| safe_float_cmp(*a, *b));
    if centers.len() < 2 {
        log::debug!(
            "{} significant column starts in {} sampled rows, trying header-derived stops",
            centers.len(),
            sample.len()
        );
        return infer_column_stops_from_header_row(header, config);
    }
    centers.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}
