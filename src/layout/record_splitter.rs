//! Multi-record row detection and splitting.
//!
//! Wide ledger pages sometimes print two or more complete records on one
//! visual line. Left as-is, those rows wreck column inference: a single
//! row carries two serial numbers and two member IDs at unrelated
//! x-positions. This module detects such rows and splits them into
//! independent rows, one per record.
//!
//! Detection escalates through three strategies:
//! 1. member-ID anchors: widely separated clusters of member-ID cells
//! 2. nearby-serial fallback: serial cells found just left of each ID
//! 3. generic scan: serial cells with a clear gap before and an ID after
//!
//! Every strategy fails safe. A row that does not meet the confidence
//! thresholds is returned unmodified; the splitter never raises.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::EngineConfig;
use crate::fragment::TextFragment;
use crate::layout::clustering::{cluster_positions, document_order, PositionCluster};
use crate::layout::row::Row;
use crate::text::normalize_text;
use crate::utils::safe_float_cmp;

lazy_static! {
    /// Member-ID pattern: at least six digits, optional `/NN` and `-NN`
    /// suffixes, e.g. `550022050100002/13-14`
    static ref RE_MEMBER_ID: Regex = Regex::new(r"^\d{6,}(/\d+)?(-\d+)?$").unwrap();
    /// Bare serial number: one to four digits
    static ref RE_SERIAL: Regex = Regex::new(r"^\d{1,4}$").unwrap();
}

/// True if the text matches the ledger member-ID pattern.
///
/// IDs are the strongest record anchor in these documents. `\d` is
/// Unicode-aware, so Devanagari digits qualify as well.
pub fn looks_like_member_id(text: &str) -> bool {
    RE_MEMBER_ID.is_match(&normalize_text(text))
}

/// True if the text is a bare 1-4 digit serial number.
pub fn is_serial_number(text: &str) -> bool {
    RE_SERIAL.is_match(&normalize_text(text))
}

/// Heuristic test for a row holding an actual data record.
///
/// Requires enough cells plus both a serial-number cell and a member-ID
/// cell. Header rows and page furniture fail this.
pub fn is_likely_data_row(row: &Row, config: &EngineConfig) -> bool {
    row.cells.len() >= config.min_data_row_cells
        && row.cells.iter().any(|c| is_serial_number(&c.text))
        && row.cells.iter().any(|c| looks_like_member_id(&c.text))
}

/// Split every multi-record row in the collection, preserving document
/// order.
///
/// Rows that split are replaced in place by their records; all other
/// rows pass through untouched. The result is re-sorted by
/// (page ascending, y descending). Split siblings share their parent's
/// y, and the sort is stable, so they keep left-to-right record order.
pub fn explode_multi_record_rows(rows: Vec<Row>, config: &EngineConfig) -> Vec<Row> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        match split_row(&row, config) {
            Some(records) => {
                log::debug!(
                    "split row (page {}, y {:.1}) into {} records",
                    row.page,
                    row.y,
                    records.len()
                );
                out.extend(records);
            }
            None => out.push(row),
        }
    }
    out.sort_by(document_order);
    out
}

/// Try to split one row into records. `None` means keep the original.
fn split_row(row: &Row, config: &EngineConfig) -> Option<Vec<Row>> {
    // Strategy 1: anchor on member-ID positions
    let id_positions: Vec<f32> = row
        .cells
        .iter()
        .filter(|c| looks_like_member_id(&c.text))
        .map(|c| c.x)
        .collect();
    let id_clusters = cluster_positions(&id_positions, config.id_cluster_tolerance);

    if id_clusters.len() >= 2 && max_consecutive_gap(&id_clusters) >= config.id_split_gap {
        // Boundaries at midpoints between consecutive ID cluster centers
        let boundaries: Vec<f32> = id_clusters
            .windows(2)
            .map(|w| (w[0].center + w[1].center) / 2.0)
            .collect();
        let blocks = partition_into_records(row, &boundaries, config);
        if blocks.len() >= 2 {
            return Some(blocks);
        }
        // Anchors were convincing but the cells did not divide into two
        // real records; keep the row whole
        return None;
    }

    // Strategy 2: serial cells just left of each member ID
    let mut starts = record_starts_near_ids(row, config);

    // Strategy 3: generic scan, only when strategy 2 found nothing
    if starts.is_empty() {
        starts = row
            .cells
            .iter()
            .enumerate()
            .filter(|(i, _)| is_record_start_cell(row, *i, config))
            .map(|(_, c)| c.x)
            .collect();
    }
    if starts.is_empty() {
        return None;
    }

    let start_clusters = cluster_positions(&starts, config.start_cluster_tolerance);
    if start_clusters.len() < 2 {
        return None;
    }
    if max_consecutive_gap(&start_clusters) < config.start_split_gap {
        return None;
    }

    // Block i spans [start_i, start_{i+1}); cells left of the first start
    // fall into block 0
    let boundaries: Vec<f32> = start_clusters[1..].iter().map(|c| c.center).collect();
    let blocks = partition_into_records(row, &boundaries, config);
    if blocks.is_empty() {
        None
    } else {
        Some(blocks)
    }
}

/// Candidate record starts from the nearest serial cell left of each
/// member-ID cell, within the search window.
fn record_starts_near_ids(row: &Row, config: &EngineConfig) -> Vec<f32> {
    let mut starts = Vec::new();
    for id_cell in row.cells.iter().filter(|c| looks_like_member_id(&c.text)) {
        let nearest = row
            .cells
            .iter()
            .filter(|c| {
                is_serial_number(&c.text)
                    && c.x < id_cell.x
                    && id_cell.x - c.x <= config.serial_search_window
            })
            .max_by(|a, b| safe_float_cmp(a.x, b.x));
        if let Some(serial) = nearest {
            starts.push(serial.x);
        }
    }
    starts
}

/// Generic record-start test for the cell at `index`.
///
/// A start is a serial cell with a clear gap to its left neighbor (if
/// one exists) and a member-ID cell within the lookahead to its right.
/// The gap requirement rejects adjacent numeric codes inside a record.
fn is_record_start_cell(row: &Row, index: usize, config: &EngineConfig) -> bool {
    let cell = &row.cells[index];
    if !is_serial_number(&cell.text) {
        return false;
    }
    if index > 0 && cell.x - row.cells[index - 1].x < config.record_start_min_gap {
        return false;
    }
    row.cells[index + 1..]
        .iter()
        .any(|c| looks_like_member_id(&c.text) && c.x - cell.x <= config.member_id_lookahead)
}

/// Partition a row's cells at the given x-boundaries into record rows.
///
/// Blocks with fewer than
/// [`min_record_cells`](EngineConfig::min_record_cells) cells are
/// dropped. Each surviving block is re-zeroed to its own minimum x so
/// records from different horizontal positions align for column
/// inference, and inherits the parent row's page and y.
fn partition_into_records(row: &Row, boundaries: &[f32], config: &EngineConfig) -> Vec<Row> {
    let mut blocks: Vec<Vec<TextFragment>> = vec![Vec::new(); boundaries.len() + 1];
    for cell in &row.cells {
        let idx = boundaries
            .iter()
            .position(|&b| cell.x < b)
            .unwrap_or(boundaries.len());
        blocks[idx].push(cell.clone());
    }

    blocks
        .into_iter()
        .filter(|cells| cells.len() >= config.min_record_cells)
        .map(|mut cells| {
            let origin = cells
                .iter()
                .map(|c| c.x)
                .min_by(|a, b| safe_float_cmp(*a, *b))
                .unwrap_or(0.0);
            for cell in &mut cells {
                cell.x -= origin;
            }
            Row::from_cells(row.page, row.y, cells)
        })
        .collect()
}

/// Largest gap between consecutive cluster centers (clusters sorted
/// ascending). Zero for fewer than two clusters.
fn max_consecutive_gap(clusters: &[PositionCluster]) -> f32 {
    clusters
        .windows(2)
        .map(|w| w[1].center - w[0].center)
        .fold(0.0, f32::max)
}
