//! Position clustering: fragments into rows, scalars into centroid groups.
//!
//! Both jobs use the same incremental-mean technique. A value joins the
//! first cluster whose running centroid lies within tolerance, and the
//! centroid updates as members join. Means are never recomputed from
//! scratch; the slight centroid drift this produces is part of the
//! intended behavior.

use std::cmp::Ordering;

use crate::config::EngineConfig;
use crate::fragment::TextFragment;
use crate::layout::row::Row;
use crate::text::normalize_text;
use crate::utils::safe_float_cmp;

/// Running-mean accumulator for a group of scalar positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionCluster {
    /// Incremental mean of the member positions.
    pub center: f32,
    /// Number of positions absorbed so far.
    pub count: usize,
}

impl PositionCluster {
    /// Start a cluster from its first member.
    pub fn new(value: f32) -> Self {
        PositionCluster { center: value, count: 1 }
    }

    /// Check whether a value lies within `tolerance` of the centroid.
    pub fn accepts(&self, value: f32, tolerance: f32) -> bool {
        (self.center - value).abs() <= tolerance
    }

    /// Add a value and update the centroid incrementally.
    pub fn absorb(&mut self, value: f32) {
        let n = self.count as f32;
        self.center = (self.center * n + value) / (n + 1.0);
        self.count += 1;
    }
}

/// Group scalar positions into clusters with the given tolerance.
///
/// Each value joins the first cluster (in creation order) whose centroid
/// is within `tolerance`, not necessarily the closest one. The result is
/// sorted ascending by centroid.
pub fn cluster_positions(values: &[f32], tolerance: f32) -> Vec<PositionCluster> {
    let mut clusters: Vec<PositionCluster> = Vec::new();

    for &value in values {
        match clusters.iter().position(|c| c.accepts(value, tolerance)) {
            Some(i) => clusters[i].absorb(value),
            None => clusters.push(PositionCluster::new(value)),
        }
    }

    clusters.sort_by(|a, b| safe_float_cmp(a.center, b.center));
    clusters
}

/// Strict document order for rows: page ascending, then y descending.
///
/// PDF y grows upward, so descending y reads top to bottom.
pub fn document_order(a: &Row, b: &Row) -> Ordering {
    a.page.cmp(&b.page).then_with(|| safe_float_cmp(b.y, a.y))
}

/// Cluster fragments into visual rows by vertical proximity.
///
/// Fragments are first sorted into reading order (page ascending,
/// y descending, x ascending), then each one joins the first existing
/// row on its page whose running-average y is within
/// [`y_tolerance`](EngineConfig::y_tolerance), or starts a new row.
/// Fragments whose text normalizes to empty are dropped.
///
/// Returned rows have their cells sorted by x and are themselves in
/// document order.
///
/// # Examples
///
/// ```
/// use ledgerlift::{EngineConfig, TextFragment};
/// use ledgerlift::layout::group_into_rows;
///
/// let fragments = vec![
///     TextFragment::new("नाम", 80.0, 700.5, 1),
///     TextFragment::new("१", 10.0, 700.0, 1),
///     TextFragment::new("ठेगाना", 10.0, 680.0, 1),
/// ];
/// let rows = group_into_rows(fragments, &EngineConfig::default());
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].joined_text(), "१ नाम");
/// ```
pub fn group_into_rows(mut fragments: Vec<TextFragment>, config: &EngineConfig) -> Vec<Row> {
    fragments.retain(|f| !normalize_text(&f.text).is_empty());

    // Reading order: top-to-bottom, left-to-right within each page
    fragments.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| safe_float_cmp(b.y, a.y))
            .then_with(|| safe_float_cmp(a.x, b.x))
    });

    let mut rows: Vec<Row> = Vec::new();
    for fragment in fragments {
        match rows
            .iter()
            .position(|r| r.accepts(&fragment, config.y_tolerance))
        {
            Some(i) => rows[i].absorb(fragment),
            None => rows.push(Row::new(fragment)),
        }
    }

    for row in &mut rows {
        row.sort_cells();
    }
    rows.sort_by(document_order);
    rows
}
