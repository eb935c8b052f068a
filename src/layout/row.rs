//! Visual row of text fragments.

use crate::fragment::TextFragment;
use crate::text::normalize_text;
use crate::utils::safe_float_cmp;

/// A horizontal band of fragments on one page.
///
/// `y` is the running average of the member fragments' y-positions, updated
/// as each fragment joins. The drift this causes is intentional: the row
/// tracks its centroid, so slightly sloped or jittered lines still collect
/// into one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Page the row belongs to.
    pub page: u32,
    /// Running-average y-position of the member fragments.
    pub y: f32,
    /// Member fragments, sorted ascending by x once grouping finishes.
    pub cells: Vec<TextFragment>,
}

impl Row {
    /// Start a row from its first fragment.
    pub fn new(fragment: TextFragment) -> Self {
        Row {
            page: fragment.page,
            y: fragment.y,
            cells: vec![fragment],
        }
    }

    /// Build a row directly from parts.
    ///
    /// Used by the splitter, which derives new rows from an existing one
    /// and keeps the parent's y so document order survives re-sorting.
    pub fn from_cells(page: u32, y: f32, cells: Vec<TextFragment>) -> Self {
        Row { page, y, cells }
    }

    /// Check whether a fragment's y lands within `tolerance` of this row.
    pub fn accepts(&self, fragment: &TextFragment, tolerance: f32) -> bool {
        self.page == fragment.page && (self.y - fragment.y).abs() <= tolerance
    }

    /// Add a fragment and update the running-average y.
    pub fn absorb(&mut self, fragment: TextFragment) {
        let n = self.cells.len() as f32;
        self.y = (self.y * n + fragment.y) / (n + 1.0);
        self.cells.push(fragment);
    }

    /// Sort cells left to right. Stable, so equal-x fragments keep their
    /// arrival order.
    pub fn sort_cells(&mut self) {
        self.cells.sort_by(|a, b| safe_float_cmp(a.x, b.x));
    }

    /// All cell texts joined with single spaces, whitespace-collapsed.
    ///
    /// Cells are joined in stored order; call after [`sort_cells`]
    /// (grouping does this) to get left-to-right reading order.
    ///
    /// [`sort_cells`]: Row::sort_cells
    pub fn joined_text(&self) -> String {
        let joined = self
            .cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        normalize_text(&joined)
    }

    /// Leftmost cell x, or 0.0 for an empty row.
    pub fn min_x(&self) -> f32 {
        self.cells
            .iter()
            .map(|c| c.x)
            .min_by(|a, b| safe_float_cmp(*a, *b))
            .unwrap_or(0.0)
    }

    /// Rightmost cell x, or 0.0 for an empty row.
    pub fn max_x(&self) -> f32 {
        self.cells
            .iter()
            .map(|c| c.x)
            .max_by(|a, b| safe_float_cmp(*a, *b))
            .unwrap_or(0.0)
    }
}
