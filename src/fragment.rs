//! Positioned text fragments as supplied by PDF text extraction.
//!
//! A fragment is one text run as the extractor reported it, not
//! necessarily a single word or a single glyph. Fragments arrive in
//! arbitrary order; all ordering is recovered downstream.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One positioned text run from a PDF page.
///
/// Coordinates are page-space with the PDF convention: origin bottom-left,
/// `y` increasing upward. `width`/`height` ride along from the extractor
/// but the reconstruction heuristics operate on the `(x, y)` origin only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text run content.
    pub text: String,
    /// Left edge of the run, page space.
    pub x: f32,
    /// Baseline of the run, page space (increases upward).
    pub y: f32,
    /// Reported run width.
    #[serde(default)]
    pub width: f32,
    /// Reported run height.
    #[serde(default)]
    pub height: f32,
    /// Zero-based page index.
    pub page: u32,
}

impl TextFragment {
    /// Create a fragment from the fields the heuristics actually use.
    ///
    /// `width` and `height` default to zero; use [`TextFragment::with_size`]
    /// when the extractor's metrics matter.
    pub fn new(text: impl Into<String>, x: f32, y: f32, page: u32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            page,
        }
    }

    /// Attach the extractor-reported run metrics.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Parse a fragment collection from its JSON interchange form.
///
/// This is the file-shaped version of the extraction collaborator's
/// contract: an array of `{text, x, y, width, height, page}` objects in
/// arbitrary order.
///
/// # Examples
///
/// ```
/// use ledgerlift::fragment::fragments_from_json;
///
/// let json = r#"[{"text": "नाम", "x": 40.0, "y": 700.0, "width": 20.0, "height": 9.0, "page": 0}]"#;
/// let fragments = fragments_from_json(json).unwrap();
/// assert_eq!(fragments.len(), 1);
/// assert_eq!(fragments[0].text, "नाम");
/// ```
pub fn fragments_from_json(data: &str) -> Result<Vec<TextFragment>> {
    Ok(serde_json::from_str(data)?)
}
