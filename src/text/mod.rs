//! Text cleanup: whitespace normalization and legacy-font decoding.
//!
//! Everything downstream of fragment ingestion assumes text has been
//! through this module first. Header detection in particular matches on
//! Devanagari keywords, which only works once Preeti-encoded fragments
//! have been transliterated.

pub mod normalize;
pub mod preeti;

pub use normalize::{normalize_cell_value, normalize_text};
pub use preeti::{is_devanagari, legacy_to_unicode, maybe_preeti_to_unicode};
