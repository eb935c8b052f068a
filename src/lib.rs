//! # ledgerlift
//!
//! Table reconstruction for Nepali cooperative ledger PDFs: turns an
//! unordered bag of positioned text fragments into an ordered table
//! with a header row, ready for CSV export.
//!
//! ## Pipeline
//!
//! 1. **Decode**: Preeti-encoded fragments are transliterated to
//!    Unicode Devanagari; real Devanagari, IDs, and amounts pass through
//! 2. **Group**: fragments cluster into visual rows by vertical
//!    proximity (running-centroid mean)
//! 3. **Split**: rows carrying two side-by-side records are detected
//!    and split into independent rows
//! 4. **Locate header**: the header row is found by Nepali column-label
//!    keywords and stripped of data tokens that bled into it
//! 5. **Infer columns**: column boundaries are learned statistically
//!    from recurring cell positions across data rows, with a
//!    header-derived fallback
//! 6. **Assemble and serialize**: rows map into the inferred columns and
//!    the table serializes to CSV (optionally with a UTF-8 BOM)
//!
//! Every heuristic stage fails safe: below its confidence thresholds it
//! returns its input unchanged rather than erroring. The only hard
//! failures are empty input and a missing header row.
//!
//! ## Quick Start
//!
//! ```
//! use ledgerlift::{TableExtractor, TextFragment};
//!
//! let fragments = vec![
//!     TextFragment::new("सि.नं.", 0.0, 740.0, 1),
//!     TextFragment::new("सदस्यको नाम", 60.0, 740.0, 1),
//!     TextFragment::new("ठेगाना", 130.0, 740.0, 1),
//!     TextFragment::new("बचत रकम", 210.0, 740.0, 1),
//!     TextFragment::new("1", 0.0, 720.0, 1),
//!     TextFragment::new("राम बहादुर", 60.0, 720.0, 1),
//!     TextFragment::new("550022050100002/13-14", 130.0, 720.0, 1),
//!     TextFragment::new("1,500.00", 210.0, 720.0, 1),
//! ];
//!
//! let extraction = TableExtractor::new().extract(fragments)?;
//! let csv = extraction.to_csv_with_bom();
//! assert!(csv.contains("राम बहादुर"));
//! # Ok::<(), ledgerlift::Error>(())
//! ```
//!
//! ## Tuning
//!
//! All heuristic thresholds are empirical constants tuned to a specific
//! family of ledger documents, exposed through [`EngineConfig`] so the
//! engine can be retuned for other layouts without code changes.
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input model and configuration
pub mod config;
pub mod fragment;

// Text cleanup and legacy-font decoding
pub mod text;

// Geometric analysis: rows, record splitting, header, columns
pub mod layout;

// Table assembly and serialization
pub mod csv;
pub mod table;

// Pipeline orchestration
pub mod extractor;

// Re-exports
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use extractor::{ExtractionWarning, TableExtraction, TableExtractor};
pub use fragment::{fragments_from_json, TextFragment};
pub use layout::Row;
pub use table::Table;

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on a NaN comparison.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }

        #[test]
        fn test_safe_float_cmp_infinity() {
            assert_eq!(safe_float_cmp(f32::INFINITY, f32::INFINITY), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::INFINITY, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(f32::NEG_INFINITY, f32::INFINITY), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "ledgerlift");
    }
}
