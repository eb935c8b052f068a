//! Error types for the table reconstruction engine.
//!
//! Heuristic stages never fail: low confidence means a stage returns its
//! input unchanged. The errors here cover the few genuinely unrecoverable
//! states plus the fragment-interchange surface.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No row matched the header keyword set; no partial table is produced.
    #[error("could not find the table header row")]
    HeaderNotFound,

    /// The fragment collection was empty.
    #[error("no text fragments to process")]
    EmptyInput,

    /// Malformed fragment JSON from the extraction collaborator.
    #[error("invalid fragment data: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (fragment dumps, CSV output files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
