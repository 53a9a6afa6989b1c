//! Error types for OCR markup parsing and rendering.

use thiserror::Error;

/// Error types that can occur while parsing or rendering OCR output.
///
/// Locally recoverable conditions (a word tag with a malformed
/// descriptor, a missing confidence marker) never surface here — the
/// parsers skip or default those and keep going. These variants are the
/// fatal ones that abort a document.
#[derive(Error, Debug)]
pub enum OcrMarkError {
    /// Markup-level parse failure.
    ///
    /// Carries the failing fragment or token so the offending document
    /// region can be diagnosed.
    #[error("Markup parse error: {0}")]
    ParseError(String),

    /// A per-character position token that is not an integer.
    #[error("Invalid coordinate token: {0}")]
    InvalidCoordinate(String),

    /// A line's text needs more per-character coordinates than its
    /// positions list provides.
    ///
    /// This indicates malformed char-position markup; no partial result
    /// is returned for the document.
    #[error("Coordinates exhausted for word {word:?}: needed {needed} tokens, {available} available")]
    CoordinatesExhausted {
        /// The word whose characters could not be paired with coordinates
        word: String,
        /// Coordinate tokens required (four per character)
        needed: usize,
        /// Coordinate tokens remaining in the line's positions list
        available: usize,
    },

    /// An output shape was requested from an engine that cannot honor it
    /// (e.g. digit-only recognition).
    #[error("Unsupported output request: {0}")]
    Unsupported(String),

    /// File I/O error from the convenience file-reading paths.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for [`Result<T, OcrMarkError>`].
pub type Result<T> = std::result::Result<T, OcrMarkError>;
