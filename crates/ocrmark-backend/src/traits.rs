//! Core trait definition for output builders

use ocrmark_core::{Rect, Result};
use std::path::Path;

/// An expected output shape for one recognition pass.
///
/// Implementations form a closed set — plain text, word boxes, line
/// boxes, plus digit-constrained variants switched on by a constructor
/// flag rather than separate types. OCR-invocation glue needs exactly
/// two things from a builder: which parse/render entry point to use,
/// and the file extensions of the engine output it should capture.
///
/// Builders also serve as incremental assemblers for in-process
/// engines that emit words one at a time instead of a markup document
/// ([`start_line`](Self::start_line) / [`add_word`](Self::add_word) /
/// [`end_line`](Self::end_line) / [`into_output`](Self::into_output)).
pub trait OutputBuilder {
    /// Structured value this builder produces and consumes
    type Output;

    /// File extensions the engine writes for this output shape
    fn file_extensions(&self) -> &'static [&'static str];

    /// Whether the caller asked for digit-only recognition.
    ///
    /// Engines that cannot restrict their character set must refuse the
    /// pass with
    /// [`OcrMarkError::Unsupported`](ocrmark_core::OcrMarkError::Unsupported)
    /// rather than attempt it.
    fn digits_only(&self) -> bool {
        false
    }

    /// Parse one complete engine output buffer.
    ///
    /// The buffer is consumed to completion in a single call; there is
    /// no incremental or resumable parsing across calls.
    ///
    /// # Errors
    /// Returns an error on a fatal markup defect (see
    /// [`OcrMarkError`](ocrmark_core::OcrMarkError)). Input that
    /// matches neither dialect yields an empty output, not an error.
    fn parse(&self, input: &str) -> Result<Self::Output>;

    /// Render structured output back into the canonical text form
    /// (markup for box shapes, plain text otherwise).
    fn render(&self, output: &Self::Output) -> String;

    /// Read `path` and parse its contents.
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output> {
        let data = std::fs::read_to_string(path.as_ref())?;
        self.parse(&data)
    }

    /// Start a new output line at `position`.
    fn start_line(&mut self, position: Rect);

    /// Add a recognized word to the current line.
    fn add_word(&mut self, word: &str, position: Rect, confidence: i32);

    /// Finish the current line.
    fn end_line(&mut self) {}

    /// Consume the builder and return everything assembled so far.
    fn into_output(self) -> Self::Output;
}
