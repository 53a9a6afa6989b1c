//! OCR output parsers and builders for ocrmark.
//!
//! Engines report recognized text in one of two incompatible markup
//! dialects:
//!
//! - **word-tag markup** (Tesseract-style hOCR): every word is its own
//!   span carrying a `bbox X1 Y1 X2 Y2; x_wconf C` title, lines wrap
//!   their words in `ocr_line` spans;
//! - **char-position markup** (Cuneiform-style): whole-line text paired
//!   with a flat list of four coordinates per character, `-1` sentinels
//!   standing in for spaces.
//!
//! [`OutputBuilder`] is the capability interface the OCR-invocation
//! glue programs against: pick a builder for the shape you want, feed
//! it the engine's output buffer, get structured regions back. The
//! builders probe both dialects in a fixed order and return the first
//! non-empty result.
//!
//! Parsing is synchronous and per-document; construct fresh builders
//! per call site and parse concurrent documents with independent
//! instances.
//!
//! # Examples
//!
//! ```rust
//! use ocrmark_backend::{OutputBuilder, WordBoxBuilder};
//!
//! let markup = r#"<span class="ocrx_word" title="bbox 0 0 40 20; x_wconf 90">Hello</span>"#;
//! let words = WordBoxBuilder::new().parse(markup)?;
//! assert_eq!(words.len(), 1);
//! assert_eq!(words[0].content, "Hello");
//! assert_eq!(words[0].confidence, 90);
//! # Ok::<(), ocrmark_core::OcrMarkError>(())
//! ```

pub mod builders;
pub mod traits;

mod char_positions;
mod utils;
mod word_spans;

pub use builders::{LineBoxBuilder, TextBuilder, WordBoxBuilder};
pub use traits::OutputBuilder;
