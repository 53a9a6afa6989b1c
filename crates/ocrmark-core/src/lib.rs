//! Core region types and serialization for ocrmark.
//!
//! OCR engines report recognized text as positioned regions: words with
//! bounding rectangles and confidence scores, grouped into lines. This
//! crate holds those value types ([`WordBox`], [`LineBox`]), their
//! geometric ordering and equality semantics, the error type shared
//! across the workspace, and the writers that render regions back into
//! hOCR markup, plain text and the box-file format.
//!
//! # Ordering and equality
//!
//! Regions compare by rectangle alone — vertical extent first,
//! horizontal as tie-break — and hashing follows equality. Two regions
//! with the same rectangle but different text are **equal**. See the
//! [`boxes`] module documentation before using regions as map keys.
//!
//! # Examples
//!
//! ```rust
//! use ocrmark_core::{HocrSerializer, Rect, WordBox};
//!
//! let word = WordBox::with_confidence("Hello", Rect::from_coords(0, 0, 40, 20), 90);
//! assert_eq!(word.to_string(), "Hello 0 0 40 20");
//!
//! let markup = HocrSerializer::new().serialize_words(&[word]);
//! assert!(markup.contains("x_wconf 90"));
//! ```

pub mod boxes;
pub mod error;
pub mod geometry;
pub mod serializer;

pub use boxes::{LineBox, WordBox};
pub use error::{OcrMarkError, Result};
pub use geometry::{Point, Rect};
pub use serializer::{render_lines, HocrSerializer};
