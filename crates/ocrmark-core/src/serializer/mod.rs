//! Rendering of region models back into canonical output formats.
//!
//! The markup writer emits the word-tag dialect only; it is the single
//! canonical markup output, and what it writes is exactly what the
//! word-tag parser re-reads (round-trip contract).

pub mod hocr;
pub mod text;

pub use hocr::HocrSerializer;
pub use text::render_lines;
