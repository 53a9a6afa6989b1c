//! Recognized text regions: words and lines with bounding rectangles.
//!
//! # Geometric equality
//!
//! `WordBox` and `LineBox` compare, order and hash **by rectangle
//! alone**. Two regions with identical rectangles but different text
//! content are equal and hash identically. This is deliberate — the
//! readers rely on it to deduplicate the trailing-empty-region artifact
//! some engines emit — but it is a sharp edge for consumers: do not use
//! these types as map keys expecting content to participate.
//!
//! The ordering is lexicographic on
//! `(top_left.y, bottom_right.y, top_left.x, bottom_right.x)`: vertical
//! position dominates, horizontal position breaks ties. Wrapping a
//! region in `Option` gives the absence-sorts-first rule for free
//! (`None < Some(region)`).

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single recognized word and the rectangle it was read from.
///
/// Created by the markup parsers, or directly by callers assembling
/// output word by word. Treated as immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBox {
    /// Recognized text, verbatim as produced by the engine
    pub content: String,
    /// Bounding rectangle on the source image
    pub position: Rect,
    /// Engine confidence score; 0 when the engine carries none
    pub confidence: i32,
}

impl WordBox {
    /// Create a word box with the default confidence of 0
    #[inline]
    #[must_use = "word box is created but not used"]
    pub fn new(content: impl Into<String>, position: Rect) -> Self {
        Self {
            content: content.into(),
            position,
            confidence: 0,
        }
    }

    /// Create a word box carrying an engine confidence score
    #[inline]
    #[must_use = "word box is created but not used"]
    pub fn with_confidence(content: impl Into<String>, position: Rect, confidence: i32) -> Self {
        Self {
            content: content.into(),
            position,
            confidence,
        }
    }
}

impl PartialEq for WordBox {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position.sort_key() == other.position.sort_key()
    }
}

impl Eq for WordBox {}

impl PartialOrd for WordBox {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordBox {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.sort_key().cmp(&other.position.sort_key())
    }
}

impl Hash for WordBox {
    // Geometry only, matching equality. Content never contributes.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.position.pack());
    }
}

impl fmt::Display for WordBox {
    /// Box-file rendering: content followed by the four corner integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.content,
            self.position.top_left.x,
            self.position.top_left.y,
            self.position.bottom_right.x,
            self.position.bottom_right.y,
        )
    }
}

/// A recognized line: the word boxes it contains plus its own rectangle.
///
/// Owns its [`WordBox`] children exclusively; the line's text is a
/// derived projection over them, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineBox {
    /// Word boxes in source order
    pub word_boxes: Vec<WordBox>,
    /// Bounding rectangle of the whole line
    pub position: Rect,
}

impl LineBox {
    /// Create a line box from its word boxes and rectangle
    #[inline]
    #[must_use = "line box is created but not used"]
    pub fn new(word_boxes: Vec<WordBox>, position: Rect) -> Self {
        Self {
            word_boxes,
            position,
        }
    }

    /// The line's text: space-joined word contents, trimmed.
    ///
    /// Recomputed on every call so it can never go stale against
    /// `word_boxes`.
    #[must_use = "line content is computed but not used"]
    pub fn content(&self) -> String {
        self.word_boxes
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

impl PartialEq for LineBox {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position.sort_key() == other.position.sort_key()
    }
}

impl Eq for LineBox {}

impl PartialOrd for LineBox {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LineBox {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.sort_key().cmp(&other.position.sort_key())
    }
}

impl Hash for LineBox {
    // Geometry only, matching equality. Content never contributes.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.position.pack());
    }
}

impl fmt::Display for LineBox {
    /// Box-file rendering: a bracketed block of nested word lines
    /// followed by the line's own four corner integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for word in &self.word_boxes {
            writeln!(f, "  {word}")?;
        }
        write!(
            f,
            "] {} {} {} {}",
            self.position.top_left.x,
            self.position.top_left.y,
            self.position.bottom_right.x,
            self.position.bottom_right.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_word_box_defaults_confidence_to_zero() {
        let word = WordBox::new("Hello", Rect::from_coords(0, 0, 40, 20));
        assert_eq!(word.confidence, 0);
        assert_eq!(word.content, "Hello");
    }

    #[test]
    fn test_vertical_position_dominates_ordering() {
        let upper = WordBox::new("b", Rect::from_coords(500, 0, 600, 20));
        let lower = WordBox::new("a", Rect::from_coords(0, 30, 50, 50));
        assert!(upper < lower);
        assert!(lower > upper);
    }

    #[test]
    fn test_horizontal_position_breaks_ties() {
        let left = WordBox::new("a", Rect::from_coords(0, 0, 40, 20));
        let right = WordBox::new("b", Rect::from_coords(45, 0, 100, 20));
        assert!(left < right);
    }

    #[test]
    fn test_equality_is_purely_geometric() {
        let rect = Rect::from_coords(10, 10, 50, 30);
        let a = WordBox::with_confidence("alpha", rect, 90);
        let b = WordBox::with_confidence("omega", rect, 10);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(a <= b && a >= b);
    }

    #[test]
    fn test_comparisons_are_mutually_exclusive() {
        let a = WordBox::new("a", Rect::from_coords(0, 0, 40, 20));
        let b = WordBox::new("b", Rect::from_coords(0, 0, 40, 25));
        assert!(a < b);
        assert!(a != b);
        assert!(!(a > b));
        assert!(!(a == b));
    }

    #[test]
    fn test_absence_sorts_first() {
        let word = WordBox::new("w", Rect::from_coords(0, 0, 1, 1));
        let present = Some(&word);
        let absent: Option<&WordBox> = None;
        assert!(present > absent);
        assert!(absent < present);
        assert!(present != absent);
        assert!(!(present < absent));
    }

    #[test]
    fn test_line_content_is_derived_and_trimmed() {
        let mut line = LineBox::new(
            vec![
                WordBox::new("Hello", Rect::from_coords(0, 0, 40, 20)),
                WordBox::new("World", Rect::from_coords(45, 0, 100, 20)),
            ],
            Rect::from_coords(0, 0, 100, 20),
        );
        assert_eq!(line.content(), "Hello World");

        // Derived on access: mutation is reflected immediately
        line.word_boxes
            .push(WordBox::new("again", Rect::from_coords(105, 0, 140, 20)));
        assert_eq!(line.content(), "Hello World again");

        line.word_boxes.clear();
        assert_eq!(line.content(), "");
    }

    #[test]
    fn test_line_content_with_empty_word() {
        let line = LineBox::new(
            vec![
                WordBox::new("end", Rect::from_coords(0, 0, 30, 20)),
                WordBox::new("", Rect::from_coords(30, 0, 30, 20)),
            ],
            Rect::from_coords(0, 0, 30, 20),
        );
        // Trailing join artifact is trimmed away
        assert_eq!(line.content(), "end");
    }

    #[test]
    fn test_word_box_display() {
        let word = WordBox::with_confidence("Hello", Rect::from_coords(0, 1, 40, 20), 90);
        assert_eq!(word.to_string(), "Hello 0 1 40 20");
    }

    #[test]
    fn test_line_box_display() {
        let line = LineBox::new(
            vec![
                WordBox::new("Hello", Rect::from_coords(0, 0, 40, 20)),
                WordBox::new("World", Rect::from_coords(45, 0, 100, 20)),
            ],
            Rect::from_coords(0, 0, 100, 20),
        );
        assert_eq!(
            line.to_string(),
            "[\n  Hello 0 0 40 20\n  World 45 0 100 20\n] 0 0 100 20"
        );
    }

    #[test]
    fn test_line_box_ordering_matches_word_box_rules() {
        let upper = LineBox::new(vec![], Rect::from_coords(0, 0, 100, 20));
        let lower = LineBox::new(vec![], Rect::from_coords(0, 25, 100, 45));
        assert!(upper < lower);
        assert_eq!(
            upper,
            LineBox::new(
                vec![WordBox::new("ignored", Rect::from_coords(5, 5, 9, 9))],
                Rect::from_coords(0, 0, 100, 20)
            )
        );
    }
}
