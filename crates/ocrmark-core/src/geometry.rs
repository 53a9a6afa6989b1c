//! Geometric primitives for recognized text regions.
//!
//! Coordinates come straight from upstream OCR engines and are not
//! validated: inverted or degenerate rectangles must survive ordering,
//! hashing and serialization unchanged.

use serde::{Deserialize, Serialize};

/// A 2-D integer point in image space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate (pixels from the left edge)
    pub x: i32,
    /// Vertical coordinate (pixels from the top edge)
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    #[must_use = "point is created but not used"]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given as a `(top_left, bottom_right)` point pair.
///
/// Upstream tools occasionally emit rectangles with `top_left` past
/// `bottom_right`; nothing here enforces an orientation, and every
/// operation stays well-defined for arbitrary integer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Upper-left corner
    pub top_left: Point,
    /// Lower-right corner
    pub bottom_right: Point,
}

impl Rect {
    /// Create a new rectangle from its corner points
    #[inline]
    #[must_use = "rectangle is created but not used"]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Create a rectangle from `(x1, y1, x2, y2)` corner coordinates
    #[inline]
    #[must_use = "rectangle is created but not used"]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            top_left: Point::new(x1, y1),
            bottom_right: Point::new(x2, y2),
        }
    }

    /// Get the width (negative for inverted rectangles)
    #[inline]
    #[must_use = "width is computed but not used"]
    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Get the height (negative for inverted rectangles)
    #[inline]
    #[must_use = "height is computed but not used"]
    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Ordering key for regions: vertical extent dominates, horizontal
    /// position breaks ties.
    ///
    /// Regions compare lexicographically on
    /// `(top_left.y, bottom_right.y, top_left.x, bottom_right.x)`.
    #[inline]
    #[must_use = "sort key is computed but not used"]
    pub const fn sort_key(&self) -> (i32, i32, i32, i32) {
        (
            self.top_left.y,
            self.bottom_right.y,
            self.top_left.x,
            self.bottom_right.x,
        )
    }

    /// Pack the four corner coordinates into one byte each of a `u32`.
    ///
    /// Each coordinate is masked with `0xFF`, so values outside the byte
    /// range silently wrap. This is the hash key used by the region
    /// types; see the module documentation of [`crate::boxes`] for why
    /// hashing is geometry-only.
    #[inline]
    #[must_use = "packed value is computed but not used"]
    pub const fn pack(&self) -> u32 {
        (self.top_left.x as u32 & 0xFF)
            | ((self.top_left.y as u32 & 0xFF) << 8)
            | ((self.bottom_right.x as u32 & 0xFF) << 16)
            | ((self.bottom_right.y as u32 & 0xFF) << 24)
    }
}
