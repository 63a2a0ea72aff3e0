//! Planar coordinate type.
//!
//! The world is a continuous square; positions use `f64` so that repeated
//! small noisy steps do not accumulate visible rounding drift.

/// A point (or offset) in world coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset `other - self`.
    #[inline]
    pub fn offset_to(self, other: Point2) -> Point2 {
        Point2::new(other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        let d = self.offset_to(other);
        d.x.hypot(d.y)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.x, self.y)
    }
}
